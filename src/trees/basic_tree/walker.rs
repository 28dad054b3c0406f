// This is a private module, so no documentation for it directly.
// instead look for documentation of the `BasicWalker` struct.

use super::*;
use crate::locators::*;
use crate::trees::{Side, SomeWalker};
use recursive_reference::*;

const NO_VALUE_ERROR: &str = "invariant violated: RecRef can't be empty";

struct Frame<D: Data> {
    left: D::Summary,
    right: D::Summary,
}

// the default clone implementation requires that D: Clone, which is uneccessary
impl<D: Data> Clone for Frame<D> {
    fn clone(&self) -> Self {
        Frame {
            left: self.left,
            right: self.right,
        }
    }
}

impl<D: Data> Frame<D> {
    fn empty() -> Frame<D> {
        Frame {
            left: Default::default(),
            right: Default::default(),
        }
    }
}

// Invariant: the current node is always already accessed,
// and only nodes on the path from the root to the current node (exclusive) may have
// incorrect summaries.

/// This struct implements a walker for the [`BasicTree`] type.
/// It is a struct that has a mutable reference of the tree, and allows you to walk up and down on it.
/// The walker may also be in a position which is the son of a node, but doesn't contain
/// a node by itself, and then it is said to be in an empty position.
///
/// The walker will automatically go back up the tree to the root when dropped,
/// in order to rebuild all the nodes.
///
/// Internally, [`recursive_reference::RecRef`] is used, in order to be able to dynamically
/// go up and down the tree without upsetting the borrow checker.
pub struct BasicWalker<'a, D: Data, T = ()> {
    /// Holds references to all the subtrees from the root to the current position.
    rec_ref: RecRef<'a, BasicTree<D, T>>,

    /// This array holds the accumulation of all the values left of the subtree, and
    /// all of the values right of the subtree, for every subtree from the root to
    /// the current subtree.
    vals: Vec<Frame<D>>,

    /// This array holds for every node, whether the next subtree in the walker
    /// is its left son or the right son.
    /// This array is always one shorter than [`BasicWalker::rec_ref`] and [`BasicWalker::vals`],
    /// because the last node has no son in the walker.
    is_left: Vec<Side>,
}

impl<'a, D: Data, T> BasicWalker<'a, D, T> {
    pub fn new(tree: &'a mut BasicTree<D, T>) -> BasicWalker<'a, D, T> {
        tree.access();
        BasicWalker {
            rec_ref: RecRef::new(tree),
            vals: vec![Frame::empty()],
            is_left: vec![],
        }
    }

    pub fn node(&self) -> Option<&BasicNode<D, T>> {
        self.rec_ref.node()
    }

    /// Applies the action to the value at the current position only.
    /// The ancestors are rebuilt when the walker goes back up.
    /// Returns [`None`] at an empty position.
    pub fn act_node(&mut self, action: D::Action) -> Option<()> {
        let node = self.rec_ref.node_mut()?;
        node.act_value(action);
        Some(())
    }

    /// Walks down the current subtree according to the locator,
    /// until reaching an accepted node or an empty position.
    pub fn search_subtree<L: Locator<D>>(&mut self, locator: L) {
        while let Some(res) = query_locator::<_, D, _>(&*self, &locator) {
            let moved = match res {
                LocResult::Accept => break,
                LocResult::GoRight => self.go_right(),
                LocResult::GoLeft => self.go_left(),
            };
            moved.expect("a non-empty position always has sons");
        }
    }

    pub fn go_to_root(&mut self) {
        while self.go_up().is_ok() {}
    }
}

impl<'a, D: Data, T> SomeWalker<D> for BasicWalker<'a, D, T> {
    fn go_left(&mut self) -> Result<(), ()> {
        let mut frame = self.vals.last().expect(NO_VALUE_ERROR).clone();
        let res = RecRef::extend_result(&mut self.rec_ref, |tree| {
            if let Some(node) = tree.node_mut() {
                // update values
                frame.right = node.node_summary() + node.right.subtree_summary() + frame.right;
                node.left.access();
                Ok(&mut node.left)
            } else {
                Err(())
            }
        });
        // push side information
        if res.is_ok() {
            self.is_left.push(Side::Left); // went left
            self.vals.push(frame);
        }
        res
    }

    fn go_right(&mut self) -> Result<(), ()> {
        let mut frame = self.vals.last().expect(NO_VALUE_ERROR).clone();
        let res = RecRef::extend_result(&mut self.rec_ref, |tree| {
            if let Some(node) = tree.node_mut() {
                // update values
                frame.left = frame.left + node.left.subtree_summary() + node.node_summary();
                node.right.access();
                Ok(&mut node.right)
            } else {
                Err(())
            }
        });
        // push side information
        if res.is_ok() {
            self.is_left.push(Side::Right); // went right
            self.vals.push(frame);
        }
        res
    }

    fn go_up(&mut self) -> Result<Side, ()> {
        match self.is_left.pop() {
            None => Err(()),
            Some(b) => {
                RecRef::pop(&mut self.rec_ref).expect(NO_VALUE_ERROR);
                self.vals.pop().expect(NO_VALUE_ERROR);
                self.rec_ref.rebuild();
                Ok(b)
            }
        }
    }

    fn far_left_summary(&self) -> D::Summary {
        self.vals.last().expect(NO_VALUE_ERROR).left
    }

    fn far_right_summary(&self) -> D::Summary {
        self.vals.last().expect(NO_VALUE_ERROR).right
    }

    fn left_summary(&self) -> D::Summary {
        let left_son = match self.node() {
            Some(node) => node.left.subtree_summary(),
            None => Default::default(),
        };
        self.far_left_summary() + left_son
    }

    fn right_summary(&self) -> D::Summary {
        let right_son = match self.node() {
            Some(node) => node.right.subtree_summary(),
            None => Default::default(),
        };
        right_son + self.far_right_summary()
    }

    fn value(&self) -> Option<&D::Value> {
        Some(self.node()?.node_value())
    }
}

/// This implementation exists in order to rebuild the nodes
/// when the walker gets dropped
impl<'a, D: Data, T> Drop for BasicWalker<'a, D, T> {
    fn drop(&mut self) {
        self.go_to_root();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sequence_data::*;
    use crate::trees::treap::Treap;

    #[test]
    fn walker_summaries() {
        let mut treap: Treap<SeqData> = Treap::seeded_from(0..20, 5);
        let tree = treap.inner_mut();
        let mut walker = tree.walker();
        walker.search_subtree(7usize);
        assert_eq!(walker.value().cloned(), Some(7));
        let left = walker.left_summary();
        let right = walker.right_summary();
        assert_eq!(left.size, 7);
        assert_eq!(left.sum, (0..7).sum::<i64>());
        assert_eq!(right.size, 12);
        assert_eq!(right.first, 8);

        walker.act_node(SeqAction::assign(100));
        drop(walker);
        assert_eq!(tree.subtree_summary().sum, (0..20).sum::<i64>() - 7 + 100);
        tree.assert_correctness();
    }

    #[test]
    fn searching_a_gap_ends_at_an_empty_position() {
        let mut treap: Treap<SeqData> = Treap::seeded_from(0..20, 9);
        let mut walker = treap.inner_mut().walker();
        walker.search_subtree(4..4);
        assert!(walker.is_empty());
        assert_eq!(walker.left_summary().size, 4);
        assert_eq!(walker.right_summary().size, 16);
        drop(walker);
        assert_eq!(treap.len(), 20);
    }
}
