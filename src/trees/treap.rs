//! Implementation of treaps
//!
//! It is a balanced tree algorithm that supports reversals, splitting and concatenation.
//! The tree is keyed implicitly: the order of the values is their order in the sequence.
//!
//! Its operations take `O(log n)` expected time, probabilistically.
//! Each operation may take up to linear time, but the probability of any operation
//! taking more than `O(log n)` time is extremely low.
//!
//! Every treap owns its own random generator for the priorities, so a treap built
//! with a fixed seed always has the same shape.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::basic_tree::*;
use crate::data::*;
use crate::trees::SomeWalker;

/// The type that is used for bookkeeping.
/// convention: a bigger number should go higher up the tree.
pub type Priority = u64;

pub struct Treap<D: Data> {
    tree: BasicTree<D, Priority>,
    rng: StdRng,
}

impl<D: Data> Default for Treap<D> {
    fn default() -> Self {
        Treap::new()
    }
}

impl<D: Data> BasicTree<D, Priority> {
    pub fn priority(&self) -> Option<Priority> {
        self.alg_data().copied()
    }

    /// Concatenates the trees, putting all of the values of `left` before
    /// all of the values of `right`.
    /// The root with the higher priority becomes the new root. Ties favor `left`.
    pub fn concatenate(left: Self, right: Self) -> Self {
        match (left, right) {
            (Empty, tree) | (tree, Empty) => tree,
            (Root(mut left), Root(mut right)) => {
                if left.alg_data >= right.alg_data {
                    left.access();
                    left.right = Self::concatenate(left.right.take(), Root(right));
                    left.rebuild();
                    Root(left)
                } else {
                    right.access();
                    right.left = Self::concatenate(Root(left), right.left.take());
                    right.rebuild();
                    Root(right)
                }
            }
        }
    }
}

impl<D: Data> BasicTree<D, Priority>
where
    D::Summary: SizedSummary,
{
    /// Splits the tree into the first `index` values and the rest.
    /// If `index` is larger than the size of the tree, the second tree is empty.
    pub fn split_at(self, index: usize) -> (Self, Self) {
        let mut node = match self.into_node_boxed() {
            None => return (Empty, Empty),
            Some(node) => node,
        };
        node.access();
        let left_size = node.left.subtree_summary().size();
        if index <= left_size {
            let (left, right) = node.left.take().split_at(index);
            node.left = right;
            node.rebuild();
            (left, Root(node))
        } else {
            let (left, right) = node.right.take().split_at(index - left_size - 1);
            node.right = left;
            node.rebuild();
            (Root(node), right)
        }
    }
}

impl<D: Data> Treap<D> {
    /// Creates an empty treap, with a generator seeded from system entropy.
    pub fn new() -> Treap<D> {
        Treap::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Treap<D> {
        Treap { tree: Empty, rng }
    }

    /// Builds a treap out of the values, in order, with a deterministic generator.
    pub fn seeded_from<I>(values: I, seed: u64) -> Treap<D>
    where
        I: IntoIterator<Item = D::Value>,
    {
        Treap::from_values_with_rng(values, StdRng::seed_from_u64(seed))
    }

    /// Builds a treap out of the values, in order.
    /// This takes `O(n)` worst-case time: the right spine of the tree is kept on a stack,
    /// and every new value is put at the bottom of the spine according to its priority.
    pub fn from_values_with_rng<I>(values: I, mut rng: StdRng) -> Treap<D>
    where
        I: IntoIterator<Item = D::Value>,
    {
        let mut spine: Vec<Box<BasicNode<D, Priority>>> = vec![];
        for value in values {
            let priority: Priority = rng.gen();
            // nodes popped from the spine become the left subtree of the new node
            let mut below = Empty;
            while let Some(top) = spine.last() {
                if top.alg_data >= priority {
                    break;
                }
                if let Some(mut top) = spine.pop() {
                    top.right = below;
                    top.rebuild();
                    below = Root(top);
                }
            }
            let mut node = BasicNode::new_alg(value, priority);
            node.left = below;
            spine.push(Box::new(node));
        }

        let mut tree = Empty;
        while let Some(mut node) = spine.pop() {
            node.right = tree;
            node.rebuild();
            tree = Root(node);
        }
        Treap { tree, rng }
    }

    pub fn inner_mut(&mut self) -> &mut BasicTree<D, Priority> {
        &mut self.tree
    }

    pub fn into_inner(self) -> BasicTree<D, Priority> {
        self.tree
    }

    pub fn priority(&self) -> Option<Priority> {
        self.tree.priority()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn subtree_summary(&self) -> D::Summary {
        self.tree.subtree_summary()
    }

    /// Returns all of the values in the treap, in order.
    pub fn values(&mut self) -> Vec<D::Value>
    where
        D::Value: Clone,
    {
        self.tree.values()
    }

    /// Checks that invariants remain correct. i.e., that every node's summary
    /// is the sum of the summaries of its children, and that the priorities are ordered.
    /// If it finds any violation, it panics.
    pub fn assert_correctness(&mut self)
    where
        D::Summary: Eq + std::fmt::Debug,
    {
        self.tree.assert_correctness();
        self.assert_priorities();
    }

    pub fn assert_priorities(&mut self) {
        self.tree
            .assert_correctness_with(|node: &BasicNode<D, Priority>| {
                if let Some(left) = node.left.node() {
                    assert!(node.alg_data() >= left.alg_data(), "priorities out of order");
                }
                if let Some(right) = node.right.node() {
                    assert!(node.alg_data() >= right.alg_data(), "priorities out of order");
                }
            });
    }
}

impl<D: Data> Treap<D>
where
    D::Summary: SizedSummary,
{
    pub fn len(&self) -> usize {
        self.tree.subtree_summary().size()
    }

    /// Inserts the value so that it ends up at index `index`.
    /// If `index` is past the end, the value is put at the end.
    pub fn insert(&mut self, index: usize, value: D::Value) {
        let priority: Priority = self.rng.gen();
        let single = BasicTree::from_node(BasicNode::new_alg(value, priority));
        let (left, right) = self.tree.take().split_at(index);
        self.tree = BasicTree::concatenate(BasicTree::concatenate(left, single), right);
    }

    /// Removes the value at index `index` and returns it.
    /// If there is no such value, returns [`None`] and leaves the treap unchanged.
    pub fn delete(&mut self, index: usize) -> Option<D::Value> {
        let (left, rest) = self.tree.take().split_at(index);
        let (middle, right) = rest.split_at(1);
        let deleted = middle.into_node_boxed().map(|node| node.into_value());
        self.tree = BasicTree::concatenate(left, right);
        deleted
    }

    /// Splits the segment out of the treap, runs `f` on it, and glues the treap back together.
    /// `f` may change the segment in any way, including its length.
    pub fn with_segment<F, R>(&mut self, range: Range<usize>, f: F) -> R
    where
        F: FnOnce(&mut BasicTree<D, Priority>) -> R,
    {
        let (left, rest) = self.tree.take().split_at(range.start);
        let (mut middle, right) = rest.split_at(range.end.saturating_sub(range.start));
        let res = f(&mut middle);
        self.tree = BasicTree::concatenate(BasicTree::concatenate(left, middle), right);
        res
    }

    /// Returns the summary of the values in the segment.
    pub fn segment_summary(&mut self, range: Range<usize>) -> D::Summary {
        self.with_segment(range, |segment| segment.subtree_summary())
    }

    /// Applies the action to the values in the segment.
    pub fn act_segment(&mut self, range: Range<usize>, action: D::Action) {
        self.with_segment(range, |segment| segment.act_subtree(action))
    }

    /// Returns the value at index `index`.
    pub fn get(&mut self, index: usize) -> Option<D::Value>
    where
        D::Value: Clone,
    {
        let mut walker = self.tree.walker();
        walker.search_subtree(index);
        walker.value().cloned()
    }
}

impl<D: Data> std::iter::FromIterator<D::Value> for Treap<D> {
    /// This takes `O(n)` worst-case time.
    fn from_iter<I: IntoIterator<Item = D::Value>>(iter: I) -> Self {
        Treap::from_values_with_rng(iter, StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sequence_data::*;

    #[test]
    fn treap_delete() {
        let arr: Vec<i64> = (0..500).collect();
        for i in 0..arr.len() {
            let mut tree: Treap<SeqData> = Treap::seeded_from(arr.iter().cloned(), i as u64);
            assert_eq!(tree.get(i), Some(arr[i]));
            let res = tree.delete(i);
            assert_eq!(res, Some(arr[i]));
            assert_eq!(
                tree.values(),
                arr[..i].iter().chain(arr[i + 1..].iter()).cloned().collect::<Vec<_>>()
            );
            tree.assert_correctness();
        }
    }

    #[test]
    fn treap_insert() {
        let arr: Vec<i64> = (0..500).collect();
        for i in 0..=arr.len() {
            let new_val = 13;
            let mut tree: Treap<SeqData> = Treap::seeded_from(arr.iter().cloned(), i as u64);
            tree.insert(i, new_val);
            assert_eq!(tree.get(i), Some(new_val));
            assert_eq!(
                tree.values(),
                arr[..i]
                    .iter()
                    .chain([new_val].iter())
                    .chain(arr[i..].iter())
                    .cloned()
                    .collect::<Vec<_>>()
            );
            tree.assert_correctness();
        }
    }

    #[test]
    fn delete_past_the_end() {
        let mut tree: Treap<SeqData> = Treap::seeded_from(0..10, 3);
        assert_eq!(tree.delete(10), None);
        assert_eq!(tree.values(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn split_and_concatenate() {
        for index in 0..=40 {
            let tree: Treap<SeqData> = Treap::seeded_from(17..57, 11);
            let (left, right) = tree.into_inner().split_at(index);
            let mut left = Treap::<SeqData> {
                tree: left,
                rng: StdRng::seed_from_u64(0),
            };
            let mut right = Treap::<SeqData> {
                tree: right,
                rng: StdRng::seed_from_u64(0),
            };
            assert_eq!(left.values(), (17..17 + index as i64).collect::<Vec<_>>());
            assert_eq!(right.values(), (17 + index as i64..57).collect::<Vec<_>>());
            left.assert_correctness();
            right.assert_correctness();

            let mut joined = Treap::<SeqData> {
                tree: BasicTree::concatenate(left.tree, right.tree),
                rng: StdRng::seed_from_u64(0),
            };
            assert_eq!(joined.values(), (17..57).collect::<Vec<_>>());
            joined.assert_correctness();
        }
    }

    #[test]
    fn segment_actions() {
        let mut tree: Treap<SeqData> = Treap::seeded_from(0..30, 8);
        tree.act_segment(5..15, SeqAction::reverse());
        tree.act_segment(10..20, SeqAction::add(100));
        tree.act_segment(0..3, SeqAction::assign(-1));

        let mut expected: Vec<i64> = (0..30).collect();
        expected[5..15].reverse();
        expected[10..20].iter_mut().for_each(|v| *v += 100);
        expected[0..3].iter_mut().for_each(|v| *v = -1);

        assert_eq!(tree.values(), expected);
        assert_eq!(tree.segment_summary(7..22).sum, expected[7..22].iter().sum::<i64>());
        assert_eq!(tree.len(), 30);
        tree.assert_correctness();
    }

    #[test]
    fn same_seed_same_shape() {
        let a: Treap<SeqData> = Treap::seeded_from(0..100, 42);
        let b: Treap<SeqData> = Treap::seeded_from(0..100, 42);
        assert_eq!(a.priority(), b.priority());
        let collected: Treap<SeqData> = (0..100).collect();
        assert_eq!(collected.len(), 100);
    }
}
