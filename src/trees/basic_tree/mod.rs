//! The basic tree module.
//! This module implements basic unbalanced trees, which the balanced trees wrap around.
//!
//! The `T` parameter is supposed to be used to store the balancing algorithm's
//! bookkeeping data (e.g., priorities for treaps). By default `T = ()`.
//!
//! # Lazy actions
//!
//! Every node stores a pending action. The value and the subtree summary stored in a node
//! are always up to date, including the effect of the node's own pending action. The pending
//! action is owed only to the node's sons: it is pushed down to them by [`BasicNode::access`],
//! which must happen before the sons are read or modified. After the sons change,
//! [`BasicNode::rebuild`] recomputes the node's summary from them.

mod walker;
pub use walker::*;

use crate::data::*;

/// A basic tree. might be empty.
pub enum BasicTree<D: Data, T = ()> {
    /// An empty tree
    Empty,
    /// A non empty tree, with a root node
    Root(Box<BasicNode<D, T>>),
}
pub use BasicTree::*;

impl<D: Data, T> Default for BasicTree<D, T> {
    fn default() -> Self {
        Empty
    }
}

impl<D: Data, T> BasicTree<D, T> {
    /// Constructs a new non-empty tree from a node.
    pub fn from_node(node: BasicNode<D, T>) -> Self {
        Root(Box::new(node))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    /// Replaces the tree with an empty one, and returns the original.
    pub fn take(&mut self) -> BasicTree<D, T> {
        std::mem::take(self)
    }

    /// Returns The inner node.
    pub fn node(&self) -> Option<&BasicNode<D, T>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Returns The inner node.
    pub fn node_mut(&mut self) -> Option<&mut BasicNode<D, T>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Returns The inner node with its box, in order to move it
    /// without moving the whole node.
    pub fn into_node_boxed(self) -> Option<Box<BasicNode<D, T>>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Returns the algorithm-specific data of the root.
    pub fn alg_data(&self) -> Option<&T> {
        Some(&self.node()?.alg_data)
    }

    /// Returns the summary of all values in this tree.
    pub fn subtree_summary(&self) -> D::Summary {
        match self.node() {
            Some(node) => node.subtree_summary(),
            None => Default::default(),
        }
    }

    /// Pushes any actions stored in the root to its sons.
    pub fn access(&mut self) {
        if let Some(node) = self.node_mut() {
            node.access();
        }
    }

    /// Remakes the summary stored in the root, based on its sons.
    pub fn rebuild(&mut self) {
        if let Some(node) = self.node_mut() {
            node.rebuild();
        }
    }

    /// Applies the action to the whole tree.
    /// The action is applied to the root right away, and stored to be pushed to its sons later.
    pub fn act_subtree(&mut self, action: D::Action) {
        if let Some(node) = self.node_mut() {
            node.act(action);
        }
    }

    /// Returns a walker at the root of the tree.
    pub fn walker(&mut self) -> BasicWalker<'_, D, T> {
        BasicWalker::new(self)
    }

    /// Returns all of the values in the tree, in order.
    /// Pushes every pending action on the way.
    pub fn values(&mut self) -> Vec<D::Value>
    where
        D::Value: Clone,
    {
        let mut res = Vec::new();
        self.push_values(&mut res);
        res
    }

    fn push_values(&mut self, out: &mut Vec<D::Value>)
    where
        D::Value: Clone,
    {
        if let Some(node) = self.node_mut() {
            node.access();
            node.left.push_values(out);
            out.push(node.node_value.clone());
            node.right.push_values(out);
        }
    }

    /// Checks that invariants remain correct. Invariants are checked by running
    /// the given function on every node in the tree.
    /// Pushes every pending action first, since the summaries of the sons are only
    /// comparable to their parent's after the parent was accessed.
    ///
    /// The function should perform checks and panic if they're violated.
    pub fn assert_correctness_with<F>(&mut self, func: F)
    where
        F: Fn(&BasicNode<D, T>) + Copy,
    {
        if let Some(node) = self.node_mut() {
            node.access();
            func(node);
            node.left.assert_correctness_with(func);
            node.right.assert_correctness_with(func);
        }
    }

    /// Checks that every node's summary is the sum of the summaries of its sons
    /// and its own value. If it is not, panics.
    pub fn assert_correctness(&mut self)
    where
        D::Summary: Eq + std::fmt::Debug,
    {
        self.assert_correctness_with(BasicNode::assert_correctness_locally);
    }
}

/// A basic node. can be viewed as a non-empty basic tree: it always has at least one value.
pub struct BasicNode<D: Data, T = ()> {
    action: D::Action,
    subtree_summary: D::Summary,
    node_value: D::Value,
    pub(crate) left: BasicTree<D, T>,
    pub(crate) right: BasicTree<D, T>,
    pub(crate) alg_data: T,
}

impl<D: Data> BasicNode<D> {
    /// Creates a node with a single value.
    pub fn new(value: D::Value) -> BasicNode<D> {
        BasicNode::new_alg(value, ())
    }
}

impl<D: Data, T> BasicNode<D, T> {
    /// Creates a node with a single value, and the algorithm specific data.
    pub fn new_alg(value: D::Value, alg_data: T) -> BasicNode<D, T> {
        let subtree_summary = D::to_summary(&value);
        BasicNode {
            action: Default::default(),
            subtree_summary,
            node_value: value,
            left: Empty,
            right: Empty,
            alg_data,
        }
    }

    /// Returns the algorithm-specific data
    pub fn alg_data(&self) -> &T {
        &self.alg_data
    }

    /// Returns the summary of all values in this node's subtree.
    pub fn subtree_summary(&self) -> D::Summary {
        self.subtree_summary
    }

    /// Returns a summary for the value in this node specifically,
    /// and not the subtree.
    pub fn node_summary(&self) -> D::Summary {
        D::to_summary(&self.node_value)
    }

    /// Returns the value stored in this node specifically.
    pub fn node_value(&self) -> &D::Value {
        &self.node_value
    }

    /// Consumes the node and returns its value. The sons are dropped.
    pub fn into_value(self) -> D::Value {
        self.node_value
    }

    /// Pushes any actions stored in this node to its sons.
    /// Actions stored in nodes are supposed to be eventually applied to its
    /// whole subtree. Therefore, before reading or modifying the sons,
    /// you must `access()` the node.
    pub fn access(&mut self) {
        if self.action.is_identity() {
            return;
        }
        // the stored sons are in the order from before the reversal
        if self.action.to_reverse() {
            std::mem::swap(&mut self.left, &mut self.right);
        }
        self.left.act_subtree(self.action);
        self.right.act_subtree(self.action);
        self.action = Default::default();
    }

    /// Remakes the data that is stored in this node, based on its sons.
    /// This is necessary when the sons might have changed.
    /// For example, after inserting a new node, all of the nodes from it to the root
    /// must be rebuilt, in order for the summaries accumulated over the whole
    /// subtree to be accurate.
    pub fn rebuild(&mut self) {
        debug_assert!(self.action.is_identity(), "rebuilding a node that wasn't accessed");
        self.subtree_summary =
            self.left.subtree_summary() + self.node_summary() + self.right.subtree_summary();
    }

    /// This function applies the given action to its whole subtree.
    ///
    /// The node's value and summary are updated immediately. The sons will only
    /// receive the action when the node is accessed.
    pub fn act(&mut self, action: D::Action) {
        action.act_inplace(&mut self.node_value);
        action.act_inplace(&mut self.subtree_summary);
        self.action = action + self.action;
    }

    /// This function applies the given action only to the current value in this node,
    /// and rebuilds the node.
    /// Must not be used with reversing actions.
    pub fn act_value(&mut self, action: D::Action) {
        debug_assert!(!action.to_reverse());
        self.access();
        action.act_inplace(&mut self.node_value);
        self.rebuild();
    }

    /// Asserts that the summaries were calculated correctly at the current node.
    /// Otherwise, panics. The node must have been accessed.
    pub fn assert_correctness_locally(&self)
    where
        D::Summary: Eq + std::fmt::Debug,
    {
        let expected = self.left.subtree_summary() + self.node_summary() + self.right.subtree_summary();
        assert_eq!(self.subtree_summary, expected, "Incorrect summaries found.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sequence_data::*;

    fn leaf(value: i64) -> BasicTree<SeqData> {
        BasicTree::from_node(BasicNode::new(value))
    }

    // builds the tree `< <1> 2 <3> >`
    fn small_tree() -> BasicTree<SeqData> {
        let mut node = BasicNode::new(2);
        node.left = leaf(1);
        node.right = leaf(3);
        node.rebuild();
        BasicTree::from_node(node)
    }

    #[test]
    fn lazy_actions_reach_the_sons() {
        let mut tree = small_tree();
        tree.act_subtree(SeqAction::add(10));
        assert_eq!(tree.subtree_summary().sum, 36);
        // the sons still didn't receive the action
        assert_eq!(tree.node().unwrap().left.subtree_summary().sum, 1);

        tree.access();
        assert_eq!(tree.node().unwrap().left.subtree_summary().sum, 11);
        assert_eq!(tree.values(), vec![11, 12, 13]);
        tree.assert_correctness();
    }

    #[test]
    fn reversal_swaps_the_sons_on_access() {
        let mut tree = small_tree();
        tree.act_subtree(SeqAction::reverse());
        let summary = tree.subtree_summary();
        assert_eq!((summary.first, summary.last), (3, 1));
        assert!(summary.non_increasing);

        tree.act_subtree(SeqAction::assign(4) + SeqAction::add(1));
        assert_eq!(tree.values(), vec![4, 4, 4]);
        tree.assert_correctness();
    }
}
