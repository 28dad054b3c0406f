//! This module contains the tree types, and the traits describing how to walk on them.
//!
//! [`basic_tree`] implements an unbalanced owned tree together with its walker, and
//! [`treap`] builds a balanced tree on top of it.

pub mod basic_tree;
pub mod treap;

use crate::data::*;

/// The side of a son relative to its parent.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A walker is an object that holds a mutable reference to a tree, and a position inside it.
/// It can walk down and up the tree, and knows the summaries of everything to the left
/// and to the right of its current position.
///
/// Every node the walker stands on has already been accessed, i.e., its pending action
/// was pushed to its sons, so its value is up to date.
pub trait SomeWalker<D: Data> {
    /// Goes to the left son. Fails if at an empty position.
    fn go_left(&mut self) -> Result<(), ()>;

    /// Goes to the right son. Fails if at an empty position.
    fn go_right(&mut self) -> Result<(), ()>;

    /// Goes up to the parent, and returns which son we came from.
    /// Fails if at the root.
    fn go_up(&mut self) -> Result<Side, ()>;

    /// The summary of everything to the left of the current subtree.
    fn far_left_summary(&self) -> D::Summary;

    /// The summary of everything to the right of the current subtree.
    fn far_right_summary(&self) -> D::Summary;

    /// The summary of everything to the left of the current position,
    /// including the current left son.
    fn left_summary(&self) -> D::Summary;

    /// The summary of everything to the right of the current position,
    /// including the current right son.
    fn right_summary(&self) -> D::Summary;

    /// The value at the current position. [`None`] at an empty position.
    fn value(&self) -> Option<&D::Value>;

    fn is_empty(&self) -> bool {
        self.value().is_none()
    }
}
