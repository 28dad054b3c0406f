//! The locator module provides an interface for locating a specific value
//! or a segment, generalizing the search in a binary search tree.
//!
//! Locators are supposed to represent a segment of the tree. See [`Locator`].
//!
//! Functions like search, which logically expect only one accepted node, and not a segment,
//! will use any node that is accepted.
//! Locators that never accept a node lead the walker into a space between nodes.

use crate::data::*;
use crate::trees::SomeWalker;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum LocResult {
    Accept,
    GoRight,
    GoLeft,
}
use LocResult::*;

/// Locators are types that represent a segment of the tree.
/// When the locator is used, we query the locator about the current node.
/// The locator has to reply:
/// * If the current node is to the left of the segment, return `GoRight`.
/// * If the current node is to the right of the segment, return `GoLeft`
/// * If the current node is part of the segment, return `Accept`.
///
/// In each query, the locator receives as input the current node's value,
/// the accumulated summary left of the current node,
/// and the accumulated summary right of the current node.
/// Note that the subtree of the current node is irrelevant: only the current node's value
/// and its surroundings matter.
///
/// References to anonymous functions of the type `Fn(...) -> LocResult` can be used as locators.
pub trait Locator<D: Data>: Clone {
    fn locate(&self, left: D::Summary, node: &D::Value, right: D::Summary) -> LocResult;
}

impl<D: Data, F> Locator<D> for F
where
    F: Fn(D::Summary, &D::Value, D::Summary) -> LocResult + Clone,
{
    fn locate(&self, left: D::Summary, node: &D::Value, right: D::Summary) -> LocResult {
        self(left, node, right)
    }
}

/// Returns the result of the locator at the walker.
/// Returns None if the walker is at an empty position.
pub fn query_locator<W, D: Data, L>(walker: &W, locator: &L) -> Option<LocResult>
where
    W: SomeWalker<D>,
    L: Locator<D>,
{
    let value = walker.value()?;
    Some(locator.locate(walker.left_summary(), value, walker.right_summary()))
}

/// Locator instance for [`usize`] representing a single index.
impl<D: Data> Locator<D> for usize
where
    D::Summary: SizedSummary,
{
    fn locate(&self, left: D::Summary, node: &D::Value, _right: D::Summary) -> LocResult {
        // find the index of the current node
        let s = left.size();

        if s > *self {
            GoLeft
        } else if s + D::to_summary(node).size() <= *self {
            GoRight
        } else {
            Accept
        }
    }
}

/// Locator instance for [`std::ops::Range<usize>`] representing an index range.
/// An empty range `i..i` never accepts, and leads to the gap before index `i`.
impl<D: Data> Locator<D> for std::ops::Range<usize>
where
    D::Summary: SizedSummary,
{
    fn locate(&self, left: D::Summary, node: &D::Value, _right: D::Summary) -> LocResult {
        let s = left.size();

        if s >= self.end {
            GoLeft
        } else if s + D::to_summary(node).size() <= self.start {
            GoRight
        } else {
            Accept
        }
    }
}
