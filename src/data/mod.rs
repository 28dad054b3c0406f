//! This module defines the traits describing what a tree stores.
//!
//! A tree is parameterized by a marker type implementing [`Data`], which names three types:
//! * `Value`: the values stored in the nodes.
//! * `Summary`: information aggregated over a segment of values. For example, the size,
//!   the sum, or whether the segment is sorted.
//! * `Action`: a lazy action that can be applied to a whole subtree at once, and is pushed
//!   down to the sons only when they are visited.
//!
//! The concrete data used by [`crate::Sequence`] is in [`sequence_data`].

pub mod sequence_data;

use std::ops::Add;

/// This trait represents the data that will be stored inside the tree.
///
/// Summaries must form a monoid: `Default::default()` is the summary of the empty segment,
/// and `+` concatenates the summaries of two adjacent segments, left to right.
pub trait Data {
    /// The values stored in the tree.
    type Value;
    /// The summaries of segments of values.
    type Summary: Copy + Default + Add<Output = Self::Summary>;
    /// The actions that can be applied lazily to subtrees.
    type Action: Action + Acts<Self::Value> + Acts<Self::Summary>;

    /// Creates the summary of a single value.
    fn to_summary(val: &Self::Value) -> Self::Summary;
}

/// Actions compose right to left, i.e., `later + earlier` is the action
/// that first applies `earlier`, and then `later`.
/// `Default::default()` must be the identity action.
pub trait Action: Copy + Default + Add<Output = Self> {
    /// Returns true if this action does nothing.
    fn is_identity(self) -> bool;

    /// Returns whether this action reverses the segment it is applied to.
    ///
    /// Reversals can't be applied node by node, so an action that reverses must
    /// only be applied to a whole subtree that was split out of the tree.
    fn to_reverse(self) -> bool {
        false
    }
}

/// Describes how an action changes an object of type `V`.
/// Usually implemented for the value type and the summary type.
pub trait Acts<V> {
    fn act_inplace(&self, object: &mut V);

    fn act(&self, mut object: V) -> V {
        self.act_inplace(&mut object);
        object
    }
}

/// Summaries that keep track of the number of values in their segment.
/// Needed for searching and splitting by index.
pub trait SizedSummary {
    fn size(self) -> usize;
}
