//! Stepping a segment to its lexicographically next or previous permutation, in place.
//!
//! The segment is never materialized. The step is made of a constant number of
//! descents and splits on the tree:
//! 1. If the whole segment is already the last permutation in the step's direction,
//!    it is reversed, wrapping around to the first one.
//! 2. Otherwise the pivot is found: the last position whose suffix is not ordered.
//!    The descent only needs the monotonicity flags of the summaries.
//! 3. The segment is split right after the pivot. The tail is ordered, so the
//!    values beyond the pivot form a prefix of it, and the last of them is found
//!    with another descent.
//! 4. The two values are swapped with two single-element assignments, and the tail is
//!    reversed.
//!
//! All of this takes `O(log n)` expected time.

use tracing::{debug, trace};

use crate::data::sequence_data::*;
use crate::data::{Data, SizedSummary};
use crate::locators::LocResult::{self, *};
use crate::trees::basic_tree::*;
use crate::trees::treap::Priority;
use crate::trees::SomeWalker;

/// The direction of a permutation step.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Direction {
    /// Lexicographically next permutation.
    Next,
    /// Lexicographically previous permutation.
    Prev,
}

impl Direction {
    /// Whether the segment is the last permutation in this direction, i.e.,
    /// whether it can't be stepped without wrapping around.
    pub fn is_last(self, summary: &SeqSummary) -> bool {
        match self {
            Direction::Next => summary.non_increasing,
            Direction::Prev => summary.non_decreasing,
        }
    }

    /// Whether `value` may replace `pivot` in a step in this direction.
    pub fn exceeds(self, value: i64, pivot: i64) -> bool {
        match self {
            Direction::Next => value > pivot,
            Direction::Prev => value < pivot,
        }
    }
}

/// Locates the pivot: the last value whose suffix isn't the last permutation.
/// Only valid on a segment that isn't the last permutation itself.
fn pivot_locator(direction: Direction) -> impl Fn(SeqSummary, &i64, SeqSummary) -> LocResult + Clone {
    move |_left: SeqSummary, value: &i64, right: SeqSummary| {
        let suffix = SeqData::to_summary(value) + right;
        if direction.is_last(&suffix) {
            GoLeft
        } else if !direction.is_last(&right) {
            GoRight
        } else {
            Accept
        }
    }
}

/// Locates the last value that exceeds the pivot.
/// Only valid on an ordered segment that starts with a value exceeding the pivot.
fn boundary_locator(direction: Direction, pivot: i64) -> impl Fn(SeqSummary, &i64, SeqSummary) -> LocResult + Clone {
    move |_left: SeqSummary, value: &i64, right: SeqSummary| {
        if !direction.exceeds(*value, pivot) {
            return GoLeft;
        }
        match right.first() {
            Some(next) if direction.exceeds(next, pivot) => GoRight,
            _ => Accept,
        }
    }
}

/// Locates the last value of the tree by walking down its right spine.
fn last_value_locator(_left: SeqSummary, _value: &i64, right: SeqSummary) -> LocResult {
    if right.is_empty() {
        Accept
    } else {
        GoRight
    }
}

/// Replaces the segment with its next or previous permutation, as the classic
/// single-pass algorithm on arrays would.
///
/// Returns `true` if the step wrapped around, i.e., the segment was the last
/// permutation and was reversed into the first one.
pub fn step_permutation(segment: &mut BasicTree<SeqData, Priority>, direction: Direction) -> bool {
    let summary = segment.subtree_summary();
    if summary.size() <= 1 {
        return summary.size() == 1;
    }
    if direction.is_last(&summary) {
        debug!(?direction, len = summary.size, "permutation wrapped around");
        segment.act_subtree(SeqAction::reverse());
        return true;
    }

    let pivot_index = {
        let mut walker = segment.walker();
        walker.search_subtree(pivot_locator(direction));
        walker.left_summary().size()
    };

    let (mut head, mut tail) = segment.take().split_at(pivot_index + 1);
    let pivot = head.subtree_summary().last;

    let replacement = {
        let mut walker = tail.walker();
        walker.search_subtree(boundary_locator(direction, pivot));
        let replacement = *walker
            .value()
            .expect("the value after the pivot always exceeds it");
        walker.act_node(SeqAction::assign(pivot));
        replacement
    };
    trace!(?direction, pivot_index, pivot, replacement, "found the pivot");

    {
        // the pivot is the last value of the head
        let mut walker = head.walker();
        walker.search_subtree(last_value_locator);
        walker.act_node(SeqAction::assign(replacement));
    }

    tail.act_subtree(SeqAction::reverse());
    *segment = BasicTree::concatenate(head, tail);
    false
}
