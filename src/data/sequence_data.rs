//! The data stored by [`crate::Sequence`]: `i64` values, with summaries that know
//! the size, the sum, the endpoints, and the monotonicity of their segment, and
//! actions that assign, add, and reverse.

use super::*;
use std::ops::Add;

/// Marker type tying together [`SeqSummary`] and [`SeqAction`] over `i64` values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SeqData {}

impl Data for SeqData {
    type Value = i64;
    type Summary = SeqSummary;
    type Action = SeqAction;

    fn to_summary(val: &i64) -> SeqSummary {
        SeqSummary {
            size: 1,
            sum: *val,
            first: *val,
            last: *val,
            non_increasing: true,
            non_decreasing: true,
        }
    }
}

/// The summary of a segment of the sequence.
///
/// `first` and `last` are only meaningful when `size > 0`. The empty segment
/// is both non-increasing and non-decreasing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SeqSummary {
    pub size: usize,
    pub sum: i64,
    pub first: i64,
    pub last: i64,
    pub non_increasing: bool,
    pub non_decreasing: bool,
}

impl SeqSummary {
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The first value of the segment, if it isn't empty.
    pub fn first(&self) -> Option<i64> {
        if self.is_empty() {
            None
        } else {
            Some(self.first)
        }
    }

    /// The last value of the segment, if it isn't empty.
    pub fn last(&self) -> Option<i64> {
        if self.is_empty() {
            None
        } else {
            Some(self.last)
        }
    }
}

impl Default for SeqSummary {
    fn default() -> Self {
        SeqSummary {
            size: 0,
            sum: 0,
            first: 0,
            last: 0,
            non_increasing: true,
            non_decreasing: true,
        }
    }
}

impl Add for SeqSummary {
    type Output = SeqSummary;

    fn add(self, right: SeqSummary) -> SeqSummary {
        if self.is_empty() {
            return right;
        }
        if right.is_empty() {
            return self;
        }
        SeqSummary {
            size: self.size + right.size,
            sum: self.sum.wrapping_add(right.sum),
            first: self.first,
            last: right.last,
            non_increasing: self.non_increasing && right.non_increasing && self.last >= right.first,
            non_decreasing: self.non_decreasing && right.non_decreasing && self.last <= right.first,
        }
    }
}

impl SizedSummary for SeqSummary {
    fn size(self) -> usize {
        self.size
    }
}

/// A pending change to a segment: first the values are overwritten by `assign` (if present),
/// then `add` is added to them, and the segment is reversed if `reverse` is set.
///
/// Invariant: if `assign` is present then `add == 0`, since the addition is folded into
/// the assigned value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SeqAction {
    assign: Option<i64>,
    add: i64,
    reverse: bool,
}

impl SeqAction {
    /// Sets every value to `value`.
    pub fn assign(value: i64) -> SeqAction {
        SeqAction {
            assign: Some(value),
            add: 0,
            reverse: false,
        }
    }

    /// Adds `delta` to every value.
    pub fn add(delta: i64) -> SeqAction {
        SeqAction {
            assign: None,
            add: delta,
            reverse: false,
        }
    }

    /// Reverses the segment.
    pub fn reverse() -> SeqAction {
        SeqAction {
            assign: None,
            add: 0,
            reverse: true,
        }
    }

    pub fn assigned_value(&self) -> Option<i64> {
        self.assign
    }

    pub fn added_value(&self) -> i64 {
        self.add
    }
}

impl Add for SeqAction {
    type Output = SeqAction;

    /// `later + earlier`.
    fn add(self, earlier: SeqAction) -> SeqAction {
        let reverse = self.reverse ^ earlier.reverse;
        match (self.assign, earlier.assign) {
            (Some(value), _) => SeqAction {
                assign: Some(value),
                add: 0,
                reverse,
            },
            (None, Some(value)) => SeqAction {
                assign: Some(value.wrapping_add(self.add)),
                add: 0,
                reverse,
            },
            (None, None) => SeqAction {
                assign: None,
                add: earlier.add.wrapping_add(self.add),
                reverse,
            },
        }
    }
}

impl Action for SeqAction {
    fn is_identity(self) -> bool {
        self == Default::default()
    }

    fn to_reverse(self) -> bool {
        self.reverse
    }
}

impl Acts<i64> for SeqAction {
    fn act_inplace(&self, val: &mut i64) {
        if let Some(value) = self.assign {
            *val = value;
        }
        *val = val.wrapping_add(self.add);
    }
}

impl Acts<SeqSummary> for SeqAction {
    fn act_inplace(&self, summary: &mut SeqSummary) {
        if summary.is_empty() {
            return;
        }
        if let Some(value) = self.assign {
            summary.sum = value.wrapping_mul(summary.size as i64);
            summary.first = value;
            summary.last = value;
            summary.non_increasing = true;
            summary.non_decreasing = true;
        }
        if self.add != 0 {
            summary.sum = summary
                .sum
                .wrapping_add(self.add.wrapping_mul(summary.size as i64));
            summary.first = summary.first.wrapping_add(self.add);
            summary.last = summary.last.wrapping_add(self.add);
        }
        if self.reverse {
            std::mem::swap(&mut summary.first, &mut summary.last);
            std::mem::swap(&mut summary.non_increasing, &mut summary.non_decreasing);
        }
    }
}
