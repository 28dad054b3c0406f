//! The dynamic sequence: a sequence of `i64` values that supports editing, range queries
//! and range updates, and stepping a segment to its next or previous permutation.
//!
//! All of the ranges are inclusive, `[l, r]`, and all of the positions are 0-indexed.
//! Every operation checks its positions before changing anything.
//!
//!```
//! use sequence_treap::{Sequence, SequenceConfig};
//!
//! let mut seq = Sequence::from_sequence_with_config(&[1, 2, 3], SequenceConfig::seeded(7));
//! assert_eq!(seq.sum(0, 2).unwrap(), 6);
//! seq.assign(0, 1, 5).unwrap();
//! seq.add(1, 2, 10).unwrap();
//! assert_eq!(seq.materialize(), vec![5, 15, 13]);
//!
//! seq.next_permutation(0, 2).unwrap();
//! assert_eq!(seq.materialize(), vec![13, 5, 15]);
//! assert!(seq.erase(3).is_err());
//!```

use std::ops::Range;

use tracing::{debug, trace};

use crate::config::SequenceConfig;
use crate::data::sequence_data::*;
use crate::error::{Result, SequenceError};
use crate::permutation::{step_permutation, Direction};
use crate::trees::treap::Treap;

pub struct Sequence {
    treap: Treap<SeqData>,
}

impl Default for Sequence {
    fn default() -> Self {
        Sequence::new()
    }
}

impl Sequence {
    /// Creates an empty sequence.
    pub fn new() -> Sequence {
        Sequence::with_config(SequenceConfig::default())
    }

    /// Creates an empty sequence.
    pub fn with_config(config: SequenceConfig) -> Sequence {
        Sequence {
            treap: Treap::with_rng(config.rng()),
        }
    }

    /// Creates a sequence holding the values, in `O(n)` time.
    pub fn from_sequence(values: &[i64]) -> Sequence {
        Sequence::from_sequence_with_config(values, SequenceConfig::default())
    }

    pub fn from_sequence_with_config(values: &[i64], config: SequenceConfig) -> Sequence {
        Sequence {
            treap: Treap::from_values_with_rng(values.iter().cloned(), config.rng()),
        }
    }

    pub fn len(&self) -> usize {
        self.treap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.treap.is_empty()
    }

    /// Inserts `value` so that it becomes the element at position `pos`.
    /// `pos` may be equal to the length, in order to append.
    pub fn insert(&mut self, value: i64, pos: usize) -> Result<()> {
        self.check_position(pos, self.len() + 1)?;
        trace!(value, pos, "insert");
        self.treap.insert(pos, value);
        Ok(())
    }

    /// Removes the element at position `pos`, and returns it.
    pub fn erase(&mut self, pos: usize) -> Result<i64> {
        self.check_position(pos, self.len())?;
        trace!(pos, "erase");
        self.treap
            .delete(pos)
            .ok_or(SequenceError::OutOfRange { index: pos, len: self.len() })
    }

    /// Returns the element at position `pos`.
    pub fn get(&mut self, pos: usize) -> Result<i64> {
        self.check_position(pos, self.len())?;
        self.treap
            .get(pos)
            .ok_or(SequenceError::OutOfRange { index: pos, len: self.len() })
    }

    /// Returns the sum of the elements in `[l, r]`. The sum wraps on overflow.
    pub fn sum(&mut self, l: usize, r: usize) -> Result<i64> {
        let range = self.check_range(l, r)?;
        let sum = self.treap.segment_summary(range).sum;
        trace!(l, r, sum, "sum");
        Ok(sum)
    }

    /// Sets every element in `[l, r]` to `value`.
    pub fn assign(&mut self, l: usize, r: usize, value: i64) -> Result<()> {
        let range = self.check_range(l, r)?;
        trace!(l, r, value, "assign");
        self.treap.act_segment(range, SeqAction::assign(value));
        Ok(())
    }

    /// Adds `delta` to every element in `[l, r]`. The values wrap on overflow.
    pub fn add(&mut self, l: usize, r: usize, delta: i64) -> Result<()> {
        let range = self.check_range(l, r)?;
        trace!(l, r, delta, "add");
        self.treap.act_segment(range, SeqAction::add(delta));
        Ok(())
    }

    /// Replaces `[l, r]` with its lexicographically next permutation.
    /// The last permutation wraps around to the first one.
    pub fn next_permutation(&mut self, l: usize, r: usize) -> Result<()> {
        self.step(l, r, Direction::Next)
    }

    /// Replaces `[l, r]` with its lexicographically previous permutation.
    /// The first permutation wraps around to the last one.
    pub fn prev_permutation(&mut self, l: usize, r: usize) -> Result<()> {
        self.step(l, r, Direction::Prev)
    }

    fn step(&mut self, l: usize, r: usize, direction: Direction) -> Result<()> {
        let range = self.check_range(l, r)?;
        trace!(l, r, ?direction, "permutation step");
        self.treap
            .with_segment(range, |segment| step_permutation(segment, direction));
        Ok(())
    }

    /// Returns the whole sequence, in order.
    pub fn materialize(&mut self) -> Vec<i64> {
        self.treap.values()
    }

    /// Checks the invariants of the underlying tree, and panics if any is violated.
    pub fn assert_correctness(&mut self) {
        self.treap.assert_correctness();
    }

    fn check_position(&self, pos: usize, bound: usize) -> Result<()> {
        if pos < bound {
            return Ok(());
        }
        let err = SequenceError::OutOfRange { index: pos, len: self.len() };
        debug!(%err, "rejected");
        Err(err)
    }

    /// Turns the inclusive range into a half open one, if it is valid.
    fn check_range(&self, l: usize, r: usize) -> Result<Range<usize>> {
        if l > r {
            let err = SequenceError::InvalidRange { start: l, end: r };
            debug!(%err, "rejected");
            return Err(err);
        }
        self.check_position(r, self.len())?;
        Ok(l..r + 1)
    }
}

impl std::iter::FromIterator<i64> for Sequence {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Sequence {
            treap: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let summary = self.treap.subtree_summary();
        f.debug_struct("Sequence")
            .field("len", &summary.size)
            .field("sum", &summary.sum)
            .finish()
    }
}
