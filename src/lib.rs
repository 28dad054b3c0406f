//! A dynamic sequence of integers, stored in an implicit treap with lazy actions.
//!
//! The sequence supports inserting and erasing at a position, range sums, range assignments,
//! range additions, and replacing a segment with its lexicographically next or previous
//! permutation, all in `O(log n)` expected time. See [`Sequence`].
//!
//! The tree machinery is generic: [`data::Data`] describes the values, summaries and actions
//! a tree holds, [`locators`] steer descents into the tree, and [`trees::treap::Treap`]
//! splits and concatenates trees by position.

pub mod config;
pub mod data;
pub mod error;
pub mod locators;
pub mod permutation;
pub mod query;
pub mod sequence;
pub mod trees;

pub use config::SequenceConfig;
pub use error::{Result, SequenceError};
pub use permutation::Direction;
pub use query::{solve, Answers, Query};
pub use sequence::Sequence;
