//! Error types for the sequence operations.
//!
//! Every operation validates its positions against the current length before touching
//! the tree, so a returned error always means the sequence is unchanged.

/// Primary error type for sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A position is past the end of the sequence.
    #[error("position {index} is out of range for a sequence of length {len}")]
    OutOfRange {
        /// The offending position.
        index: usize,
        /// The length of the sequence at the time of the call.
        len: usize,
    },

    /// A range whose start comes after its end.
    #[error("invalid range [{start}, {end}]: start is after end")]
    InvalidRange { start: usize, end: usize },

    /// A query of a batch failed. Queries are indexed from 0, as in [`crate::Answers`].
    #[error("query {number} failed: {source}")]
    Query {
        number: usize,
        #[source]
        source: Box<SequenceError>,
    },
}

impl SequenceError {
    /// Wraps the error as the failure of the query at index `number` of a batch.
    pub fn in_query(self, number: usize) -> SequenceError {
        SequenceError::Query {
            number,
            source: Box::new(self),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
