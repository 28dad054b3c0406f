//! Batches of typed queries over a [`Sequence`].
//!
//! Each query kind carries the number it is known by in query scripts, see [`Query::code`].

use tracing::debug;

use crate::config::SequenceConfig;
use crate::error::Result;
use crate::sequence::Sequence;

/// A single operation on a sequence. Ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    Sum { l: usize, r: usize },
    Insert { value: i64, pos: usize },
    Erase { pos: usize },
    Assign { l: usize, r: usize, value: i64 },
    Add { l: usize, r: usize, delta: i64 },
    NextPermutation { l: usize, r: usize },
    PrevPermutation { l: usize, r: usize },
}

impl Query {
    /// The operation code of the query, from 1 to 7.
    pub fn code(&self) -> u8 {
        match self {
            Query::Sum { .. } => 1,
            Query::Insert { .. } => 2,
            Query::Erase { .. } => 3,
            Query::Assign { .. } => 4,
            Query::Add { .. } => 5,
            Query::NextPermutation { .. } => 6,
            Query::PrevPermutation { .. } => 7,
        }
    }
}

impl Sequence {
    /// Runs the query. Returns the answer of a [`Query::Sum`], and [`None`] for the rest.
    pub fn apply(&mut self, query: &Query) -> Result<Option<i64>> {
        match *query {
            Query::Sum { l, r } => return self.sum(l, r).map(Some),
            Query::Insert { value, pos } => self.insert(value, pos)?,
            Query::Erase { pos } => {
                self.erase(pos)?;
            }
            Query::Assign { l, r, value } => self.assign(l, r, value)?,
            Query::Add { l, r, delta } => self.add(l, r, delta)?,
            Query::NextPermutation { l, r } => self.next_permutation(l, r)?,
            Query::PrevPermutation { l, r } => self.prev_permutation(l, r)?,
        }
        Ok(None)
    }
}

/// The results of a batch of queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    /// The indices of the queries that produced a result, counting from 0.
    pub query_numbers: Vec<usize>,
    /// The results, in the same order as `query_numbers`.
    pub query_results: Vec<i64>,
    /// The sequence after all of the queries.
    pub final_state: Vec<i64>,
}

/// Builds a sequence out of `initial`, runs all of the queries on it in order, and collects
/// the answers.
///
/// Stops at the first failing query, and reports it with its index.
pub fn solve(initial: &[i64], queries: &[Query], config: SequenceConfig) -> Result<Answers> {
    let mut sequence = Sequence::from_sequence_with_config(initial, config);
    let mut answers = Answers::default();
    for (index, query) in queries.iter().enumerate() {
        let result = sequence.apply(query).map_err(|err| {
            debug!(index, code = query.code(), "query failed");
            err.in_query(index)
        })?;
        if let Some(result) = result {
            answers.query_numbers.push(index);
            answers.query_results.push(result);
        }
    }
    answers.final_state = sequence.materialize();
    Ok(answers)
}
