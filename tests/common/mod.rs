#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sequence_treap::*;
use std::ops::RangeInclusive;

/// A plain vector with the same operations as [`Sequence`], used as the reference.
/// Every operation is linear.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Reference {
    pub values: Vec<i64>,
}

impl Reference {
    pub fn new(values: &[i64]) -> Reference {
        Reference {
            values: values.to_vec(),
        }
    }

    fn check_position(&self, pos: usize, bound: usize) -> Result<()> {
        if pos < bound {
            Ok(())
        } else {
            Err(SequenceError::OutOfRange {
                index: pos,
                len: self.values.len(),
            })
        }
    }

    fn check_range(&self, l: usize, r: usize) -> Result<RangeInclusive<usize>> {
        if l > r {
            return Err(SequenceError::InvalidRange { start: l, end: r });
        }
        self.check_position(r, self.values.len())?;
        Ok(l..=r)
    }

    pub fn apply(&mut self, query: &Query) -> Result<Option<i64>> {
        match *query {
            Query::Sum { l, r } => {
                let range = self.check_range(l, r)?;
                let sum = self.values[range]
                    .iter()
                    .fold(0i64, |acc, v| acc.wrapping_add(*v));
                return Ok(Some(sum));
            }
            Query::Insert { value, pos } => {
                self.check_position(pos, self.values.len() + 1)?;
                self.values.insert(pos, value);
            }
            Query::Erase { pos } => {
                self.check_position(pos, self.values.len())?;
                self.values.remove(pos);
            }
            Query::Assign { l, r, value } => {
                let range = self.check_range(l, r)?;
                self.values[range].iter_mut().for_each(|v| *v = value);
            }
            Query::Add { l, r, delta } => {
                let range = self.check_range(l, r)?;
                self.values[range]
                    .iter_mut()
                    .for_each(|v| *v = v.wrapping_add(delta));
            }
            Query::NextPermutation { l, r } => {
                let range = self.check_range(l, r)?;
                next_permutation(&mut self.values[range]);
            }
            Query::PrevPermutation { l, r } => {
                let range = self.check_range(l, r)?;
                prev_permutation(&mut self.values[range]);
            }
        }
        Ok(None)
    }
}

/// The classic array algorithm. The last permutation wraps around to the first.
pub fn next_permutation(values: &mut [i64]) {
    step_with(values, |a, b| a < b)
}

/// The classic array algorithm. The first permutation wraps around to the last.
pub fn prev_permutation(values: &mut [i64]) {
    step_with(values, |a, b| a > b)
}

fn step_with(values: &mut [i64], before: impl Fn(i64, i64) -> bool) {
    let n = values.len();
    if n < 2 {
        return;
    }
    let mut i = n - 1;
    while i > 0 && !before(values[i - 1], values[i]) {
        i -= 1;
    }
    if i == 0 {
        values.reverse();
        return;
    }
    let pivot = i - 1;
    let mut j = n - 1;
    while !before(values[pivot], values[j]) {
        j -= 1;
    }
    values.swap(pivot, j);
    values[i..].reverse();
}

pub const MAX_VALUE: i64 = 6;

fn random_range(rng: &mut StdRng, len: usize) -> (usize, usize) {
    // rarely produce a range that has to be rejected
    if rng.gen_ratio(1, 20) {
        return (rng.gen_range(0..len + 3), rng.gen_range(0..len + 3));
    }
    if len == 0 {
        return (0, 0);
    }
    let a = rng.gen_range(0..len);
    let b = rng.gen_range(0..len);
    (a.min(b), a.max(b))
}

/// Values are small, so that permutations often have repeated values.
pub fn random_query(rng: &mut StdRng, len: usize) -> Query {
    let (l, r) = random_range(rng, len);
    match rng.gen_range(0..7) {
        0 => Query::Sum { l, r },
        1 => Query::Insert {
            value: rng.gen_range(-MAX_VALUE..=MAX_VALUE),
            pos: rng.gen_range(0..len + 2),
        },
        2 => Query::Erase {
            pos: rng.gen_range(0..len + 1),
        },
        3 => Query::Assign {
            l,
            r,
            value: rng.gen_range(-MAX_VALUE..=MAX_VALUE),
        },
        4 => Query::Add {
            l,
            r,
            delta: rng.gen_range(-2..=2),
        },
        5 => Query::NextPermutation { l, r },
        _ => Query::PrevPermutation { l, r },
    }
}

/// Runs the queries on a [`Sequence`] and on a [`Reference`], and checks that
/// they agree on every answer, every error, and the final state.
pub fn check_queries(initial: &[i64], queries: &[Query], seed: u64) {
    let mut sequence = Sequence::from_sequence_with_config(initial, SequenceConfig::seeded(seed));
    let mut reference = Reference::new(initial);
    for query in queries {
        let expected = reference.apply(query);
        assert_eq!(sequence.apply(query), expected, "{:?}", query);
        assert_eq!(sequence.len(), reference.values.len());
    }
    sequence.assert_correctness();
    assert_eq!(sequence.materialize(), reference.values);
}

pub fn check_consistency(num_rounds: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let initial: Vec<i64> = (0..100).map(|_| rng.gen_range(-MAX_VALUE..=MAX_VALUE)).collect();
    let mut sequence = Sequence::from_sequence_with_config(&initial, SequenceConfig::seeded(seed));
    let mut reference = Reference::new(&initial);

    for round in 0..num_rounds {
        let query = random_query(&mut rng, reference.values.len());
        let expected = reference.apply(&query);
        assert_eq!(sequence.apply(&query), expected, "round {}: {:?}", round, query);

        // the full comparison takes linear time
        if round % 50 == 0 {
            assert_eq!(sequence.materialize(), reference.values);
            sequence.assert_correctness();
        }
    }
    assert_eq!(sequence.materialize(), reference.values);
}
