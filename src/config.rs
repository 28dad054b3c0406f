//! Configuration of a [`crate::Sequence`].

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Configuration for building a sequence.
///
/// The priorities of the tree nodes are drawn from a generator owned by the sequence.
/// Without a seed it is seeded from system entropy, and with one the shape of the
/// tree, and therefore every operation, is reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceConfig {
    pub seed: Option<u64>,
}

impl SequenceConfig {
    pub fn seeded(seed: u64) -> SequenceConfig {
        SequenceConfig { seed: Some(seed) }
    }

    /// Creates the priority generator described by this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
