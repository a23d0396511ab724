//! Deterministic random number generation.
//!
//! The engine core is random-free: dispatch is pure ordering over
//! in-memory state. Randomness enters in exactly one place, the fumble
//! collaborator's yes/no roll, and that roll must replay identically
//! from the same seed. `GameRng` wraps ChaCha8 with just that surface.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG behind the fumble resolver.
///
/// Same seed, same roll sequence, same outcomes.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Roll a boolean with the given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
