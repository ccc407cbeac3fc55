//! Random-choice capability
//!
//! Every selection among qualifying candidates (next concept, alternative
//! concept, resource sample) draws from a caller-supplied `rand::Rng`.
//! Production code uses [`PathRng`]; tests fix the seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default generator for recommendation choices
pub type PathRng = ChaCha8Rng;

/// Create a generator with a fixed seed (reproducible choices)
pub fn seeded(seed: u64) -> PathRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Create a generator seeded from the operating system
pub fn from_entropy() -> PathRng {
    ChaCha8Rng::from_entropy()
}
