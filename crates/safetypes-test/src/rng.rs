//! Reproducible random number generators.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed used by tests that only need *some* fixed seed.
pub const TEST_SEED: u64 = 42;

/// Creates a `StdRng` from `seed`.
///
/// Two generators with the same seed produce the same sequence.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
