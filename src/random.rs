//! Random source construction.
//!
//! Every run draws from exactly one generator. Seeded generators make runs
//! reproducible; unseeded ones pull entropy from the operating system.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => StdRng::from_os_rng(),
    }
}
