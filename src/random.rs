//! Random number utilities.
//!
//! Every random draw in the crate goes through an explicit `R: Rng` handle.
//! Runs create one [`StdRng`] from a seed so that a fixed seed reproduces
//! the whole search.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from `seed`, or from OS entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    }
}

/// Uniformly permutes `items` in place (Fisher-Yates).
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Picks one element uniformly at random.
///
/// Returns `None` for an empty slice.
pub fn choose<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}
