//! Built-in [`Problem`](crate::ga::Problem) implementations.
//!
//! - [`StringMatch`]: evolve a phrase over a fixed alphabet
//! - [`Tsp`]: shortest closed tour over Euclidean cities, with a
//!   [`brute_force`] oracle for small instances

mod string_match;
mod tsp;

pub use string_match::{FitnessScale, StringMatch};
pub use tsp::{brute_force, City, Tsp, MAX_BRUTE_FORCE_CITIES};
