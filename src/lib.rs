//! Generic genetic algorithm engine.
//!
//! Provides:
//!
//! - **GA engine** ([`ga`]): generation loop over a pluggable
//!   [`Problem`](ga::Problem), with truncation and fitness-weighted parent
//!   selection and per-generation observers.
//! - **Alias sampling** ([`alias`]): Vose's alias method, O(n) build and
//!   O(1) weighted draws, used by fitness-weighted selection.
//! - **Problems** ([`problems`]): string matching over an alphabet, and the
//!   Traveling Salesman Problem with order crossover and a brute-force
//!   oracle for small instances.
//! - **Session** ([`session`]): a descriptor-driven entry point that streams
//!   [`GenerationSummary`](ga::GenerationSummary) values.
//!
//! # Randomness
//!
//! Every random draw goes through an explicit generator created from
//! [`GaConfig::seed`](ga::GaConfig::seed), so seeded runs are reproducible.

pub mod alias;
pub mod error;
pub mod ga;
pub mod problems;
pub mod random;
pub mod session;

pub use error::{GaError, Result};
