//! Genetic Algorithm framework.
//!
//! A generic GA engine built on trait-based abstractions. Users define their
//! problem by implementing [`Problem`], which specifies how to create,
//! score, recombine, and mutate genomes.
//!
//! # Core Traits
//!
//! - [`Problem`]: Problem definition — initialization, fitness, operators
//! - [`ParentSelector`]: Turns a scored population into parents
//! - [`GenerationObserver`]: Receives every scored generation
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, policies)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with per-generation history
//! - [`GenerationSummary`]: Min/max/average fitness and diversity of one
//!   generation
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover, single-point crossover, and mutation
//!   operators
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod summary;
mod types;

pub use config::{GaConfig, SizePolicy};
pub use runner::{GaResult, GaRunner};
pub use selection::{top_k, ParentSelector, Selection};
pub use summary::{
    GenerationObserver, GenerationSummary, LoggingObserver, NoopObserver, SummaryCollector,
};
pub use types::{Problem, ScoredIndividual};
