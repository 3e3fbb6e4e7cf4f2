//! Core trait definitions for the GA framework.
//!
//! [`Problem`] is the contract between the generic engine and a concrete
//! optimization target; [`ScoredIndividual`] pairs a genome with the
//! fitness the problem assigned to it.

use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;

/// A genome together with its fitness.
///
/// Fitness is problem-defined and **higher is better** (maximization).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredIndividual<G> {
    /// The encoded candidate solution.
    pub dna: G,

    /// Fitness assigned by [`Problem::fitness`].
    pub fitness: f64,
}

impl<G> ScoredIndividual<G> {
    /// Pairs a genome with its fitness.
    pub fn new(dna: G, fitness: f64) -> Self {
        Self { dna, fitness }
    }
}

/// Defines a GA optimization problem.
///
/// A problem owns its target data (a phrase, a city set, ...) and is
/// immutable once constructed. It covers:
///
/// 1. **Initialization**: [`random_dna`](Problem::random_dna)
/// 2. **Evaluation**: [`fitness`](Problem::fitness)
/// 3. **Crossover**: [`cross`](Problem::cross)
/// 4. **Mutation**: [`mutate`](Problem::mutate)
///
/// Every random decision is drawn from the `rng` handed in by the engine,
/// so a seeded run is reproducible.
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` because the engine may score the
/// population in parallel (feature `parallel`).
pub trait Problem: Send + Sync {
    /// Genome representation. Hashable so that distinct genomes can be
    /// counted in generation summaries.
    type Genome: Clone + Debug + Eq + Hash + Send + Sync;

    /// Creates a random, valid genome.
    fn random_dna<R: Rng>(&self, rng: &mut R) -> Self::Genome;

    /// Scores a genome. Higher is better.
    fn fitness(&self, genome: &Self::Genome) -> f64;

    /// Recombines two parents into one child.
    fn cross<R: Rng>(&self, parent1: &Self::Genome, parent2: &Self::Genome, rng: &mut R)
        -> Self::Genome;

    /// Perturbs a freshly bred child in place.
    ///
    /// `rate` is in `[0, 1]`; how it is applied (per gene or per call) is
    /// up to the problem.
    fn mutate<R: Rng>(&self, genome: &mut Self::Genome, rate: f64, rng: &mut R);

    /// Best attainable fitness, if known.
    ///
    /// The engine's default termination stops as soon as the best
    /// individual reaches this value. `None` means "never stop early".
    fn max_fitness(&self) -> Option<f64> {
        None
    }

    /// Human-readable rendering of a genome for summaries and logs.
    fn render(&self, genome: &Self::Genome) -> String {
        format!("{genome:?}")
    }
}
