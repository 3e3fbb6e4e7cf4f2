//! Per-generation reporting.
//!
//! The engine knows nothing about how progress is displayed: it hands the
//! scored population to a [`GenerationObserver`] once per generation.
//! [`GenerationSummary`] condenses that population into the statistics a
//! reporting front end needs.

use super::types::{Problem, ScoredIndividual};
use std::collections::HashSet;

/// Receives the scored population of every generation.
///
/// Called once per generation, before the termination check. Any
/// `FnMut(usize, &[ScoredIndividual<G>])` closure is an observer.
pub trait GenerationObserver<G> {
    /// `generation` counts from zero.
    fn on_generation(&mut self, generation: usize, scored: &[ScoredIndividual<G>]);
}

impl<G, F> GenerationObserver<G> for F
where
    F: FnMut(usize, &[ScoredIndividual<G>]),
{
    fn on_generation(&mut self, generation: usize, scored: &[ScoredIndividual<G>]) {
        self(generation, scored)
    }
}

/// Observer that ignores every generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<G> GenerationObserver<G> for NoopObserver {
    fn on_generation(&mut self, _generation: usize, _scored: &[ScoredIndividual<G>]) {}
}

/// Statistics for one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationSummary {
    /// Generation index, from zero.
    pub generation: usize,

    /// Number of individuals scored this generation.
    pub population_size: usize,

    /// Number of distinct genomes in the population.
    pub unique_genome_count: usize,

    /// Lowest fitness in the population.
    pub min_fitness: f64,

    /// Highest fitness in the population.
    pub max_fitness: f64,

    /// Mean fitness (0.0 for an empty population).
    pub avg_fitness: f64,

    /// Rendering of the first individual with the highest fitness.
    pub best_genome: String,
}

impl GenerationSummary {
    /// Summarizes a scored population.
    pub fn from_scored<P: Problem>(
        problem: &P,
        generation: usize,
        scored: &[ScoredIndividual<P::Genome>],
    ) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut total = 0.0;
        let mut best: Option<&ScoredIndividual<P::Genome>> = None;

        for s in scored {
            if best.is_none_or(|b| s.fitness > b.fitness) {
                best = Some(s);
            }
            min = min.min(s.fitness);
            max = max.max(s.fitness);
            total += s.fitness;
        }

        let unique: HashSet<&P::Genome> = scored.iter().map(|s| &s.dna).collect();

        Self {
            generation,
            population_size: scored.len(),
            unique_genome_count: unique.len(),
            min_fitness: min,
            max_fitness: max,
            avg_fitness: if scored.is_empty() {
                0.0
            } else {
                total / scored.len() as f64
            },
            best_genome: best.map(|b| problem.render(&b.dna)).unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "generation {}: {} unique of {} | max {:.4} avg {:.4} min {:.4} | best {}",
            self.generation,
            self.unique_genome_count,
            self.population_size,
            self.max_fitness,
            self.avg_fitness,
            self.min_fitness,
            self.best_genome
        )
    }
}

/// Observer that accumulates a [`GenerationSummary`] per generation.
pub struct SummaryCollector<'p, P: Problem> {
    problem: &'p P,
    summaries: Vec<GenerationSummary>,
}

impl<'p, P: Problem> SummaryCollector<'p, P> {
    /// Creates an empty collector for `problem`.
    pub fn new(problem: &'p P) -> Self {
        Self {
            problem,
            summaries: Vec::new(),
        }
    }

    /// Summaries collected so far, oldest first.
    pub fn summaries(&self) -> &[GenerationSummary] {
        &self.summaries
    }

    /// Consumes the collector and returns its summaries.
    pub fn into_summaries(self) -> Vec<GenerationSummary> {
        self.summaries
    }
}

impl<P: Problem> GenerationObserver<P::Genome> for SummaryCollector<'_, P> {
    fn on_generation(&mut self, generation: usize, scored: &[ScoredIndividual<P::Genome>]) {
        self.summaries
            .push(GenerationSummary::from_scored(self.problem, generation, scored));
    }
}

/// Observer that writes each generation's summary to the `log` facade at
/// `info` level.
pub struct LoggingObserver<'p, P: Problem> {
    problem: &'p P,
}

impl<'p, P: Problem> LoggingObserver<'p, P> {
    /// Creates an observer that renders genomes with `problem`.
    pub fn new(problem: &'p P) -> Self {
        Self { problem }
    }
}

impl<P: Problem> GenerationObserver<P::Genome> for LoggingObserver<'_, P> {
    fn on_generation(&mut self, generation: usize, scored: &[ScoredIndividual<P::Genome>]) {
        let summary = GenerationSummary::from_scored(self.problem, generation, scored);
        log::info!("{summary}");
    }
}
