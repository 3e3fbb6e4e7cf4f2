//! Descriptor-driven entry point.
//!
//! [`run_ga`] builds a problem from a plain [`RunRequest`] and streams one
//! [`GenerationSummary`] per generation to a callback. It is the boundary a
//! worker thread, CLI, or UI talks to; none of them need to know the
//! engine's generic types.

use crate::error::Result;
use crate::ga::{
    GaConfig, GaRunner, GenerationObserver, GenerationSummary, Problem, ScoredIndividual,
    Selection, SizePolicy,
};
use crate::problems::{City, StringMatch, Tsp};

/// Which problem to solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProblemDescriptor {
    StringMatch { target: String, alphabet: String },
    Tsp { cities: Vec<City> },
}

/// Parent selection as exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParentStrategy {
    #[default]
    TopK,
    /// Fitness-proportionate draws. Problems with negative fitness (TSP)
    /// are sampled on shifted fitness.
    WeightedRandom,
}

/// Everything needed to start a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRequest {
    pub problem: ProblemDescriptor,
    pub population_size: usize,
    pub max_generations: usize,
    pub mutation_rate: f64,
    pub strategy: ParentStrategy,
    pub size_policy: SizePolicy,
    pub seed: Option<u64>,
}

impl RunRequest {
    /// Creates a request for `problem` with [`GaConfig::default`] settings
    /// and top-K selection.
    pub fn new(problem: ProblemDescriptor) -> Self {
        let defaults = GaConfig::default();
        Self {
            problem,
            population_size: defaults.population_size,
            max_generations: defaults.max_generations,
            mutation_rate: defaults.mutation_rate,
            strategy: ParentStrategy::default(),
            size_policy: defaults.size_policy,
            seed: None,
        }
    }

    fn config(&self, selection: Selection) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            max_generations: self.max_generations,
            mutation_rate: self.mutation_rate,
            selection,
            size_policy: self.size_policy,
            seed: self.seed,
            ..GaConfig::default()
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutcome {
    pub generations: usize,
    pub done: bool,
    pub best_fitness: Option<f64>,
    pub best_genome: Option<String>,
}

/// Forwards a summary of every generation to a callback.
struct Forward<'a, P, F> {
    problem: &'a P,
    sink: F,
}

impl<P, F> GenerationObserver<P::Genome> for Forward<'_, P, F>
where
    P: Problem,
    F: FnMut(GenerationSummary),
{
    fn on_generation(&mut self, generation: usize, scored: &[ScoredIndividual<P::Genome>]) {
        (self.sink)(GenerationSummary::from_scored(self.problem, generation, scored));
    }
}

/// Runs the GA described by `request`, calling `on_summary` once per
/// generation.
///
/// # Errors
/// Fails on an invalid problem description or configuration, or when
/// weighted selection meets an all-zero population.
pub fn run_ga<F>(request: &RunRequest, on_summary: F) -> Result<RunOutcome>
where
    F: FnMut(GenerationSummary),
{
    match &request.problem {
        ProblemDescriptor::StringMatch { target, alphabet } => {
            let problem = StringMatch::new(target, alphabet)?;
            let selection = match request.strategy {
                ParentStrategy::TopK => Selection::TopK,
                ParentStrategy::WeightedRandom => Selection::FitnessWeighted,
            };
            execute(&problem, &request.config(selection), on_summary)
        }
        ProblemDescriptor::Tsp { cities } => {
            let problem = Tsp::new(cities.clone())?;
            let selection = match request.strategy {
                ParentStrategy::TopK => Selection::TopK,
                ParentStrategy::WeightedRandom => Selection::ShiftedWeighted,
            };
            execute(&problem, &request.config(selection), on_summary)
        }
    }
}

/// Runs the GA described by `request` and returns every summary.
pub fn collect_summaries(request: &RunRequest) -> Result<(RunOutcome, Vec<GenerationSummary>)> {
    let mut summaries = Vec::new();
    let outcome = run_ga(request, |s| summaries.push(s))?;
    Ok((outcome, summaries))
}

fn execute<P, F>(problem: &P, config: &GaConfig, sink: F) -> Result<RunOutcome>
where
    P: Problem,
    F: FnMut(GenerationSummary),
{
    let mut observer = Forward { problem, sink };
    let result = GaRunner::run(problem, config, &mut observer)?;
    Ok(RunOutcome {
        generations: result.generations,
        done: result.done,
        best_fitness: result.best_fitness(),
        best_genome: result.best.as_ref().map(|b| problem.render(&b.dna)),
    })
}
