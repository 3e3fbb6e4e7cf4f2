//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → scoring → reporting → termination check → selection →
//! shuffled pairing → crossover + mutation → repeat.

use super::config::{GaConfig, SizePolicy};
use super::selection::ParentSelector;
use super::summary::GenerationObserver;
use super::types::{Problem, ScoredIndividual};
use crate::error::{GaError, Result};
use crate::random::{rng_from_seed, shuffle};
use rand::rngs::StdRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<G> {
    /// The best individual scored during the entire run.
    ///
    /// `None` only when no generation ran (`max_generations == 0` or an
    /// immediate cancellation).
    pub best: Option<ScoredIndividual<G>>,

    /// Number of generations scored.
    pub generations: usize,

    /// Whether the termination predicate was satisfied.
    pub done: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of each scored generation.
    pub fitness_history: Vec<f64>,
}

impl<G> GaResult<G> {
    /// Fitness of the best individual, if any generation ran.
    pub fn best_fitness(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.fitness)
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_genalg::ga::{GaConfig, GaRunner, NoopObserver};
/// use u_genalg::problems::StringMatch;
///
/// let problem = StringMatch::new("AB", "AB").unwrap();
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(50)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// let result = GaRunner::run(&problem, &config, &mut NoopObserver).unwrap();
/// assert_eq!(result.best_fitness(), Some(1.0));
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the configured selection strategy, stopping when
    /// the best individual reaches [`Problem::max_fitness`].
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or parent
    /// selection fails (see [`GaError`]).
    pub fn run<P, O>(problem: &P, config: &GaConfig, observer: &mut O) -> Result<GaResult<P::Genome>>
    where
        P: Problem,
        O: GenerationObserver<P::Genome>,
    {
        Self::run_until(problem, config, default_is_done(problem), observer)
    }

    /// Runs the GA with a caller-supplied termination predicate.
    ///
    /// `is_done` receives the best individual of each generation.
    pub fn run_until<P, D, O>(
        problem: &P,
        config: &GaConfig,
        is_done: D,
        observer: &mut O,
    ) -> Result<GaResult<P::Genome>>
    where
        P: Problem,
        D: Fn(&ScoredIndividual<P::Genome>) -> bool,
        O: GenerationObserver<P::Genome>,
    {
        Self::run_with(problem, config, &config.selection, is_done, observer, None)
    }

    /// Runs the GA with an explicit parent selector and an optional
    /// cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before scoring the next generation and returns the best individual
    /// found so far.
    pub fn run_with<P, S, D, O>(
        problem: &P,
        config: &GaConfig,
        selector: &S,
        is_done: D,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Genome>>
    where
        P: Problem,
        S: ParentSelector<P::Genome> + ?Sized,
        D: Fn(&ScoredIndividual<P::Genome>) -> bool,
        O: GenerationObserver<P::Genome>,
    {
        config.validate()?;

        let mut rng = rng_from_seed(config.seed);

        // 1. Initialize population
        let mut population: Vec<P::Genome> = (0..config.population_size)
            .map(|_| problem.random_dna(&mut rng))
            .collect();

        let mut best: Option<ScoredIndividual<P::Genome>> = None;
        let mut fitness_history = Vec::with_capacity(config.max_generations);
        let mut generations = 0usize;
        let mut done = false;
        let mut cancelled = false;

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    log::info!("GA cancelled before generation {gen}");
                    break;
                }
            }

            // Score
            let scored = score_population(problem, population, config.parallel);
            generations += 1;

            // Best of this generation, first of equals
            let gen_best = find_best(&scored)
                .ok_or_else(|| {
                    GaError::InvalidConfiguration(format!("generation {gen} is empty"))
                })?
                .clone();
            fitness_history.push(gen_best.fitness);
            log::debug!(
                "generation {gen}: size {} best {:.6}",
                scored.len(),
                gen_best.fitness
            );

            observer.on_generation(gen, &scored);

            let finished = is_done(&gen_best);
            if best.as_ref().is_none_or(|b| gen_best.fitness > b.fitness) {
                best = Some(gen_best);
            }
            if finished {
                done = true;
                log::info!("GA reached its goal at generation {gen}");
                break;
            }

            // Select, pair, breed
            let parents = selector.select(&scored, config.parent_count(), &mut rng)?;
            population = next_generation(problem, parents, config, &mut rng)?;
        }

        if !done && !cancelled {
            log::info!(
                "GA stopped after {generations} generations, best {:?}",
                best.as_ref().map(|b| b.fitness)
            );
        }

        Ok(GaResult {
            best,
            generations,
            done,
            cancelled,
            fitness_history,
        })
    }
}

/// Termination predicate used by [`GaRunner::run`].
fn default_is_done<P: Problem>(problem: &P) -> impl Fn(&ScoredIndividual<P::Genome>) -> bool {
    let target = problem.max_fitness();
    move |best| target.is_some_and(|t| best.fitness >= t)
}

/// Score all genomes in population order.
fn score_population<P: Problem>(
    problem: &P,
    population: Vec<P::Genome>,
    parallel: bool,
) -> Vec<ScoredIndividual<P::Genome>> {
    #[cfg(feature = "parallel")]
    if parallel {
        return population
            .into_par_iter()
            .map(|dna| {
                let f = problem.fitness(&dna);
                ScoredIndividual::new(dna, f)
            })
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population
        .into_iter()
        .map(|dna| {
            let f = problem.fitness(&dna);
            ScoredIndividual::new(dna, f)
        })
        .collect()
}

/// Find the first individual with the highest fitness.
fn find_best<G>(scored: &[ScoredIndividual<G>]) -> Option<&ScoredIndividual<G>> {
    scored
        .iter()
        .reduce(|a, b| if b.fitness > a.fitness { b } else { a })
}

/// Breed the next population from the selected parents.
///
/// Parents are shuffled and paired sequentially; an odd last parent is
/// dropped.
fn next_generation<P: Problem>(
    problem: &P,
    mut parents: Vec<ScoredIndividual<P::Genome>>,
    config: &GaConfig,
    rng: &mut StdRng,
) -> Result<Vec<P::Genome>> {
    shuffle(&mut parents, rng);

    let pairs = parents.len() / 2;
    if pairs == 0 {
        return Err(GaError::InvalidConfiguration(format!(
            "parent selection returned {} parents, need at least 2",
            parents.len()
        )));
    }

    let size = config.population_size;
    let children_for = |pair: usize| -> usize {
        match config.size_policy {
            SizePolicy::Floor => (size as f64 / (parents.len() as f64 / 2.0)).floor() as usize,
            SizePolicy::Exact => size / pairs + usize::from(pair < size % pairs),
        }
    };

    let mut next = Vec::with_capacity(size);
    for (i, pair) in parents.chunks_exact(2).enumerate() {
        for _ in 0..children_for(i) {
            let mut child = problem.cross(&pair[0].dna, &pair[1].dna, rng);
            problem.mutate(&mut child, config.mutation_rate, rng);
            next.push(child);
        }
    }

    Ok(next)
}

// ============================================================================
// Tests
// ============================================================================
