//! Parent selection strategies for the GA.
//!
//! A [`ParentSelector`] turns a scored population into the list of parents
//! that will breed the next generation. [`Selection`] is the configurable
//! set of built-in strategies; any closure with the matching shape is a
//! selector too.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Vose (1991), "A Linear Algorithm for Generating Random Numbers with a
//!   Given Distribution"

use super::types::ScoredIndividual;
use crate::alias::AliasTable;
use crate::error::Result;
use rand::rngs::StdRng;

/// Chooses `count` parents from a scored population.
///
/// Fitness is maximized: higher is better.
pub trait ParentSelector<G> {
    /// Returns the chosen parents. The result may be shorter than `count`
    /// when the strategy draws without replacement from a smaller
    /// population.
    fn select(
        &self,
        scored: &[ScoredIndividual<G>],
        count: usize,
        rng: &mut StdRng,
    ) -> Result<Vec<ScoredIndividual<G>>>;
}

impl<G, F> ParentSelector<G> for F
where
    F: Fn(&[ScoredIndividual<G>], usize, &mut StdRng) -> Result<Vec<ScoredIndividual<G>>>,
{
    fn select(
        &self,
        scored: &[ScoredIndividual<G>],
        count: usize,
        rng: &mut StdRng,
    ) -> Result<Vec<ScoredIndividual<G>>> {
        self(scored, count, rng)
    }
}

/// Built-in selection strategies.
///
/// # Examples
///
/// ```
/// use u_genalg::ga::Selection;
///
/// // Deterministic truncation (the default)
/// let sel = Selection::TopK;
///
/// // Fitness-proportionate draws through an alias table
/// let sel = Selection::FitnessWeighted;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Truncation selection: the `count` fittest individuals.
    ///
    /// Sorts descending by fitness with a stable sort, so exact ties keep
    /// population order. Deterministic given the population.
    ///
    /// # Complexity
    /// O(n log n) per generation
    #[default]
    TopK,

    /// Fitness-proportionate selection with replacement.
    ///
    /// Builds an [`AliasTable`] over the raw fitness values and draws
    /// `count` times. All fitness values must be non-negative and at least
    /// one must be positive.
    ///
    /// # Complexity
    /// O(n) table build, O(1) per draw
    FitnessWeighted,

    /// Fitness-proportionate selection over shifted fitness.
    ///
    /// Weight = `fitness - min_fitness + ε`, so negative fitness (such as a
    /// negated tour length) can be sampled and the worst individual keeps
    /// a vanishing but non-zero chance.
    ///
    /// # Complexity
    /// O(n) table build, O(1) per draw
    ShiftedWeighted,
}

impl<G: Clone> ParentSelector<G> for Selection {
    fn select(
        &self,
        scored: &[ScoredIndividual<G>],
        count: usize,
        rng: &mut StdRng,
    ) -> Result<Vec<ScoredIndividual<G>>> {
        match self {
            Selection::TopK => Ok(top_k(scored, count)),
            Selection::FitnessWeighted => {
                let weights: Vec<f64> = scored.iter().map(|s| s.fitness).collect();
                weighted(scored, &weights, count, rng)
            }
            Selection::ShiftedWeighted => {
                let weights = shifted_weights(scored);
                weighted(scored, &weights, count, rng)
            }
        }
    }
}

/// Truncation selection.
pub fn top_k<G: Clone>(scored: &[ScoredIndividual<G>], k: usize) -> Vec<ScoredIndividual<G>> {
    let mut sorted: Vec<&ScoredIndividual<G>> = scored.iter().collect();
    sorted.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    sorted.into_iter().take(k).cloned().collect()
}

/// Draws `count` individuals with replacement, weighted by `weights`.
fn weighted<G: Clone>(
    scored: &[ScoredIndividual<G>],
    weights: &[f64],
    count: usize,
    rng: &mut StdRng,
) -> Result<Vec<ScoredIndividual<G>>> {
    let table = AliasTable::new(weights)?;
    Ok((0..count)
        .map(|_| scored[table.draw(rng)].clone())
        .collect())
}

/// Shifts fitness so the minimum maps to a small positive weight.
fn shifted_weights<G>(scored: &[ScoredIndividual<G>]) -> Vec<f64> {
    let epsilon = 1e-10;
    let min = scored
        .iter()
        .map(|s| s.fitness)
        .fold(f64::INFINITY, f64::min);
    scored.iter().map(|s| s.fitness - min + epsilon).collect()
}
