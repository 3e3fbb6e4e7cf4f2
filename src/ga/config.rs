//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{GaError, Result};

/// How many children each parent pair produces.
///
/// With `p` parents there are `p / 2` pairs (an odd parent is dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizePolicy {
    /// Every pair produces `floor(population_size / (p / 2))` children.
    ///
    /// The next generation has `per_pair × pairs` members, which can fall
    /// slightly short of `population_size` when the division is inexact.
    #[default]
    Floor,

    /// Every pair produces `population_size / pairs` children and the
    /// remainder is handed out one per pair to the first pairs, so the
    /// population size never changes.
    Exact,
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_genalg::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genalg::ga::{GaConfig, Selection, SizePolicy};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::FitnessWeighted)
///     .with_size_policy(SizePolicy::Exact)
///     .with_mutation_rate(0.02);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the initial population.
    ///
    /// Also the target size of every later generation (see [`SizePolicy`]).
    pub population_size: usize,

    /// Maximum number of generations. Zero runs nothing.
    pub max_generations: usize,

    /// Per-gene (or per-call, depending on the problem) mutation
    /// probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population chosen as parents each generation
    /// (0.0 exclusive – 1.0).
    ///
    /// At least two parents are always chosen.
    pub parent_ratio: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Children-per-pair policy.
    pub size_policy: SizePolicy,

    /// Whether to score the population in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            mutation_rate: 0.05,
            parent_ratio: 0.5,
            selection: Selection::default(),
            size_policy: SizePolicy::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the fraction of the population chosen as parents.
    pub fn with_parent_ratio(mut self, ratio: f64) -> Self {
        self.parent_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the children-per-pair policy.
    pub fn with_size_policy(mut self, policy: SizePolicy) -> Self {
        self.size_policy = policy;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick experiments: small population, few generations.
    ///
    /// - Population: 50, Generations: 100
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            ..Self::default()
        }
    }

    /// Preset for moderate searches.
    ///
    /// - Population: 500, Generations: 500
    pub fn balanced() -> Self {
        Self {
            population_size: 500,
            max_generations: 500,
            ..Self::default()
        }
    }

    /// Preset for long phrases and larger tours.
    ///
    /// - Population: 2000, Generations: 1000
    pub fn quality() -> Self {
        Self {
            population_size: 2000,
            max_generations: 1000,
            ..Self::default()
        }
    }

    /// Automatically selects a preset based on genome length.
    ///
    /// - `genome_len < 10` → [`fast()`](Self::fast)
    /// - `10 ≤ genome_len < 40` → [`balanced()`](Self::balanced)
    /// - `genome_len ≥ 40` → [`quality()`](Self::quality)
    pub fn auto_select(genome_len: usize) -> Self {
        if genome_len < 10 {
            Self::fast()
        } else if genome_len < 40 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Number of parents selected each generation.
    pub fn parent_count(&self) -> usize {
        ((self.population_size as f64 * self.parent_ratio) as usize).max(2)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfiguration`] describing the first
    /// invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(GaError::InvalidConfiguration(
                "population_size must be at least 2".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidConfiguration(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(self.parent_ratio > 0.0 && self.parent_ratio <= 1.0) {
            return Err(GaError::InvalidConfiguration(format!(
                "parent_ratio must be in (0, 1], got {}",
                self.parent_ratio
            )));
        }
        Ok(())
    }
}
