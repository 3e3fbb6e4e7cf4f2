//! Evolve a string that matches a target phrase.

use crate::error::{GaError, Result};
use crate::ga::operators::{reset_mutation, single_point_crossover};
use crate::ga::Problem;
use crate::random::choose;
use rand::Rng;

/// How matches are turned into a fitness value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitnessScale {
    /// Fraction of matching positions, in `[0, 1]`.
    #[default]
    Fraction,

    /// Number of matching positions, in `[0, len]`.
    Count,
}

/// String-matching problem.
///
/// Genomes are character sequences of the target's length drawn from a
/// fixed alphabet. Fitness counts positions equal to the target.
///
/// # Examples
///
/// ```
/// use u_genalg::ga::Problem;
/// use u_genalg::problems::StringMatch;
///
/// let problem = StringMatch::new("to be", "abcdefghijklmnopqrstuvwxyz ").unwrap();
/// let exact: Vec<char> = "to be".chars().collect();
/// assert_eq!(problem.fitness(&exact), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct StringMatch {
    target: Vec<char>,
    alphabet: Vec<char>,
    scale: FitnessScale,
}

impl StringMatch {
    /// Creates the problem.
    ///
    /// # Errors
    /// [`GaError::InvalidConfiguration`] if `target` or `alphabet` is empty.
    pub fn new(target: &str, alphabet: &str) -> Result<Self> {
        let target: Vec<char> = target.chars().collect();
        let alphabet: Vec<char> = alphabet.chars().collect();
        if target.is_empty() {
            return Err(GaError::InvalidConfiguration("target must not be empty".into()));
        }
        if alphabet.is_empty() {
            return Err(GaError::InvalidConfiguration(
                "alphabet must not be empty".into(),
            ));
        }
        let missing: String = target.iter().filter(|c| !alphabet.contains(*c)).collect();
        if !missing.is_empty() {
            log::warn!("target characters {missing:?} are not in the alphabet; an exact match is unreachable");
        }
        Ok(Self {
            target,
            alphabet,
            scale: FitnessScale::Fraction,
        })
    }

    /// Sets the fitness scale.
    pub fn with_scale(mut self, scale: FitnessScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    fn random_gene<R: Rng>(&self, rng: &mut R) -> char {
        // The alphabet is non-empty by construction.
        *choose(&self.alphabet, rng).unwrap_or(&self.alphabet[0])
    }
}

impl Problem for StringMatch {
    type Genome = Vec<char>;

    fn random_dna<R: Rng>(&self, rng: &mut R) -> Vec<char> {
        (0..self.target.len()).map(|_| self.random_gene(rng)).collect()
    }

    fn fitness(&self, genome: &Vec<char>) -> f64 {
        let matches = genome
            .iter()
            .zip(&self.target)
            .filter(|(a, b)| a == b)
            .count() as f64;
        match self.scale {
            FitnessScale::Fraction => matches / self.target.len() as f64,
            FitnessScale::Count => matches,
        }
    }

    fn cross<R: Rng>(&self, parent1: &Vec<char>, parent2: &Vec<char>, rng: &mut R) -> Vec<char> {
        single_point_crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, genome: &mut Vec<char>, rate: f64, rng: &mut R) {
        reset_mutation(genome, rate, rng, |r| self.random_gene(r));
    }

    fn max_fitness(&self) -> Option<f64> {
        Some(match self.scale {
            FitnessScale::Fraction => 1.0,
            FitnessScale::Count => self.target.len() as f64,
        })
    }

    fn render(&self, genome: &Vec<char>) -> String {
        genome.iter().collect()
    }
}
