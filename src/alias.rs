//! Weighted sampling with Vose's alias method.
//!
//! [`AliasTable`] is built from a weight vector in O(n) and answers each
//! weighted draw in O(1): one uniform column pick and one biased coin.
//!
//! # References
//!
//! - Vose (1991), "A Linear Algorithm for Generating Random Numbers with a
//!   Given Distribution"
//! - Schwarz (2011), "Darts, Dice, and Coins: Sampling from a Discrete
//!   Distribution"

use crate::error::{GaError, Result};
use rand::Rng;

/// Alias table over a fixed weight vector.
///
/// # Examples
///
/// ```
/// use u_genalg::alias::AliasTable;
/// use u_genalg::random::create_rng;
///
/// let table = AliasTable::new(&[4.0, 3.0, 2.0, 0.0]).unwrap();
/// let mut rng = create_rng(42);
/// let idx = table.draw(&mut rng);
/// assert!(idx < 3);
/// ```
#[derive(Debug, Clone)]
pub struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasTable {
    /// Builds the table from non-negative weights.
    ///
    /// # Errors
    /// - [`GaError::InvalidConfiguration`] if `weights` is empty
    /// - [`GaError::InvalidWeight`] if any weight is negative or not finite
    /// - [`GaError::DegenerateSampling`] if the weights sum to zero
    pub fn new(weights: &[f64]) -> Result<Self> {
        let n = weights.len();
        if n == 0 {
            return Err(GaError::InvalidConfiguration(
                "alias table needs at least one weight".into(),
            ));
        }
        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(GaError::InvalidWeight { index, weight });
        }

        // Normalise by the largest weight first so the sum neither overflows
        // nor collapses into the subnormal range.
        let max = weights.iter().copied().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return Err(GaError::DegenerateSampling(format!(
                "{n} weights sum to zero"
            )));
        }
        let total: f64 = weights.iter().map(|w| w / max).sum();

        // Scale so the mean weight is 1.
        let scale = n as f64 / total;
        let mut p: Vec<f64> = weights.iter().map(|w| w / max * scale).collect();
        if !scale.is_finite() || p.iter().any(|pi| !pi.is_finite()) {
            return Err(GaError::DegenerateSampling(format!(
                "{n} weights cannot be normalised"
            )));
        }

        let mut prob = vec![1.0; n];
        let mut alias: Vec<usize> = (0..n).collect();
        let mut small = Vec::with_capacity(n);
        let mut large = Vec::with_capacity(n);
        for (i, &pi) in p.iter().enumerate() {
            if pi < 1.0 {
                small.push(i);
            } else {
                large.push(i);
            }
        }

        while let Some(l) = small.pop() {
            let Some(g) = large.pop() else {
                small.push(l);
                break;
            };
            prob[l] = p[l];
            alias[l] = g;
            p[g] = (p[g] + p[l]) - 1.0;
            if p[g] < 1.0 {
                small.push(g);
            } else {
                large.push(g);
            }
        }

        // Leftovers in either stack are full columns; anything left in
        // `small` is there only through rounding error.
        for i in large.into_iter().chain(small) {
            prob[i] = 1.0;
            alias[i] = i;
        }

        Ok(Self { prob, alias })
    }

    /// Draws an index in `0..len()` with probability proportional to its weight.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> usize {
        let i = rng.random_range(0..self.prob.len());
        if rng.random::<f64>() < self.prob[i] {
            i
        } else {
            self.alias[i]
        }
    }

    /// Number of columns (the length of the original weight vector).
    pub fn len(&self) -> usize {
        self.prob.len()
    }

    /// Always `false`: construction rejects empty weight vectors.
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }

    /// Acceptance probability of each column.
    pub fn probabilities(&self) -> &[f64] {
        &self.prob
    }

    /// Alias index of each column.
    pub fn aliases(&self) -> &[usize] {
        &self.alias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn frequencies(weights: &[f64], draws: usize, seed: u64) -> Vec<f64> {
        let table = AliasTable::new(weights).unwrap();
        let mut rng = create_rng(seed);
        let mut counts = vec![0usize; weights.len()];
        for _ in 0..draws {
            counts[table.draw(&mut rng)] += 1;
        }
        counts.iter().map(|&c| c as f64 / draws as f64).collect()
    }

    #[test]
    fn test_converges_to_weight_proportions() {
        let weights = [4.0, 3.0, 2.0, 0.0];
        let freq = frequencies(&weights, 100_000, 42);
        let total: f64 = weights.iter().sum();
        for (i, &w) in weights.iter().enumerate() {
            let expected = w / total;
            assert!(
                (freq[i] - expected).abs() < 0.01,
                "index {i}: expected {expected:.4}, got {:.4}",
                freq[i]
            );
        }
    }

    #[test]
    fn test_zero_weight_never_drawn() {
        let freq = frequencies(&[4.0, 3.0, 2.0, 0.0], 100_000, 7);
        assert_eq!(freq[3], 0.0);
    }

    #[test]
    fn test_all_zero_is_degenerate() {
        let err = AliasTable::new(&[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, GaError::DegenerateSampling(_)));
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let freq = frequencies(&[f64::MAX, f64::MAX, 0.0], 100_000, 11);
        assert_eq!(freq[2], 0.0);
        assert!((freq[0] - 0.5).abs() < 0.01, "got {:.4}", freq[0]);
    }

    #[test]
    fn test_subnormal_weights_keep_zero_out() {
        let freq = frequencies(&[1e-320, 0.0], 10_000, 13);
        assert_eq!(freq, vec![1.0, 0.0]);

        let table = AliasTable::new(&[1e-320, 0.0]).unwrap();
        assert!(table.probabilities().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_empty_rejected() {
        let err = AliasTable::new(&[]).unwrap_err();
        assert!(matches!(err, GaError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = AliasTable::new(&[1.0, -0.5, 2.0]).unwrap_err();
        assert_eq!(
            err,
            GaError::InvalidWeight {
                index: 1,
                weight: -0.5
            }
        );
    }

    #[test]
    fn test_nan_weight_rejected() {
        let err = AliasTable::new(&[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, GaError::InvalidWeight { index: 1, .. }));
    }

    #[test]
    fn test_single_weight() {
        let table = AliasTable::new(&[0.3]).unwrap();
        let mut rng = create_rng(1);
        for _ in 0..100 {
            assert_eq!(table.draw(&mut rng), 0);
        }
    }

    #[test]
    fn test_uniform_weights_are_full_columns() {
        let table = AliasTable::new(&[2.0, 2.0, 2.0, 2.0]).unwrap();
        assert!(table.probabilities().iter().all(|&p| (p - 1.0).abs() < 1e-12));
        assert_eq!(table.aliases(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_table_shape() {
        let table = AliasTable::new(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        for (i, &p) in table.probabilities().iter().enumerate() {
            assert!((0.0..=1.0 + 1e-12).contains(&p), "prob[{i}] = {p}");
            assert!(table.aliases()[i] < 3);
        }
    }

    #[test]
    fn test_column_mass_matches_weights() {
        // Each index's total mass over all columns must equal its scaled weight.
        let weights = [5.0, 1.0, 1.0, 3.0];
        let table = AliasTable::new(&weights).unwrap();
        let n = weights.len() as f64;
        let total: f64 = weights.iter().sum();
        let mut mass = vec![0.0; weights.len()];
        for i in 0..weights.len() {
            let p = table.probabilities()[i];
            mass[i] += p;
            mass[table.aliases()[i]] += 1.0 - p;
        }
        for (i, &w) in weights.iter().enumerate() {
            assert!((mass[i] - w * n / total).abs() < 1e-9, "index {i}");
        }
    }
}
