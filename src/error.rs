//! Error types shared across the crate.

use thiserror::Error;

/// Errors raised by configuration validation, problem construction,
/// and weighted sampling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// A run parameter or problem input is out of range or empty.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Weighted sampling was requested over weights that sum to zero.
    #[error("degenerate sampling: {0}")]
    DegenerateSampling(String),

    /// A sampling weight is negative, NaN, or infinite.
    #[error("invalid weight {weight} at index {index}")]
    InvalidWeight { index: usize, weight: f64 },
}

pub type Result<T> = std::result::Result<T, GaError>;
