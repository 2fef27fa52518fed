//! Error types for the GA engine.

use rand::distr::weighted;

/// Invalid [`GaConfig`](super::GaConfig) parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A probability parameter is NaN or outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    ChanceOutOfRange { name: &'static str, value: f64 },

    /// The generation budget is zero.
    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    /// The convergence threshold is NaN.
    #[error("threshold must not be NaN")]
    InvalidThreshold,
}

/// Errors raised while constructing or running a [`GeneticAlgorithm`](super::GeneticAlgorithm).
#[derive(Debug, thiserror::Error)]
pub enum GaError {
    /// The initial population had no members.
    #[error("initial population must not be empty")]
    EmptyPopulation,

    /// The configuration failed [`GaConfig::validate`](super::GaConfig::validate).
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Roulette weights were rejected (negative, non-finite or all zero).
    ///
    /// Roulette selection uses raw fitness as weights, so every chromosome
    /// must report a non-negative fitness and at least one must be positive.
    #[error("roulette selection failed: {0}")]
    Roulette(#[from] weighted::Error),
}
