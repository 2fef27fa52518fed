//! GA configuration.
//!
//! [`GaConfig`] holds every parameter that controls one run. It is immutable
//! once handed to the engine.

use super::error::ConfigError;
use super::selection::Selection;

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_genetic::ga::{GaConfig, Selection};
///
/// let config = GaConfig::new(13.0);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.selection, Selection::Tournament);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genetic::ga::{GaConfig, Selection};
///
/// let config = GaConfig::new(0.95)
///     .with_max_generations(500)
///     .with_selection(Selection::Roulette)
///     .with_mutation_chance(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Fitness at or above which the run stops as converged.
    pub threshold: f64,

    /// Maximum number of reproduction cycles before giving up.
    pub max_generations: usize,

    /// Probability that each new candidate is replaced by a mutant of itself.
    pub mutation_chance: f64,

    /// Probability of producing two offspring by crossover.
    pub crossover_chance: f64,

    /// Parent selection strategy, fixed for the whole run.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy. Ignored when the engine is given an
    /// explicit generator.
    pub seed: Option<u64>,

    /// Whether to evaluate population fitness with rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// to sequential evaluation.
    pub parallel: bool,
}

impl GaConfig {
    /// Creates a configuration that converges at `threshold`, with default
    /// operator rates.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            max_generations: 100,
            mutation_chance: 0.01,
            crossover_chance: 0.7,
            selection: Selection::default(),
            seed: None,
            parallel: false,
        }
    }

    /// Sets the convergence threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation chance. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_mutation_chance(mut self, chance: f64) -> Self {
        self.mutation_chance = chance;
        self
    }

    /// Sets the crossover chance. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_crossover_chance(mut self, chance: f64) -> Self {
        self.crossover_chance = chance;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold.is_nan() {
            return Err(ConfigError::InvalidThreshold);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        check_chance("mutation_chance", self.mutation_chance)?;
        check_chance("crossover_chance", self.crossover_chance)?;
        Ok(())
    }
}

fn check_chance(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ChanceOutOfRange { name, value })
    }
}
