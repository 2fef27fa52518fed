//! Genetic Algorithm engine.
//!
//! A generic, domain-agnostic GA built on a single capability trait. Users
//! describe their problem by implementing [`Chromosome`] (fitness, random
//! instance, crossover, mutation) and hand an initial population to
//! [`GeneticAlgorithm`].
//!
//! # Key Types
//!
//! - [`GaConfig`]: threshold, generation budget, operator chances, selection
//! - [`GeneticAlgorithm`]: executes the evolutionary loop
//! - [`GaResult`]: best chromosome, termination reason, per-generation stats
//!
//! # Submodules
//!
//! - [`operators`]: slice crossover and mutation helpers for encodings
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
pub mod operators;
mod runner;
mod selection;
#[cfg(test)]
mod testing;
mod types;

pub use config::GaConfig;
pub use error::{ConfigError, GaError};
pub use runner::{GaResult, GenerationStats, GeneticAlgorithm, Termination};
pub use selection::{Selection, Selector};
pub use types::{random_population, Chromosome};
