//! Generic evolutionary optimization.
//!
//! Provides a population-based genetic algorithm over any candidate type that
//! implements [`ga::Chromosome`]:
//!
//! - **Selection**: roulette wheel (fitness-proportionate) or tournament
//! - **Reproduction**: probabilistic crossover, mutation and replication
//! - **Termination**: fitness threshold or generation budget
//!
//! Runs are reproducible: all randomness flows from one seedable generator
//! (see [`random`]).
//!
//! # Features
//!
//! - `parallel`: evaluate population fitness with rayon
//! - `serde`: derive `Serialize`/`Deserialize` for configuration and results

pub mod ga;
pub mod random;
