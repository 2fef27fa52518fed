//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] owns a population and evolves it generation by
//! generation: evaluate → select → crossover or replicate → mutate → replace,
//! until the best fitness reaches the threshold or the generation budget runs
//! out.

use super::config::GaConfig;
use super::error::GaError;
use super::types::{best_in, Chromosome};
use crate::random::rng_from;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, instrument};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The best fitness met or exceeded the threshold.
    Converged,
    /// The generation budget was used up first.
    Exhausted,
}

/// Population summary taken at one fitness-comparison round.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index (0 = initial population).
    pub generation: usize,
    /// Best fitness seen so far in the run (running maximum).
    pub best_fitness: f64,
    /// Mean fitness of the current population.
    pub mean_fitness: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<C> {
    /// The best chromosome found during the run.
    pub best: C,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Value of the generation counter when the run stopped.
    pub generations: usize,

    /// Whether the run converged or exhausted its budget.
    pub termination: Termination,

    /// One entry per fitness-comparison round, starting with generation 0.
    pub history: Vec<GenerationStats>,
}

impl<C> GaResult<C> {
    /// Returns `true` if the threshold was reached.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Generational genetic algorithm over a fixed-size population.
///
/// All randomness comes from the single generator `R`, which is never
/// reseeded during a run.
///
/// # Usage
///
/// ```
/// use rand::Rng;
/// use u_genetic::ga::{Chromosome, GaConfig, GeneticAlgorithm, random_population};
/// use u_genetic::random::create_rng;
///
/// #[derive(Clone, Debug)]
/// struct Bits(Vec<bool>);
///
/// impl Chromosome for Bits {
///     fn fitness(&self) -> f64 {
///         self.0.iter().filter(|&&b| b).count() as f64
///     }
///     fn random_instance<R: Rng + ?Sized>(rng: &mut R) -> Self {
///         Bits((0..16).map(|_| rng.random_bool(0.5)).collect())
///     }
///     fn crossover<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> (Self, Self) {
///         let (a, b) = u_genetic::ga::operators::single_point_crossover(&self.0, &other.0, rng);
///         (Bits(a), Bits(b))
///     }
///     fn mutate<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
///         let mut bits = self.0.clone();
///         let i = rng.random_range(0..bits.len());
///         bits[i] = !bits[i];
///         Bits(bits)
///     }
/// }
///
/// let mut rng = create_rng(42);
/// let population: Vec<Bits> = random_population(30, &mut rng);
/// let config = GaConfig::new(16.0).with_mutation_chance(0.5);
///
/// let mut ga = GeneticAlgorithm::with_rng(population, config, rng).unwrap();
/// let result = ga.run().unwrap();
/// assert!(result.best_fitness <= 16.0);
/// assert_eq!(ga.population().len(), 30);
/// ```
#[derive(Debug)]
pub struct GeneticAlgorithm<C: Chromosome, R: Rng = StdRng> {
    population: Vec<C>,
    config: GaConfig,
    generation: usize,
    rng: R,
}

impl<C: Chromosome> GeneticAlgorithm<C, StdRng> {
    /// Creates an engine whose generator is seeded from `config.seed`, or
    /// from OS entropy when no seed is set.
    ///
    /// # Errors
    /// See [`with_rng`](Self::with_rng).
    pub fn new(initial_population: Vec<C>, config: GaConfig) -> Result<Self, GaError> {
        let rng = rng_from(config.seed);
        Self::with_rng(initial_population, config, rng)
    }
}

impl<C: Chromosome, R: Rng> GeneticAlgorithm<C, R> {
    /// Creates an engine that draws all randomness from `rng`.
    ///
    /// # Errors
    /// - [`GaError::EmptyPopulation`] if `initial_population` is empty
    /// - [`GaError::Config`] if `config` fails [`GaConfig::validate`]
    pub fn with_rng(initial_population: Vec<C>, config: GaConfig, rng: R) -> Result<Self, GaError> {
        config.validate()?;
        if initial_population.is_empty() {
            return Err(GaError::EmptyPopulation);
        }

        Ok(Self {
            population: initial_population,
            config,
            generation: 0,
            rng,
        })
    }

    /// The current population.
    pub fn population(&self) -> &[C] {
        &self.population
    }

    /// Number of completed reproduction cycles.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The run configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Evolves the population until convergence or exhaustion.
    ///
    /// The best chromosome is a running maximum: it is replaced only by a
    /// strictly fitter one, so it never regresses even when a generation's
    /// peak does. The threshold is checked before every reproduction cycle
    /// and once more after the last one.
    ///
    /// Calling `run` again continues from the current population and
    /// generation counter.
    ///
    /// # Errors
    /// Returns [`GaError::Roulette`] when roulette selection meets a negative
    /// or all-zero fitness snapshot.
    #[instrument(
        level = "info",
        skip(self),
        fields(
            population_size = self.population.len(),
            threshold = self.config.threshold,
            max_generations = self.config.max_generations,
            selection = ?self.config.selection,
        )
    )]
    pub fn run(&mut self) -> Result<GaResult<C>, GaError> {
        let mut fitnesses = evaluate(&self.population, self.config.parallel);
        let idx = best_in(&fitnesses);
        let mut best = self.population[idx].clone();
        let mut best_fitness = fitnesses[idx];
        let mut history = Vec::new();

        loop {
            let stats = GenerationStats {
                generation: self.generation,
                best_fitness,
                mean_fitness: mean(&fitnesses),
            };
            history.push(stats);

            if best_fitness >= self.config.threshold {
                debug!(generation = self.generation, best_fitness, "converged");
                return Ok(self.finish(best, best_fitness, Termination::Converged, history));
            }
            if self.generation >= self.config.max_generations {
                debug!(generation = self.generation, best_fitness, "generation budget exhausted");
                return Ok(self.finish(best, best_fitness, Termination::Exhausted, history));
            }

            info!(
                generation = stats.generation,
                best_fitness = stats.best_fitness,
                mean_fitness = stats.mean_fitness,
                "generation"
            );

            self.reproduce_and_replace(&fitnesses)?;
            fitnesses = evaluate(&self.population, self.config.parallel);

            let idx = best_in(&fitnesses);
            if fitnesses[idx] > best_fitness {
                best = self.population[idx].clone();
                best_fitness = fitnesses[idx];
            }

            self.generation += 1;
        }
    }

    fn finish(
        &self,
        best: C,
        best_fitness: f64,
        termination: Termination,
        history: Vec<GenerationStats>,
    ) -> GaResult<C> {
        GaResult {
            best,
            best_fitness,
            generations: self.generation,
            termination,
            history,
        }
    }

    /// Builds the next population of the same size and swaps it in.
    ///
    /// Each slot is filled by crossover (both children) or by replicating one
    /// parent; every new candidate then gets its own mutation roll.
    /// `fitnesses` is the snapshot of the current population. The old
    /// population stays untouched until the new one is complete.
    #[instrument(level = "debug", skip(self, fitnesses), fields(generation = self.generation))]
    fn reproduce_and_replace(&mut self, fitnesses: &[f64]) -> Result<(), GaError> {
        let n = self.population.len();
        let mutation_chance = self.config.mutation_chance;
        let selector = self.config.selection.selector(fitnesses)?;
        let mut next = Vec::with_capacity(n);

        while next.len() < n {
            if self.rng.random_range(0.0..1.0) < self.config.crossover_chance {
                let (a, b) = selector.pick_pair(&mut self.rng);
                let (child1, child2) =
                    self.population[a].crossover(&self.population[b], &mut self.rng);
                next.push(maybe_mutate(child1, mutation_chance, &mut self.rng));
                // surplus second child is dropped once the population is full
                if next.len() < n {
                    next.push(maybe_mutate(child2, mutation_chance, &mut self.rng));
                }
            } else {
                let i = selector.pick_one(&mut self.rng);
                let copy = self.population[i].clone();
                next.push(maybe_mutate(copy, mutation_chance, &mut self.rng));
            }
        }

        self.population = next;
        Ok(())
    }
}

/// Replaces `candidate` with a mutant of itself with probability `chance`.
fn maybe_mutate<C: Chromosome, R: Rng + ?Sized>(candidate: C, chance: f64, rng: &mut R) -> C {
    if rng.random_range(0.0..1.0) < chance {
        candidate.mutate(rng)
    } else {
        candidate
    }
}

/// Fitness of every population member, in population order.
#[cfg(feature = "parallel")]
fn evaluate<C: Chromosome>(population: &[C], parallel: bool) -> Vec<f64> {
    use rayon::prelude::*;

    if parallel {
        population.par_iter().map(|c| c.fitness()).collect()
    } else {
        population.iter().map(|c| c.fitness()).collect()
    }
}

/// Fitness of every population member, in population order.
#[cfg(not(feature = "parallel"))]
fn evaluate<C: Chromosome>(population: &[C], _parallel: bool) -> Vec<f64> {
    population.iter().map(|c| c.fitness()).collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

// ============================================================================
// Tests
// ============================================================================
