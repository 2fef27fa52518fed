//! Selection strategies for the GA.
//!
//! Selection picks parents from the current population, biased toward higher
//! fitness. Both strategies sample **with replacement**, so the same
//! chromosome may be picked twice for one pair.
//!
//! A [`Selection`] is turned into a [`Selector`] once per generation from the
//! population's fitness snapshot; the selector then serves every draw of that
//! generation.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::compare_fitness;
use rand::distr::weighted::{self, WeightedIndex};
use rand::distr::Distribution;
use rand::Rng;
use std::cmp::Ordering;
use tracing::instrument;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// ```
/// use u_genetic::ga::Selection;
///
/// assert_eq!(Selection::default(), Selection::Tournament);
/// assert_eq!(Selection::tournament_size(20), 10);
/// assert_eq!(Selection::tournament_size(3), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate selection using raw fitness as weights.
    ///
    /// Fitness is not shifted or clamped. Every chromosome must report a
    /// non-negative fitness and at least one must be positive, otherwise the
    /// selector cannot be built.
    Roulette,

    /// Sample `max(N / 2, 2)` chromosomes uniformly and keep the fittest.
    ///
    /// Works with any sign of fitness and gives strong selection pressure.
    #[default]
    Tournament,
}

impl Selection {
    /// Number of chromosomes drawn per tournament for a population of `n`.
    pub fn tournament_size(n: usize) -> usize {
        (n / 2).max(2)
    }

    /// Prepares a selector over one generation's fitness snapshot.
    ///
    /// `fitnesses[i]` is the fitness of population member `i`.
    ///
    /// # Errors
    /// For [`Selection::Roulette`], returns the weighting error when a
    /// fitness is negative or NaN, or when all fitnesses are zero.
    ///
    /// # Panics
    /// Panics if `fitnesses` is empty.
    #[instrument(level = "debug", skip(self, fitnesses), fields(strategy = ?self, population_size = fitnesses.len()))]
    pub fn selector<'a>(&self, fitnesses: &'a [f64]) -> Result<Selector<'a>, weighted::Error> {
        assert!(
            !fitnesses.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Roulette => Ok(Selector::Roulette(WeightedIndex::new(
                fitnesses.iter().copied(),
            )?)),
            Selection::Tournament => Ok(Selector::Tournament {
                fitnesses,
                size: Self::tournament_size(fitnesses.len()),
            }),
        }
    }
}

/// A selection strategy bound to one generation's fitness values.
#[derive(Debug, Clone)]
pub enum Selector<'a> {
    /// Cumulative weight table over the population.
    Roulette(WeightedIndex<f64>),

    /// Fitness snapshot and number of draws per tournament.
    Tournament { fitnesses: &'a [f64], size: usize },
}

impl Selector<'_> {
    /// Picks a single parent index.
    pub fn pick_one<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self {
            Selector::Roulette(wheel) => wheel.sample(rng),
            Selector::Tournament { fitnesses, size } => tournament(fitnesses, *size, rng).0,
        }
    }

    /// Picks two parent indices.
    ///
    /// Roulette spins twice independently. Tournament returns the two
    /// fittest entries of a single sample.
    pub fn pick_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> (usize, usize) {
        match self {
            Selector::Roulette(wheel) => (wheel.sample(rng), wheel.sample(rng)),
            Selector::Tournament { fitnesses, size } => tournament(fitnesses, *size, rng),
        }
    }
}

/// Draws `k` indices with replacement and returns the best two, best first.
///
/// Ties keep draw order.
fn tournament<R: Rng + ?Sized>(fitnesses: &[f64], k: usize, rng: &mut R) -> (usize, usize) {
    let n = fitnesses.len();
    let k = k.max(2);

    let mut first = rng.random_range(0..n);
    let mut second = rng.random_range(0..n);
    if compare_fitness(fitnesses[second], fitnesses[first]) == Ordering::Greater {
        std::mem::swap(&mut first, &mut second);
    }

    for _ in 2..k {
        let idx = rng.random_range(0..n);
        if compare_fitness(fitnesses[idx], fitnesses[first]) == Ordering::Greater {
            second = first;
            first = idx;
        } else if compare_fitness(fitnesses[idx], fitnesses[second]) == Ordering::Greater {
            second = idx;
        }
    }

    (first, second)
}
