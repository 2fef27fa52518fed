//! Core trait definitions for the GA engine.
//!
//! [`Chromosome`] is the contract between the generic engine and a
//! problem-specific encoding. Any type that can score itself, be generated at
//! random, recombine and mutate can be evolved, without sharing a base type
//! with other encodings.

use rand::Rng;
use std::cmp::Ordering;

/// A candidate solution carrying its own genetic operators.
///
/// Fitness is **maximized**: higher values are better.
///
/// # Contract
///
/// - [`fitness`](Chromosome::fitness) is a pure function of `self`. The
///   engine may call it any number of times and expects the same answer.
/// - [`crossover`](Chromosome::crossover) and [`mutate`](Chromosome::mutate)
///   return new values and never modify their inputs. They must keep whatever
///   structural invariant the encoding relies on; the engine does not check.
///
/// # Implementing
///
/// ```
/// use rand::Rng;
/// use u_genetic::ga::Chromosome;
///
/// #[derive(Clone, Debug)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Chromosome for Point {
///     fn fitness(&self) -> f64 {
///         -((self.x * self.x + self.y * self.y) as f64)
///     }
///
///     fn random_instance<R: Rng + ?Sized>(rng: &mut R) -> Self {
///         Point { x: rng.random_range(-50..50), y: rng.random_range(-50..50) }
///     }
///
///     fn crossover<R: Rng + ?Sized>(&self, other: &Self, _rng: &mut R) -> (Self, Self) {
///         (
///             Point { x: self.x, y: other.y },
///             Point { x: other.x, y: self.y },
///         )
///     }
///
///     fn mutate<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
///         let step = if rng.random_bool(0.5) { 1 } else { -1 };
///         Point { x: self.x + step, ..self.clone() }
///     }
/// }
/// ```
pub trait Chromosome: Clone + Send + Sync {
    /// Scalar quality of this candidate. Higher is better.
    fn fitness(&self) -> f64;

    /// Produces a uniformly random valid candidate.
    ///
    /// Used to seed populations; the engine itself never calls it.
    fn random_instance<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Recombines `self` with `other` into exactly two offspring.
    fn crossover<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> (Self, Self);

    /// Returns a copy of `self` with one small random perturbation.
    fn mutate<R: Rng + ?Sized>(&self, rng: &mut R) -> Self;
}

/// Creates `size` random chromosomes.
pub fn random_population<C: Chromosome, R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<C> {
    (0..size).map(|_| C::random_instance(rng)).collect()
}

/// Total order on fitness values. NaN sorts below every number.
pub(crate) fn compare_fitness(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Index of the highest fitness. Ties go to the earliest index.
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub(crate) fn best_in(fitnesses: &[f64]) -> usize {
    assert!(!fitnesses.is_empty(), "cannot pick best of empty population");

    let mut best = 0;
    for (i, &f) in fitnesses.iter().enumerate().skip(1) {
        if compare_fitness(f, fitnesses[best]) == Ordering::Greater {
            best = i;
        }
    }
    best
}
