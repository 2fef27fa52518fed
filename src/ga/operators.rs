//! Generic gene-slice operators.
//!
//! Building blocks for [`Chromosome`](super::Chromosome) implementations whose
//! genes live in a slice. All functions are domain-agnostic and work on any
//! `Clone` gene type.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: exchange tails after a random cut point
//! - [`block_swap_crossover`]: exchange whole aligned blocks with probability
//!   1/2 each. If every block of both parents is a permutation, so is every
//!   block of both children.
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: exchange two random positions (may coincide)
//! - [`swap_within`]: exchange two **distinct** positions inside a range

use rand::seq::index;
use rand::Rng;
use std::ops::Range;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Picks a cut point in `1..n` and swaps the tails, so each child keeps at
/// least one gene from its own parent.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<T: Clone, R: Rng + ?Sized>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let point = rng.random_range(1..n);
    let mut child1 = parent1[..point].to_vec();
    child1.extend_from_slice(&parent2[point..]);
    let mut child2 = parent2[..point].to_vec();
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

/// Block swap crossover.
///
/// Splits both parents into consecutive blocks of `block_len` genes and, for
/// each block independently, swaps it between the children with probability
/// 1/2. A trailing partial block is treated like any other block.
///
/// # Panics
/// Panics if parents have different lengths or `block_len` is zero.
pub fn block_swap_crossover<T: Clone, R: Rng + ?Sized>(
    parent1: &[T],
    parent2: &[T],
    block_len: usize,
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(block_len > 0, "block_len must be positive");

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();

    for (block1, block2) in child1
        .chunks_mut(block_len)
        .zip(child2.chunks_mut(block_len))
    {
        if rng.random_bool(0.5) {
            block1.swap_with_slice(block2);
        }
    }

    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<T, R: Rng + ?Sized>(genes: &mut [T], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    genes.swap(i, j);
}

/// Swaps two distinct positions chosen uniformly inside `range`.
///
/// Does nothing when the range holds fewer than two genes.
///
/// # Panics
/// Panics if `range` extends past the end of `genes`.
pub fn swap_within<T, R: Rng + ?Sized>(genes: &mut [T], range: Range<usize>, rng: &mut R) {
    let segment = &mut genes[range];
    if segment.len() < 2 {
        return;
    }
    let picked = index::sample(rng, segment.len(), 2);
    segment.swap(picked.index(0), picked.index(1));
}

// ============================================================================
// Tests
// ============================================================================
