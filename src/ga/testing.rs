//! Chromosome fixtures shared by the GA tests.

use super::operators::{block_swap_crossover, swap_within};
use super::Chromosome;
use rand::seq::SliceRandom;
use rand::Rng;

/// Two integers scored by `6x - x^2 + 4y - y^2` (maximum 13 at x=3, y=2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub x: i64,
    pub y: i64,
}

impl Equation {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Chromosome for Equation {
    fn fitness(&self) -> f64 {
        (6 * self.x - self.x * self.x + 4 * self.y - self.y * self.y) as f64
    }

    fn random_instance<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random_range(0..100), rng.random_range(0..100))
    }

    fn crossover<R: Rng + ?Sized>(&self, other: &Self, _rng: &mut R) -> (Self, Self) {
        (Self::new(self.x, other.y), Self::new(other.x, self.y))
    }

    fn mutate<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let step = if rng.random_bool(0.5) { 1 } else { -1 };
        if rng.random_bool(0.5) {
            Self::new(self.x + step, self.y)
        } else {
            Self::new(self.x, self.y + step)
        }
    }
}

const SIDE: usize = 9;

/// A 9x9 grid whose rows are always permutations of 1..=9.
///
/// Fitness counts the rows, columns and 3x3 boxes without duplicates
/// (maximum 27 for a solved grid). This is a per-unit pass/fail count, not a
/// sum of distinct values per line (which would top out at 162).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuGrid {
    cells: Vec<u8>,
}

impl SudokuGrid {
    pub fn rows_are_permutations(&self) -> bool {
        self.cells.chunks(SIDE).all(|row| {
            let mut sorted = row.to_vec();
            sorted.sort_unstable();
            sorted == (1..=SIDE as u8).collect::<Vec<_>>()
        })
    }

    fn all_distinct(&self, indices: impl Iterator<Item = usize>) -> bool {
        let mut seen = [false; SIDE + 1];
        for i in indices {
            let v = self.cells[i] as usize;
            if seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }
}

impl Chromosome for SudokuGrid {
    fn fitness(&self) -> f64 {
        let rows = (0..SIDE)
            .filter(|&r| self.all_distinct((0..SIDE).map(|c| r * SIDE + c)))
            .count();
        let cols = (0..SIDE)
            .filter(|&c| self.all_distinct((0..SIDE).map(|r| r * SIDE + c)))
            .count();
        let boxes = (0..SIDE)
            .filter(|&b| {
                let (top, left) = ((b / 3) * 3, (b % 3) * 3);
                self.all_distinct((0..SIDE).map(|i| (top + i / 3) * SIDE + left + i % 3))
            })
            .count();
        (rows + cols + boxes) as f64
    }

    fn random_instance<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells = Vec::with_capacity(SIDE * SIDE);
        for _ in 0..SIDE {
            let mut row: Vec<u8> = (1..=SIDE as u8).collect();
            row.shuffle(rng);
            cells.extend(row);
        }
        Self { cells }
    }

    fn crossover<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> (Self, Self) {
        let (a, b) = block_swap_crossover(&self.cells, &other.cells, SIDE, rng);
        (Self { cells: a }, Self { cells: b })
    }

    fn mutate<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let row = rng.random_range(0..SIDE);
        let mut cells = self.cells.clone();
        swap_within(&mut cells, row * SIDE..(row + 1) * SIDE, rng);
        Self { cells }
    }
}

/// Scalar chromosome whose mutation always loses one unit of fitness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decaying(pub f64);

impl Chromosome for Decaying {
    fn fitness(&self) -> f64 {
        self.0
    }

    fn random_instance<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Decaying(rng.random_range(0.0..10.0))
    }

    fn crossover<R: Rng + ?Sized>(&self, other: &Self, _rng: &mut R) -> (Self, Self) {
        (*self, *other)
    }

    fn mutate<R: Rng + ?Sized>(&self, _rng: &mut R) -> Self {
        Decaying(self.0 - 1.0)
    }
}

/// Chromosome whose crossover always panics.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragile;

impl Chromosome for Fragile {
    fn fitness(&self) -> f64 {
        0.0
    }

    fn random_instance<R: Rng + ?Sized>(_rng: &mut R) -> Self {
        Fragile
    }

    fn crossover<R: Rng + ?Sized>(&self, _other: &Self, _rng: &mut R) -> (Self, Self) {
        panic!("fragile crossover");
    }

    fn mutate<R: Rng + ?Sized>(&self, _rng: &mut R) -> Self {
        Fragile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn solved_grid() -> SudokuGrid {
        let mut cells = Vec::with_capacity(81);
        for r in 0..SIDE {
            for c in 0..SIDE {
                cells.push(((r * 3 + r / 3 + c) % SIDE) as u8 + 1);
            }
        }
        SudokuGrid { cells }
    }

    #[test]
    fn test_equation_optimum() {
        assert_eq!(Equation::new(3, 2).fitness(), 13.0);
        assert!(Equation::new(4, 2).fitness() < 13.0);
        assert!(Equation::new(3, 3).fitness() < 13.0);
    }

    #[test]
    fn test_equation_crossover_swaps_y() {
        let mut rng = create_rng(0);
        let (a, b) = Equation::new(1, 2).crossover(&Equation::new(3, 4), &mut rng);
        assert_eq!(a, Equation::new(1, 4));
        assert_eq!(b, Equation::new(3, 2));
    }

    #[test]
    fn test_equation_mutate_moves_one_step() {
        let mut rng = create_rng(0);
        let original = Equation::new(10, 10);
        for _ in 0..50 {
            let m = original.mutate(&mut rng);
            assert_eq!((m.x - 10).abs() + (m.y - 10).abs(), 1);
        }
    }

    #[test]
    fn test_solved_grid_scores_27() {
        let grid = solved_grid();
        assert!(grid.rows_are_permutations());
        assert_eq!(grid.fitness(), 27.0);
    }

    #[test]
    fn test_random_grid_rows_always_count() {
        let mut rng = create_rng(3);
        for _ in 0..20 {
            let grid = SudokuGrid::random_instance(&mut rng);
            assert!(grid.rows_are_permutations());
            assert!(grid.fitness() >= 9.0);
        }
    }

    #[test]
    fn test_grid_mutation_leaves_original() {
        let mut rng = create_rng(4);
        let grid = solved_grid();
        let mutated = grid.mutate(&mut rng);
        assert_eq!(grid, solved_grid());
        assert_ne!(mutated, grid);
        assert!(mutated.rows_are_permutations());
    }

    proptest! {
        #[test]
        fn prop_grid_crossover_conserves_values(seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let a = SudokuGrid::random_instance(&mut rng);
            let b = SudokuGrid::random_instance(&mut rng);

            let (c, d) = a.crossover(&b, &mut rng);

            let total = |g: &SudokuGrid| g.cells.iter().map(|&v| v as u32).sum::<u32>();
            prop_assert_eq!(total(&a) + total(&b), total(&c) + total(&d));
            prop_assert!(c.rows_are_permutations());
            prop_assert!(d.rows_are_permutations());
        }
    }
}
