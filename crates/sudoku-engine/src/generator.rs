//! Puzzle construction: seed the three diagonal boxes with random
//! permutations, complete the grid by backtracking, then erase a
//! difficulty-dependent number of cells.
//!
//! The erasure step is purely random and does not verify that the puzzle
//! keeps a unique solution; callers get some valid full board's cells,
//! nothing more.

use std::fmt;

use rand::RngExt;
use rand::seq::SliceRandom;

use crate::board::{Board, Cell, SolutionGrid};
use crate::checker::{BOX, SIZE, is_valid_placement};
use crate::difficulty::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// Removal count must satisfy 0 <= count < 81; anything larger would
    /// retry forever against an all-zero board.
    RemovalBudget(usize),
    /// Backtracking exhausted every digit at the top level. Unreachable
    /// for a validly seeded 9x9 grid; means the diagonal seed was
    /// corrupted.
    Unfillable,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::RemovalBudget(count) => {
                write!(f, "removal count {count} out of range (must be < 81)")
            }
            GenerateError::Unfillable => {
                write!(f, "backtracking failed to complete a seeded grid")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Fill one box with a uniformly random permutation of 1-9.
fn fill_box<R: RngExt + ?Sized>(
    grid: &mut SolutionGrid,
    row_start: usize,
    col_start: usize,
    rng: &mut R,
) {
    let mut nums: Vec<u8> = (1..=9).collect();
    nums.shuffle(rng);
    for r in 0..BOX {
        for c in 0..BOX {
            grid[row_start + r][col_start + c] = nums[r * BOX + c];
        }
    }
}

/// Seed the three boxes on the main diagonal. They share no row, column,
/// or box, so any permutations are mutually consistent and no validity
/// checks are needed.
fn fill_diagonal<R: RngExt + ?Sized>(grid: &mut SolutionGrid, rng: &mut R) {
    for band in 0..BOX {
        fill_box(grid, band * BOX, band * BOX, rng);
    }
}

/// Complete the grid by exhaustive backtracking over the cells outside
/// the diagonal boxes, row-major with column jumps over the seeded
/// boxes. Digits are tried 1-9 ascending; a dead end resets the cell and
/// reports failure to the parent call.
fn fill_remaining(grid: &mut SolutionGrid, mut row: usize, mut col: usize) -> bool {
    if col >= SIZE && row < SIZE - 1 {
        row += 1;
        col = 0;
    }
    if row >= SIZE && col >= SIZE {
        return true;
    }
    if row < BOX {
        if col < BOX {
            col = BOX;
        }
    } else if row < SIZE - BOX {
        if col == (row / BOX) * BOX {
            col += BOX;
        }
    } else if col == SIZE - BOX {
        // Bottom band: cols 6-8 are the seeded diagonal box, so the row
        // ends here.
        row += 1;
        col = 0;
        if row >= SIZE {
            return true;
        }
    }

    for num in 1..=9 {
        if is_valid_placement(grid, row, col, num) {
            grid[row][col] = num;
            if fill_remaining(grid, row, col + 1) {
                return true;
            }
            grid[row][col] = 0;
        }
    }
    false
}

/// Build a complete valid solution grid.
fn fill_values<R: RngExt + ?Sized>(rng: &mut R) -> Result<SolutionGrid, GenerateError> {
    let mut grid = [[0u8; 9]; 9];
    fill_diagonal(&mut grid, rng);
    if fill_remaining(&mut grid, 0, BOX) {
        Ok(grid)
    } else {
        Err(GenerateError::Unfillable)
    }
}

/// Erase `count` cells at uniformly random positions, retrying picks
/// that are already empty.
fn remove_cells<R: RngExt + ?Sized>(
    grid: &mut SolutionGrid,
    count: usize,
    rng: &mut R,
) -> Result<(), GenerateError> {
    if count >= SIZE * SIZE {
        return Err(GenerateError::RemovalBudget(count));
    }
    let mut remaining = count;
    while remaining > 0 {
        let row = rng.random_range(0..SIZE);
        let col = rng.random_range(0..SIZE);
        if grid[row][col] != 0 {
            grid[row][col] = 0;
            remaining -= 1;
        }
    }
    Ok(())
}

/// Generate a puzzle with `removed` cells erased, returning the puzzle
/// board (remaining digits as givens) together with its solution.
pub fn generate_with_rng<R: RngExt + ?Sized>(
    removed: usize,
    rng: &mut R,
) -> Result<(Board, SolutionGrid), GenerateError> {
    let solution = fill_values(rng)?;

    let mut puzzle_grid = solution;
    remove_cells(&mut puzzle_grid, removed, rng)?;

    let mut board = [[Cell::Empty; 9]; 9];
    for r in 0..SIZE {
        for c in 0..SIZE {
            if puzzle_grid[r][c] != 0 {
                board[r][c] = Cell::Given(puzzle_grid[r][c]);
            }
        }
    }

    Ok((board, solution))
}

/// Generate a puzzle for the given difficulty using the thread-local RNG.
pub fn generate_puzzle(difficulty: Difficulty) -> Result<(Board, SolutionGrid), GenerateError> {
    generate_with_rng(difficulty.removed_cells(), &mut rand::rng())
}
