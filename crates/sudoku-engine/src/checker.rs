//! Pure placement predicates over a raw digit grid.
//!
//! Row, column, and box are scanned independently; arguments outside the
//! grid (row/col >= 9) or digit range (1..=9) are caller contract
//! violations and panic rather than clamp.

use crate::board::SolutionGrid;

pub const SIZE: usize = 9;
pub const BOX: usize = 3;

/// True iff `num` does not already occur anywhere in `row`.
pub fn valid_in_row(grid: &SolutionGrid, row: usize, num: u8) -> bool {
    assert!(row < SIZE, "row out of range: {row}");
    assert!((1..=9).contains(&num), "digit out of range: {num}");
    grid[row].iter().all(|&v| v != num)
}

/// True iff `num` does not occur in `col` across all rows.
pub fn valid_in_col(grid: &SolutionGrid, col: usize, num: u8) -> bool {
    assert!(col < SIZE, "col out of range: {col}");
    assert!((1..=9).contains(&num), "digit out of range: {num}");
    grid.iter().all(|row| row[col] != num)
}

/// True iff `num` does not occur in the box whose top-left cell is
/// `(box_row * 3, box_col * 3)`.
pub fn valid_in_box(grid: &SolutionGrid, box_row: usize, box_col: usize, num: u8) -> bool {
    assert!(box_row < BOX && box_col < BOX, "box out of range: ({box_row}, {box_col})");
    assert!((1..=9).contains(&num), "digit out of range: {num}");
    let row_start = box_row * BOX;
    let col_start = box_col * BOX;
    for r in row_start..row_start + BOX {
        for c in col_start..col_start + BOX {
            if grid[r][c] == num {
                return false;
            }
        }
    }
    true
}

/// True iff placing `num` at `(row, col)` violates no row, column, or
/// box constraint.
pub fn is_valid_placement(grid: &SolutionGrid, row: usize, col: usize, num: u8) -> bool {
    valid_in_row(grid, row, num)
        && valid_in_col(grid, col, num)
        && valid_in_box(grid, row / BOX, col / BOX, num)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[(usize, usize, u8)]) -> SolutionGrid {
        let mut grid = [[0u8; 9]; 9];
        for &(r, c, v) in cells {
            grid[r][c] = v;
        }
        grid
    }

    #[test]
    fn detects_row_duplicate() {
        let grid = grid_with(&[(4, 7, 5)]);
        assert!(!valid_in_row(&grid, 4, 5));
        assert!(valid_in_row(&grid, 4, 6));
        assert!(valid_in_row(&grid, 3, 5));
    }

    #[test]
    fn detects_col_duplicate() {
        let grid = grid_with(&[(8, 2, 9)]);
        assert!(!valid_in_col(&grid, 2, 9));
        assert!(valid_in_col(&grid, 2, 1));
        assert!(valid_in_col(&grid, 3, 9));
    }

    #[test]
    fn detects_box_duplicate() {
        // (4, 4) lies in the centre box (1, 1).
        let grid = grid_with(&[(4, 4, 3)]);
        assert!(!valid_in_box(&grid, 1, 1, 3));
        assert!(valid_in_box(&grid, 0, 0, 3));
        assert!(valid_in_box(&grid, 1, 1, 4));
    }

    #[test]
    fn placement_conjoins_all_three() {
        let grid = grid_with(&[(0, 5, 7), (6, 1, 7), (2, 2, 7)]);
        assert!(!is_valid_placement(&grid, 0, 1, 7)); // row conflict
        assert!(!is_valid_placement(&grid, 5, 1, 7)); // col conflict
        assert!(!is_valid_placement(&grid, 1, 1, 7)); // box conflict
        assert!(is_valid_placement(&grid, 4, 4, 7));
    }

    #[test]
    fn invariant_under_box_preserving_swap() {
        // Swapping two rows inside one band (and two cols inside one
        // stack) keeps every constraint set intact, so the predicate
        // must agree on the correspondingly mapped positions.
        let grid = grid_with(&[(0, 0, 1), (1, 4, 2), (2, 8, 3), (5, 0, 4), (8, 3, 5)]);

        let mut swapped = grid;
        swapped.swap(0, 1); // rows 0 and 1 share the top band
        for row in &mut swapped {
            row.swap(3, 4); // cols 3 and 4 share the middle stack
        }

        let map_row = |r: usize| match r {
            0 => 1,
            1 => 0,
            r => r,
        };
        let map_col = |c: usize| match c {
            3 => 4,
            4 => 3,
            c => c,
        };

        for row in 0..9 {
            for col in 0..9 {
                if grid[row][col] != 0 {
                    continue;
                }
                for num in 1..=9 {
                    assert_eq!(
                        is_valid_placement(&grid, row, col, num),
                        is_valid_placement(&swapped, map_row(row), map_col(col), num),
                        "disagreement at ({row}, {col}) num {num}"
                    );
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "digit out of range")]
    fn rejects_zero_digit() {
        let grid = [[0u8; 9]; 9];
        valid_in_row(&grid, 0, 0);
    }

    #[test]
    #[should_panic(expected = "row out of range")]
    fn rejects_out_of_range_row() {
        let grid = [[0u8; 9]; 9];
        valid_in_row(&grid, 9, 1);
    }
}
