use crate::board::Board;
use crate::checker::{BOX, SIZE};

/// True iff the non-zero entries of `values` are pairwise distinct.
pub fn check_unique(values: &[u8]) -> bool {
    let mut seen = [false; 10];
    for &v in values {
        if v != 0 {
            if seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
    }
    true
}

/// True iff every cell holds a value.
pub fn is_full(board: &Board) -> bool {
    board.iter().flatten().all(|cell| cell.value().is_some())
}

/// True iff no row, column, or box contains a duplicate value. Empty
/// cells are ignored, so an unfinished board passes as long as nothing
/// placed so far collides.
pub fn is_consistent(board: &Board) -> bool {
    for row in board {
        let values: Vec<u8> = row.iter().map(|c| c.value().unwrap_or(0)).collect();
        if !check_unique(&values) {
            return false;
        }
    }
    for col in 0..SIZE {
        let values: Vec<u8> = (0..SIZE)
            .map(|row| board[row][col].value().unwrap_or(0))
            .collect();
        if !check_unique(&values) {
            return false;
        }
    }
    for box_row in 0..BOX {
        for box_col in 0..BOX {
            let mut values = Vec::with_capacity(SIZE);
            for r in box_row * BOX..(box_row + 1) * BOX {
                for c in box_col * BOX..(box_col + 1) * BOX {
                    values.push(board[r][c].value().unwrap_or(0));
                }
            }
            if !check_unique(&values) {
                return false;
            }
        }
    }
    true
}

/// Win condition: the board is full and free of duplicates.
pub fn is_solved(board: &Board) -> bool {
    is_full(board) && is_consistent(board)
}

/// Does the value at (row, col) collide with any peer in its row,
/// column, or box?
pub fn has_conflict(board: &Board, row: usize, col: usize) -> bool {
    let Some(val) = board[row][col].value() else {
        return false;
    };

    for c in 0..SIZE {
        if c != col && board[row][c].value() == Some(val) {
            return true;
        }
    }
    for r in 0..SIZE {
        if r != row && board[r][col].value() == Some(val) {
            return true;
        }
    }
    let box_r = (row / BOX) * BOX;
    let box_c = (col / BOX) * BOX;
    for r in box_r..box_r + BOX {
        for c in box_c..box_c + BOX {
            if (r != row || c != col) && board[r][c].value() == Some(val) {
                return true;
            }
        }
    }
    false
}

/// Positions of every cell whose value collides with a peer.
pub fn get_all_conflicts(board: &Board) -> Vec<(usize, usize)> {
    let mut conflicts = Vec::new();
    for r in 0..SIZE {
        for c in 0..SIZE {
            if board[r][c].value().is_some() && has_conflict(board, r, c) {
                conflicts.push((r, c));
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn board_with(cells: &[(usize, usize, Cell)]) -> Board {
        let mut board = [[Cell::Empty; 9]; 9];
        for &(r, c, cell) in cells {
            board[r][c] = cell;
        }
        board
    }

    #[test]
    fn unique_ignores_zeros() {
        assert!(check_unique(&[0, 0, 0, 0]));
        assert!(check_unique(&[1, 0, 2, 0, 3]));
        assert!(!check_unique(&[1, 0, 2, 0, 1]));
    }

    #[test]
    fn empty_board_is_consistent_but_not_full() {
        let board = board_with(&[]);
        assert!(is_consistent(&board));
        assert!(!is_full(&board));
        assert!(!is_solved(&board));
    }

    #[test]
    fn consistency_is_idempotent() {
        let board = board_with(&[(0, 0, Cell::Given(5)), (3, 3, Cell::Filled(5))]);
        assert_eq!(is_consistent(&board), is_consistent(&board));
    }

    #[test]
    fn row_duplicate_fails() {
        // Two fives in row 0.
        let board = board_with(&[(0, 0, Cell::Filled(5)), (0, 1, Cell::Filled(5))]);
        assert!(!is_consistent(&board));
    }

    #[test]
    fn col_duplicate_fails() {
        let board = board_with(&[(1, 6, Cell::Given(2)), (8, 6, Cell::Filled(2))]);
        assert!(!is_consistent(&board));
    }

    #[test]
    fn box_duplicate_fails() {
        // (0, 0) and (2, 2) share the top-left box but no row or column.
        let board = board_with(&[(0, 0, Cell::Filled(9)), (2, 2, Cell::Filled(9))]);
        assert!(!is_consistent(&board));
    }

    #[test]
    fn given_and_filled_values_collide_alike() {
        let board = board_with(&[(4, 0, Cell::Given(7)), (4, 8, Cell::Filled(7))]);
        assert!(!is_consistent(&board));
    }

    #[test]
    fn conflict_positions_are_reported_pairwise() {
        let board = board_with(&[(0, 0, Cell::Filled(5)), (0, 1, Cell::Filled(5))]);
        assert!(has_conflict(&board, 0, 0));
        assert!(has_conflict(&board, 0, 1));
        assert!(!has_conflict(&board, 0, 2));
        assert_eq!(get_all_conflicts(&board), vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn full_valid_board_is_solved() {
        let solution: [[u8; 9]; 9] = [
            [5, 3, 4, 6, 7, 8, 9, 1, 2],
            [6, 7, 2, 1, 9, 5, 3, 4, 8],
            [1, 9, 8, 3, 4, 2, 5, 6, 7],
            [8, 5, 9, 7, 6, 1, 4, 2, 3],
            [4, 2, 6, 8, 5, 3, 7, 9, 1],
            [7, 1, 3, 9, 2, 4, 8, 5, 6],
            [9, 6, 1, 5, 3, 7, 2, 8, 4],
            [2, 8, 7, 4, 1, 9, 6, 3, 5],
            [3, 4, 5, 2, 8, 6, 1, 7, 9],
        ];
        let mut board = [[Cell::Empty; 9]; 9];
        for r in 0..9 {
            for c in 0..9 {
                board[r][c] = Cell::Given(solution[r][c]);
            }
        }
        assert!(is_solved(&board));
    }
}
