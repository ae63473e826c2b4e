use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// A clue from the generated puzzle; immutable during play.
    Given(u8),
    /// A value committed by the player.
    Filled(u8),
    Empty,
}

impl Cell {
    pub fn value(&self) -> Option<u8> {
        match self {
            Cell::Given(v) | Cell::Filled(v) => Some(*v),
            Cell::Empty => None,
        }
    }

    pub fn is_given(&self) -> bool {
        matches!(self, Cell::Given(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

pub type Board = [[Cell; 9]; 9];
pub type SolutionGrid = [[u8; 9]; 9];

/// The board as played: committed cells, pencil sketches, and the cursor.
///
/// The selection is an index pair rather than a reference into cell
/// storage, so "at most one cell selected" holds structurally. A sketch
/// is a single pencil-mark digit (0 = none) and is mutually exclusive
/// with a committed value: committing clears the sketch.
#[derive(Clone, Debug)]
pub struct PlayBoard {
    cells: Board,
    puzzle: Board,
    sketches: [[u8; 9]; 9],
    selected: Option<(usize, usize)>,
}

impl PlayBoard {
    /// Wrap a freshly generated puzzle; the snapshot is kept for `reset`.
    pub fn new(puzzle: Board) -> Self {
        Self {
            cells: puzzle,
            puzzle,
            sketches: [[0; 9]; 9],
            selected: None,
        }
    }

    pub fn cells(&self) -> &Board {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn sketch_at(&self, row: usize, col: usize) -> Option<u8> {
        match self.sketches[row][col] {
            0 => None,
            v => Some(v),
        }
    }

    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    pub fn select(&mut self, row: usize, col: usize) {
        assert!(row < 9 && col < 9, "selection out of range: ({row}, {col})");
        self.selected = Some((row, col));
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move the cursor, wrapping around the board edges.
    pub fn move_selection(&mut self, dr: i32, dc: i32) {
        let (row, col) = self.selected.unwrap_or((4, 4));
        let row = (row as i32 + dr).rem_euclid(9) as usize;
        let col = (col as i32 + dc).rem_euclid(9) as usize;
        self.selected = Some((row, col));
    }

    /// Pencil a candidate into the selected cell. Ignored for givens and
    /// cells that already hold a committed value.
    pub fn sketch(&mut self, value: u8) {
        assert!((1..=9).contains(&value), "sketch value out of range: {value}");
        if let Some((row, col)) = self.selected {
            if self.cells[row][col].is_empty() {
                self.sketches[row][col] = value;
            }
        }
    }

    /// Commit a value into the selected cell, clearing its sketch.
    pub fn place(&mut self, value: u8) {
        assert!((1..=9).contains(&value), "placed value out of range: {value}");
        if let Some((row, col)) = self.selected {
            if !self.cells[row][col].is_given() {
                self.cells[row][col] = Cell::Filled(value);
                self.sketches[row][col] = 0;
            }
        }
    }

    /// Commit the selected cell's sketch as its value, if it has one.
    pub fn place_sketched(&mut self) {
        if let Some((row, col)) = self.selected {
            let sketch = self.sketches[row][col];
            if sketch != 0 && self.cells[row][col].is_empty() {
                self.cells[row][col] = Cell::Filled(sketch);
                self.sketches[row][col] = 0;
            }
        }
    }

    /// Erase the selected cell: a committed value first, else the sketch.
    pub fn clear(&mut self) {
        if let Some((row, col)) = self.selected {
            match self.cells[row][col] {
                Cell::Filled(_) => self.cells[row][col] = Cell::Empty,
                Cell::Empty => self.sketches[row][col] = 0,
                Cell::Given(_) => {}
            }
        }
    }

    /// Restore the initial puzzle, discarding all player input.
    pub fn reset(&mut self) {
        self.cells = self.puzzle;
        self.sketches = [[0; 9]; 9];
    }

    pub fn is_full(&self) -> bool {
        crate::validation::is_full(&self.cells)
    }
}
