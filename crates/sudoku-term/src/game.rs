use std::time::Instant;

use sudoku_engine::generator::generate_puzzle;
use sudoku_engine::validation::{get_all_conflicts, is_consistent};
use sudoku_engine::{Difficulty, GenerateError, PlayBoard, SolutionGrid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Paused,
    Won,
    GameOver,
}

pub struct Game {
    pub play: PlayBoard,
    pub solution: SolutionGrid,
    pub difficulty: Difficulty,
    pub screen: Screen,
    /// Digits pencil in a sketch instead of committing a value.
    pub sketch_mode: bool,
    pub timer_start: Option<Instant>,
    pub elapsed_secs: u64,
    pub paused_elapsed: u64,
    pub conflicts: Vec<(usize, usize)>,
    pub show_conflicts: bool,
    pub show_quit_confirm: bool,
}

impl Game {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            play: PlayBoard::new([[sudoku_engine::Cell::Empty; 9]; 9]),
            solution: [[0u8; 9]; 9],
            difficulty,
            screen: Screen::Menu,
            sketch_mode: false,
            timer_start: None,
            elapsed_secs: 0,
            paused_elapsed: 0,
            conflicts: Vec::new(),
            show_conflicts: false,
            show_quit_confirm: false,
        }
    }

    /// Generate a fresh puzzle and enter play. Generation errors are
    /// precondition violations and propagate to the caller as fatal.
    pub fn start_new_game(&mut self) -> Result<(), GenerateError> {
        let (board, solution) = generate_puzzle(self.difficulty)?;
        self.play = PlayBoard::new(board);
        self.play.select(4, 4);
        self.solution = solution;
        self.screen = Screen::Playing;
        self.sketch_mode = false;
        self.timer_start = Some(Instant::now());
        self.elapsed_secs = 0;
        self.paused_elapsed = 0;
        self.conflicts.clear();
        self.show_conflicts = false;
        self.show_quit_confirm = false;
        Ok(())
    }

    pub fn move_cursor(&mut self, dr: i32, dc: i32) {
        if self.screen == Screen::Playing {
            self.play.move_selection(dr, dc);
        }
    }

    /// Digit input: a sketch in sketch mode, a committed value otherwise.
    pub fn input_digit(&mut self, num: u8) {
        if self.screen != Screen::Playing {
            return;
        }
        if self.sketch_mode {
            self.play.sketch(num);
        } else {
            self.play.place(num);
            self.after_commit();
        }
    }

    /// Commit the selected cell's sketch as its value.
    pub fn commit_sketch(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }
        self.play.place_sketched();
        self.after_commit();
    }

    pub fn erase(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }
        self.play.clear();
        self.conflicts = get_all_conflicts(self.play.cells());
    }

    /// Throw away all player input and return to the initial puzzle.
    pub fn reset_board(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }
        self.play.reset();
        self.conflicts.clear();
        self.show_conflicts = false;
    }

    pub fn toggle_sketch_mode(&mut self) {
        self.sketch_mode = !self.sketch_mode;
    }

    pub fn validate(&mut self) {
        self.show_conflicts = true;
        self.conflicts = get_all_conflicts(self.play.cells());
    }

    /// A committed value may finish the game: a full board wins if it is
    /// consistent and is game over otherwise.
    fn after_commit(&mut self) {
        self.conflicts = get_all_conflicts(self.play.cells());
        if self.play.is_full() {
            self.finish_timer();
            self.screen = if is_consistent(self.play.cells()) {
                Screen::Won
            } else {
                Screen::GameOver
            };
        }
    }

    fn finish_timer(&mut self) {
        if let Some(start) = self.timer_start {
            self.elapsed_secs = self.paused_elapsed + start.elapsed().as_secs();
        }
        self.timer_start = None;
    }

    pub fn toggle_pause(&mut self) {
        match self.screen {
            Screen::Playing => {
                if let Some(start) = self.timer_start {
                    self.paused_elapsed += start.elapsed().as_secs();
                }
                self.timer_start = None;
                self.screen = Screen::Paused;
            }
            Screen::Paused => {
                self.timer_start = Some(Instant::now());
                self.screen = Screen::Playing;
            }
            _ => {}
        }
    }

    pub fn get_elapsed_secs(&self) -> u64 {
        match self.screen {
            Screen::Won | Screen::GameOver => self.elapsed_secs,
            Screen::Paused => self.paused_elapsed,
            Screen::Playing => {
                self.paused_elapsed
                    + self
                        .timer_start
                        .map(|s| s.elapsed().as_secs())
                        .unwrap_or(0)
            }
            Screen::Menu => 0,
        }
    }

    pub fn format_time(&self) -> String {
        let secs = self.get_elapsed_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    pub fn selected_value(&self) -> Option<u8> {
        let (row, col) = self.play.selected()?;
        self.play.cell(row, col).value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_engine::{Board, Cell};

    const SOLUTION: SolutionGrid = [
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

    /// A game one cell away from completion: (8, 8) is the only hole.
    fn near_complete_game() -> Game {
        let mut board: Board = [[Cell::Empty; 9]; 9];
        for r in 0..9 {
            for c in 0..9 {
                board[r][c] = Cell::Given(SOLUTION[r][c]);
            }
        }
        board[8][8] = Cell::Empty;

        let mut game = Game::new(Difficulty::Easy);
        game.play = PlayBoard::new(board);
        game.solution = SOLUTION;
        game.screen = Screen::Playing;
        game.play.select(8, 8);
        game
    }

    #[test]
    fn correct_final_digit_wins() {
        let mut game = near_complete_game();
        game.input_digit(SOLUTION[8][8]);
        assert_eq!(game.screen, Screen::Won);
    }

    #[test]
    fn wrong_final_digit_is_game_over() {
        let mut game = near_complete_game();
        let wrong = if SOLUTION[8][8] == 1 { 2 } else { 1 };
        game.input_digit(wrong);
        assert_eq!(game.screen, Screen::GameOver);
        assert!(!game.conflicts.is_empty());
    }

    #[test]
    fn sketch_mode_does_not_commit() {
        let mut game = near_complete_game();
        game.toggle_sketch_mode();
        game.input_digit(SOLUTION[8][8]);
        assert_eq!(game.screen, Screen::Playing);
        assert_eq!(game.play.cell(8, 8), Cell::Empty);
        assert_eq!(game.play.sketch_at(8, 8), Some(SOLUTION[8][8]));

        game.commit_sketch();
        assert_eq!(game.screen, Screen::Won);
        assert_eq!(game.play.cell(8, 8), Cell::Filled(SOLUTION[8][8]));
    }

    #[test]
    fn reset_clears_player_input() {
        let mut game = near_complete_game();
        game.toggle_sketch_mode();
        game.input_digit(3);
        game.toggle_sketch_mode();
        game.reset_board();
        assert_eq!(game.play.cell(8, 8), Cell::Empty);
        assert_eq!(game.play.sketch_at(8, 8), None);
        assert_eq!(game.screen, Screen::Playing);
    }

    #[test]
    fn input_ignored_outside_play() {
        let mut game = near_complete_game();
        game.screen = Screen::Menu;
        game.input_digit(5);
        assert_eq!(game.play.cell(8, 8), Cell::Empty);
    }

    #[test]
    fn new_game_respects_difficulty_budget() {
        let mut game = Game::new(Difficulty::Medium);
        game.start_new_game().unwrap();
        assert_eq!(game.screen, Screen::Playing);

        let empties = game
            .play
            .cells()
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count();
        assert_eq!(empties, Difficulty::Medium.removed_cells());
    }
}
