pub mod board;
pub mod checker;
pub mod difficulty;
pub mod generator;
pub mod validation;

pub use board::{Board, Cell, PlayBoard, SolutionGrid};
pub use difficulty::Difficulty;
pub use generator::{GenerateError, generate_puzzle, generate_with_rng};
