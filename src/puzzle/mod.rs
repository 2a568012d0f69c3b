pub mod dictionary;
pub mod letters;
pub mod solver;

// Re-export common types
pub use dictionary::Dictionary;
pub use letters::{Puzzle, PUZZLE_SIZE, REQUIRED_POSITION};
pub use solver::{search, Solution, Solver};
