//! Sudoku puzzle generation: grid filling, uniqueness checking, and digging.
//!
//! This crate builds complete valid grids and carves puzzles out of them
//! while guaranteeing that exactly one solution survives. It is organized
//! around a handful of small modules:
//!
//! - [`fill`]: randomized construction of complete grids
//! - [`uniqueness`]: a backtracking search that classifies a partial board
//!   as having zero, one, or many completions
//! - [`dig`]: the removal protocol that empties cells without ever breaking
//!   uniqueness
//! - [`difficulty`]: named presets mapping to target clue counts
//! - [`seed`]: reproducible seeding for the whole pipeline
//! - [`session`]: the [`PuzzleSession`] facade tying it all together
//!
//! # Examples
//!
//! ```
//! use gridquarry_generator::{Difficulty, PuzzleSession};
//!
//! let mut session = PuzzleSession::new();
//! let report = session.generate_for_difficulty(Difficulty::Easy);
//! assert!(report.success);
//! println!("{}", session.puzzle());
//! ```

pub mod difficulty;
pub mod dig;
pub mod fill;
pub mod random;
pub mod seed;
pub mod session;
pub mod uniqueness;

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    dig::DigOutcome,
    seed::{ParseSeedError, PuzzleSeed},
    session::{PuzzleSession, Report},
    uniqueness::SolutionCount,
};
