//! The top-level generation session.

use std::time::Duration;

use gridquarry_core::{Board, CellData, DataError, PuzzleExport};
use log::debug;
use rand_pcg::Pcg64;

use crate::{
    difficulty::Difficulty, dig, fill::fill_grid, random::uniform_pick, seed::PuzzleSeed,
};

/// Result of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Number of digging passes consumed.
    pub attempts: usize,
    /// Whether the target clue count was reached.
    pub success: bool,
    /// Wall-clock time spent digging.
    pub elapsed: Duration,
}

/// A puzzle generation session: the current puzzle, its full solution, and
/// the random source driving both.
///
/// [`generate`](Self::generate) builds a fresh complete grid, keeps it as
/// the solution, and digs the working copy down to the requested clue count.
/// On failure the working copy is restored to the full solution, so the
/// session always holds a board with exactly one completion.
///
/// # Examples
///
/// ```
/// use gridquarry_generator::PuzzleSession;
///
/// let mut session = PuzzleSession::new();
/// let report = session.generate(40, 100);
/// assert!(report.success);
/// assert_eq!(session.puzzle().filled_count(), 40);
/// assert!(session.solution().is_complete());
/// ```
///
/// Seeded sessions reproduce their puzzles exactly:
///
/// ```
/// use gridquarry_generator::{PuzzleSeed, PuzzleSession};
///
/// let seed = PuzzleSeed::from_bytes([7; 32]);
/// let mut a = PuzzleSession::with_seed(seed);
/// let mut b = PuzzleSession::with_seed(seed);
/// a.generate(45, 100);
/// b.generate(45, 100);
/// assert_eq!(a.puzzle(), b.puzzle());
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    rng: Pcg64,
    seed: PuzzleSeed,
    puzzle: Board,
    solution: Board,
}

impl Default for PuzzleSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleSession {
    /// Creates a session with a fresh random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(PuzzleSeed::generate())
    }

    /// Creates a session reproducing exactly the puzzles of `seed`.
    #[must_use]
    pub fn with_seed(seed: PuzzleSeed) -> Self {
        Self {
            rng: seed.rng(),
            seed,
            puzzle: Board::new(),
            solution: Board::new(),
        }
    }

    /// Returns the seed this session was created from.
    #[must_use]
    pub const fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Generates a puzzle with exactly `spaces` filled cells, spending at
    /// most `max_tries` digging passes.
    ///
    /// On success the session's puzzle holds `spaces` clues. On failure the
    /// puzzle is the full solution itself, a valid board if not much of a
    /// puzzle, and the report says so.
    ///
    /// # Panics
    ///
    /// Panics if `spaces` exceeds 81.
    pub fn generate(&mut self, spaces: usize, max_tries: usize) -> Report {
        self.puzzle.clear();
        self.solution.clear();

        fill_grid(&mut self.puzzle, &mut self.rng);
        self.solution = self.puzzle.clone();

        let outcome = dig::dig(&mut self.puzzle, &mut self.rng, spaces, max_tries);
        let success = self.puzzle.filled_count() == spaces;
        if !success {
            debug!(
                "target of {spaces} clues not reached in {} pass(es), \
                 falling back to the full solution",
                outcome.attempts
            );
            self.puzzle = self.solution.clone();
        }
        Report {
            attempts: outcome.attempts,
            success,
            elapsed: outcome.elapsed,
        }
    }

    /// Generates a puzzle for a named difficulty, drawing the clue count
    /// uniformly from the difficulty's range.
    pub fn generate_for_difficulty(&mut self, difficulty: Difficulty) -> Report {
        let spaces = uniform_pick(&mut self.rng, difficulty.clue_range());
        debug!("difficulty {difficulty}: targeting {spaces} clues");
        self.generate(usize::from(spaces), DEFAULT_MAX_TRIES)
    }

    /// Returns the current puzzle board.
    #[must_use]
    pub const fn puzzle(&self) -> &Board {
        &self.puzzle
    }

    /// Returns the full solution of the current puzzle.
    #[must_use]
    pub const fn solution(&self) -> &Board {
        &self.solution
    }

    /// Returns the current puzzle as deep-copied cell records.
    #[must_use]
    pub fn data(&self) -> Vec<CellData> {
        self.puzzle.data()
    }

    /// Loads an external puzzle into the session.
    ///
    /// The solution board is left untouched; callers supplying external
    /// puzzles are expected to supply their own answer key if they need one.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] and leaves the puzzle unchanged if the
    /// records are malformed.
    pub fn set_data(&mut self, data: &[CellData]) -> Result<(), DataError> {
        self.puzzle.set_data(data)
    }

    /// Returns the puzzle and solution as serializable 9×9 matrices.
    #[must_use]
    pub fn export(&self) -> PuzzleExport {
        PuzzleExport {
            game: self.puzzle.matrix(),
            full: self.solution.matrix(),
        }
    }

    /// Clears both the puzzle and the solution back to empty boards.
    pub fn clear(&mut self) {
        self.puzzle.clear();
        self.solution.clear();
    }
}

/// Digging pass budget used by [`PuzzleSession::generate_for_difficulty`].
const DEFAULT_MAX_TRIES: usize = 100_000;

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(n: u8) -> PuzzleSession {
        PuzzleSession::with_seed(PuzzleSeed::from_bytes([n; 32]))
    }

    #[test]
    fn test_generate_all_filled_succeeds_immediately() {
        let mut session = seeded(1);
        let report = session.generate(81, 1);
        assert!(report.success);
        assert_eq!(report.attempts, 1);
        assert_eq!(session.puzzle().filled_count(), 81);
        assert_eq!(session.puzzle(), session.solution());
    }

    #[test]
    fn test_generate_reaches_target() {
        let mut session = seeded(2);
        let report = session.generate(30, 100_000);
        assert!(report.success);
        assert_eq!(session.puzzle().filled_count(), 30);

        // The puzzle differs from the solution only by zeroed cells.
        let mut zeroed = 0;
        for (cell, solved) in session.puzzle().iter().zip(session.solution().iter()) {
            if cell.is_empty() {
                zeroed += 1;
            } else {
                assert_eq!(cell.value(), solved.value());
            }
        }
        assert_eq!(zeroed, 51);
        assert!(session.solution().is_complete());
    }

    #[test]
    fn test_failed_generation_falls_back_to_solution() {
        let mut session = seeded(3);
        // One pass almost never reaches 22 clues.
        let report = session.generate(22, 1);
        if !report.success {
            assert_eq!(session.puzzle(), session.solution());
            assert_eq!(session.puzzle().filled_count(), 81);
        }
        assert_eq!(report.attempts, 1);
    }

    #[test]
    fn test_generate_for_difficulty_stays_in_range() {
        let mut session = seeded(4);
        for _ in 0..3 {
            let report = session.generate_for_difficulty(Difficulty::Easy);
            assert!(report.success);
            let clues = session.puzzle().filled_count();
            assert!(Difficulty::Easy.clue_range().contains(&u8::try_from(clues).unwrap()));
        }
    }

    #[test]
    fn test_export_import_idempotence() {
        let mut session = seeded(5);
        session.generate(40, 100);
        let export = session.export();
        let data = session.data();

        let mut other = seeded(6);
        other.set_data(&data).unwrap();
        assert_eq!(other.data(), data);
        assert_eq!(other.export().game, export.game);
    }

    #[test]
    fn test_export_serializes() {
        let mut session = seeded(7);
        session.generate(81, 1);
        let json = serde_json::to_string(&session.export()).unwrap();
        assert!(json.starts_with("{\"game\":"));
        assert!(json.contains("\"full\":"));
    }

    #[test]
    fn test_clear() {
        let mut session = seeded(8);
        session.generate(40, 100);
        session.clear();
        assert_eq!(session.puzzle().filled_count(), 0);
        assert_eq!(session.solution().filled_count(), 0);
    }

    #[test]
    fn test_rendering_shows_placeholders() {
        let mut session = seeded(9);
        session.generate(40, 100);
        let rendered = session.puzzle().to_string();
        assert!(rendered.contains('·'));
        assert_eq!(rendered.lines().count(), 19);
    }
}
