//! Cell removal that preserves solution uniqueness.

use std::time::{Duration, Instant};

use gridquarry_core::{Board, CellSet, board::CELL_COUNT};
use log::{debug, trace};
use rand::Rng;

use crate::{
    random::uniform_pick_excluding,
    uniqueness::{SolutionCount, count_solutions},
};

/// Snapshots the board, runs `f`, and restores the snapshot before returning
/// `f`'s result. Used wherever a search is allowed to scribble on the board
/// but the caller needs it back unchanged.
pub(crate) fn with_restored<T>(board: &mut Board, f: impl FnOnce(&mut Board) -> T) -> T {
    let snapshot = board.values();
    let result = f(board);
    board.restore(&snapshot);
    result
}

/// Attempts to clear the cell at `index`, keeping the removal only if the
/// board still has exactly one completion afterwards.
///
/// On rejection the original value is reinstated, so the board never holds
/// more than one solution after this returns. Clearing an already-empty cell
/// is a no-op that trivially keeps its state.
pub fn try_removal(board: &mut Board, index: u8) {
    let old_value = board.value(index);
    board.set_value(index, 0);
    // The counting search mutates and restores the board internally; the
    // snapshot guard pins the post-removal state regardless.
    let verdict = with_restored(board, count_solutions);
    if verdict != SolutionCount::One {
        board.set_value(index, old_value);
    }
}

/// Outcome of a [`dig`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigOutcome {
    /// Number of outer passes consumed (1-based; at least 1).
    pub attempts: usize,
    /// Wall-clock time spent digging.
    pub elapsed: Duration,
}

/// Removes cells from `board` until `spaces` cells remain filled, in up to
/// `max_tries` passes.
///
/// Each pass draws untried filled cells in uniformly random order and runs
/// the removal protocol on them; a pass ends when every cell has been tried
/// or the target is reached. The board always keeps exactly one completion.
/// If the target was not reached within `max_tries` passes, the board is
/// left at its closest state; the caller decides how to fall back.
///
/// # Panics
///
/// Panics if `spaces` exceeds 81.
pub fn dig<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    spaces: usize,
    max_tries: usize,
) -> DigOutcome {
    assert!(spaces <= CELL_COUNT, "target count must be 0-81");
    let started = Instant::now();
    let mut attempts = 0;

    for attempt in 1..=max_tries {
        attempts = attempt;
        let mut tried = tried_baseline(board);
        while board.filled_count() > spaces && usize::from(tried.len()) < CELL_COUNT {
            let index = uniform_pick_excluding(rng, 81, &tried, |i| board.value(i) == 0);
            tried.insert(index);
            try_removal(board, index);
        }
        trace!(
            "pass {attempt}: {} cells filled (target {spaces})",
            board.filled_count()
        );
        if board.filled_count() == spaces {
            break;
        }
    }

    let outcome = DigOutcome {
        attempts,
        elapsed: started.elapsed(),
    };
    debug!(
        "dig finished after {} pass(es) in {:?}, {} cells filled",
        outcome.attempts,
        outcome.elapsed,
        board.filled_count()
    );
    outcome
}

/// Seeds a pass's tried set with the cells that are already empty: they are
/// not removal candidates, and counting them lets the `tried < 81` bound
/// end the pass once every filled cell has been attempted.
fn tried_baseline(board: &Board) -> CellSet {
    let mut tried = CellSet::new();
    for cell in board.iter() {
        if cell.is_empty() {
            tried.insert(cell.index());
        }
    }
    tried
}

#[cfg(test)]
mod tests {
    use rand::{RngExt as _, SeedableRng as _};
    use rand_pcg::Pcg64;

    use super::*;
    use crate::fill::fill_grid;

    fn solved_board(seed: u64) -> (Board, Pcg64) {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut board = Board::new();
        fill_grid(&mut board, &mut rng);
        (board, rng)
    }

    #[test]
    fn test_with_restored() {
        let (mut board, _) = solved_board(1);
        let snapshot = board.values();
        let count = with_restored(&mut board, |b| {
            b.set_value(0, 0);
            b.set_value(1, 0);
            b.filled_count()
        });
        assert_eq!(count, 79);
        assert_eq!(board.values(), snapshot);
    }

    #[test]
    fn test_try_removal_keeps_board_unique() {
        let (mut board, mut rng) = solved_board(2);
        for _ in 0..20 {
            let index = rng.random_range(0..81);
            try_removal(&mut board, index);
            let verdict = with_restored(&mut board, count_solutions);
            assert_eq!(verdict, SolutionCount::One);
        }
    }

    #[test]
    fn test_try_removal_restores_rejected_value() {
        let (mut board, _) = solved_board(3);
        // Dig deep enough that some removals get rejected, then verify
        // the surviving values still pin a unique completion.
        for index in 0..81 {
            try_removal(&mut board, index);
        }
        assert_eq!(
            with_restored(&mut board, count_solutions),
            SolutionCount::One
        );
    }

    #[test]
    fn test_dig_reaches_easy_target() {
        let (mut board, mut rng) = solved_board(4);
        let outcome = dig(&mut board, &mut rng, 40, 100);
        assert_eq!(board.filled_count(), 40);
        assert!(outcome.attempts >= 1);
    }

    #[test]
    fn test_dig_with_target_81_does_nothing() {
        let (mut board, mut rng) = solved_board(5);
        let before = board.values();
        let outcome = dig(&mut board, &mut rng, 81, 50);
        assert_eq!(outcome.attempts, 1);
        assert_eq!(board.values(), before);
    }

    #[test]
    fn test_dig_terminates_when_target_unreachable() {
        let (mut board, mut rng) = solved_board(6);
        // 16 filled cells can never pin a unique solution; every pass must
        // still terminate and the try budget must be consumed.
        let outcome = dig(&mut board, &mut rng, 16, 3);
        assert_eq!(outcome.attempts, 3);
        assert!(board.filled_count() > 16);
    }
}
