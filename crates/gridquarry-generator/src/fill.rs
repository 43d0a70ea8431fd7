//! Randomized construction of complete valid grids.

use gridquarry_core::{Board, CandidateSet, board::CELL_COUNT};
use log::debug;
use rand::Rng;

use crate::random::uniform_pick;

/// Safety cap on single placement/backtrack steps before the fill restarts
/// from an empty board. Never reached in practice for 9×9.
const STEP_LIMIT: u32 = 1_000_000;

/// Fills `board` with a complete valid grid, overwriting its contents.
///
/// The fill walks the 81 cells in index order, drawing candidates uniformly
/// at random for the cursor cell. A candidate that conflicts with an
/// already-placed cell is discarded and the cursor stays put; when a cell
/// runs out of candidates its set is refreshed, the previous cell is
/// cleared, and the cursor steps back one cell. This one-step correction
/// converges quickly at 9×9 constraint density without a full recursive
/// unwind.
///
/// # Examples
///
/// ```
/// use gridquarry_core::Board;
/// use gridquarry_generator::fill::fill_grid;
/// use rand::SeedableRng as _;
///
/// let mut board = Board::new();
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(1);
/// fill_grid(&mut board, &mut rng);
/// assert!(board.is_complete());
/// ```
pub fn fill_grid<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
    board.clear();
    let mut candidates = [CandidateSet::FULL; CELL_COUNT];
    let mut cursor: usize = 0;
    let mut steps: u32 = 0;

    while cursor < CELL_COUNT {
        steps += 1;
        if steps > STEP_LIMIT {
            debug!("grid fill hit step limit, restarting from empty board");
            board.clear();
            candidates = [CandidateSet::FULL; CELL_COUNT];
            cursor = 0;
            steps = 0;
            continue;
        }

        let set = &mut candidates[cursor];
        if set.is_empty() {
            // One-step backtrack: refresh this cell and clear the previous.
            // Cell 0 has no previous cell; its refreshed set is drawn again.
            *set = CandidateSet::FULL;
            if cursor > 0 {
                cursor -= 1;
                board.set_value(index_of(cursor), 0);
            }
            continue;
        }

        let pick = uniform_pick(rng, 0..set.len());
        let value = set.nth(pick).unwrap();
        // Drawn candidates are consumed whether or not they fit.
        set.remove(value);
        if !conflicts(board, cursor, value) {
            board.set_value(index_of(cursor), value);
            cursor += 1;
        }
    }
}

/// Returns `true` if placing `value` at `index` would duplicate a value in
/// the same row, column, or region among the cells placed before `index`.
fn conflicts(board: &Board, index: usize, value: u8) -> bool {
    let target = board.cell_at(index_of(index));
    board
        .iter()
        .take(index)
        .any(|cell| cell.value() == value && cell.sees(target))
}

#[expect(clippy::cast_possible_truncation)]
fn index_of(cursor: usize) -> u8 {
    cursor as u8
}
