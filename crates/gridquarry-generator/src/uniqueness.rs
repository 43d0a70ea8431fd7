//! Solution counting for partially filled boards.

use gridquarry_core::{Board, CandidateSet};

/// How many completions a partially filled board admits.
///
/// The search stops distinguishing counts above two, so `Many` means "two or
/// more" rather than an exact tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionCount {
    /// No completion exists.
    None,
    /// Exactly one completion exists.
    One,
    /// At least two completions exist.
    Many,
}

/// Counts completions of `board` to a full valid grid.
///
/// The board must be row/column/region-consistent (no two cells sharing a
/// house hold the same nonzero value). The search recursively fills the
/// most-constrained empty cell (the one with the fewest remaining
/// candidates, first scan hit winning ties), trying its candidates in
/// ascending order. A second completion anywhere cuts the search short.
///
/// The board is mutated during the search but every recursion level restores
/// the cell it probed, so the board is left exactly as it was received.
///
/// # Examples
///
/// ```
/// use gridquarry_core::Board;
/// use gridquarry_generator::{fill::fill_grid, uniqueness::{SolutionCount, count_solutions}};
/// use rand::SeedableRng as _;
///
/// let mut board = Board::new();
/// fill_grid(&mut board, &mut rand_pcg::Pcg64::seed_from_u64(3));
///
/// // A complete board is its own single completion.
/// assert_eq!(count_solutions(&mut board), SolutionCount::One);
///
/// // A board this empty is never uniquely solvable.
/// let mut blank = Board::new();
/// assert_eq!(count_solutions(&mut blank), SolutionCount::Many);
/// ```
pub fn count_solutions(board: &mut Board) -> SolutionCount {
    let Some((row, col, candidates)) = most_constrained_cell(board) else {
        // No empty cell: the board as given is the one completion.
        return SolutionCount::One;
    };
    if candidates.is_empty() {
        return SolutionCount::None;
    }

    let index = board.cell(row, col).index();
    let mut completions: u8 = 0;
    for value in candidates {
        board.set_value(index, value);
        match count_solutions(board) {
            SolutionCount::One => completions += 1,
            SolutionCount::Many => {
                board.set_value(index, 0);
                return SolutionCount::Many;
            }
            SolutionCount::None => {}
        }
    }
    board.set_value(index, 0);

    match completions {
        0 => SolutionCount::None,
        1 => SolutionCount::One,
        _ => SolutionCount::Many,
    }
}

/// Finds the empty cell with the fewest candidates, scanning row-major and
/// keeping the first cell at each new minimum. Returns `None` when the board
/// is complete.
fn most_constrained_cell(board: &Board) -> Option<(u8, u8, CandidateSet)> {
    let mut best: Option<(u8, u8, CandidateSet)> = None;
    let mut best_len = 10;
    for row in 0..9 {
        for col in 0..9 {
            if !board.cell(row, col).is_empty() {
                continue;
            }
            let candidates = board.candidates(row, col);
            if candidates.len() < best_len {
                best_len = candidates.len();
                best = Some((row, col, candidates));
                if best_len == 0 {
                    return best;
                }
            }
        }
    }
    best
}
