//! Import/export records for board contents.

use serde::{Deserialize, Serialize};

/// A snapshot record of one cell: position metadata plus the held value.
///
/// This is the shape boards expose to external consumers and accept back
/// when loading a puzzle, matching [`Cell`](crate::Cell) field for field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellData {
    /// Row index (0-8).
    pub row: u8,
    /// Column index (0-8).
    pub col: u8,
    /// Region index (0-8).
    pub region: u8,
    /// Held value (1-9), or 0 for empty.
    pub value: u8,
    /// Flat index (0-80).
    pub index: u8,
}

/// A structured export of a puzzle and its full solution.
///
/// Both grids are 9×9 value matrices in row-major order, with 0 for empty
/// cells.
///
/// # Examples
///
/// ```
/// use gridquarry_core::PuzzleExport;
///
/// let export = PuzzleExport {
///     game: [[0; 9]; 9],
///     full: [[0; 9]; 9],
/// };
/// let json = serde_json::to_string(&export).unwrap();
/// assert!(json.starts_with("{\"game\":"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleExport {
    /// The puzzle as presented to the player.
    pub game: [[u8; 9]; 9],
    /// The complete solution.
    pub full: [[u8; 9]; 9],
}

/// Errors raised when loading external board data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DataError {
    /// The record list does not contain exactly 81 entries.
    #[display("expected 81 cell records, got {len}")]
    WrongLength {
        /// Number of records provided.
        len: usize,
    },
    /// A record's index does not match its position in the list.
    #[display("record at position {position} carries index {index}")]
    IndexMismatch {
        /// Position of the record in the list.
        position: usize,
        /// Flat index the record claims.
        index: u8,
    },
    /// A record holds a value outside 0-9.
    #[display("cell {index} holds out-of-range value {value}")]
    ValueOutOfRange {
        /// Flat index of the offending record.
        index: u8,
        /// The rejected value.
        value: u8,
    },
}
