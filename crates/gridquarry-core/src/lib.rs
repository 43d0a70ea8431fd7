//! Core data structures for the gridquarry puzzle engine.
//!
//! This crate provides the board model shared by the generation and digging
//! code: cells with fixed position metadata, the 81-cell board with its
//! three addressing schemes, compact bitmask sets, and the import/export
//! surface.
//!
//! # Overview
//!
//! - [`cell`]: a single cell plus the row/column/region coordinate math,
//!   including the region/slot inverse mapping the solver relies on.
//! - [`board`]: the 81-cell [`Board`] with snapshot/restore, candidate
//!   computation, and bordered text rendering.
//! - [`candidate_set`]: [`CandidateSet`], a bitmask over values 1-9.
//! - [`cell_set`]: [`CellSet`], a bitmask over cell indices 0-80.
//! - [`data`]: [`CellData`] records, the [`PuzzleExport`] structure, and
//!   [`DataError`].
//!
//! # Examples
//!
//! ```
//! use gridquarry_core::Board;
//!
//! let mut board = Board::new();
//! board.set_value(0, 5);
//!
//! // The same cell is reachable by flat index, (row, col), and
//! // (region, slot) addressing.
//! assert_eq!(board.cell_at(0).value(), 5);
//! assert_eq!(board.cell(0, 0).value(), 5);
//! assert_eq!(board.region_cell(0, 0).value(), 5);
//! ```

pub mod board;
pub mod candidate_set;
pub mod cell;
pub mod cell_set;
pub mod data;

pub use self::{
    board::Board,
    candidate_set::CandidateSet,
    cell::Cell,
    cell_set::CellSet,
    data::{CellData, DataError, PuzzleExport},
};
