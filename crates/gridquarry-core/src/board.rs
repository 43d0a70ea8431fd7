//! The 81-cell board and its addressing, snapshot, and rendering operations.

use std::fmt::{self, Display};

use crate::{
    candidate_set::CandidateSet,
    cell::{Cell, region_position},
    data::{CellData, DataError},
};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 81;

/// A 9×9 board of [`Cell`]s in row-major index order.
///
/// Cells are addressable three ways: by flat index (0-80), by `(row, col)`,
/// and by `(region, slot)`. The region addressing is the exact inverse of
/// the row/column form: both always name the same physical cell.
///
/// While a board is complete, every row, column, and region holds each value
/// 1-9 exactly once. While a board is in progress (during search), no two
/// cells sharing a row, column, or region hold the same nonzero value.
///
/// # Examples
///
/// ```
/// use gridquarry_core::Board;
///
/// let mut board = Board::new();
/// board.set_value(40, 5);
///
/// assert_eq!(board.cell(4, 4).value(), 5);
/// assert_eq!(board.region_cell(4, 4).value(), 5);
/// assert_eq!(board.filled_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board (all 81 cells holding 0).
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|i| Cell::new(i as u8, 0)),
        }
    }

    /// Returns the cell at a flat index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub fn cell_at(&self, index: u8) -> &Cell {
        &self.cells[usize::from(index)]
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub fn cell(&self, row: u8, col: u8) -> &Cell {
        assert!(row < 9 && col < 9, "Cell position must be 0-8");
        &self.cells[usize::from(row) * 9 + usize::from(col)]
    }

    /// Returns the cell at `slot` (0-8) within `region` (0-8).
    ///
    /// `region_cell(r, s)` and [`cell`](Self::cell) name the same cell
    /// whenever the coordinates denote the same physical position.
    ///
    /// # Panics
    ///
    /// Panics if `region` or `slot` is 9 or greater.
    #[must_use]
    pub fn region_cell(&self, region: u8, slot: u8) -> &Cell {
        let (row, col) = region_position(region, slot);
        self.cell(row, col)
    }

    /// Returns the value at a flat index (0-80), with 0 meaning empty.
    #[must_use]
    pub fn value(&self, index: u8) -> u8 {
        self.cell_at(index).value()
    }

    /// Sets the value at a flat index. `0` clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater, or `value` is 10 or greater.
    pub fn set_value(&mut self, index: u8, value: u8) {
        self.cells[usize::from(index)].set_value(value);
    }

    /// Returns the number of cells holding a nonzero value.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns an iterator over all cells in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Takes a snapshot of all 81 cell values.
    #[must_use]
    pub fn values(&self) -> [u8; CELL_COUNT] {
        std::array::from_fn(|i| self.cells[i].value())
    }

    /// Bulk-replaces all cell values from a snapshot taken by
    /// [`values`](Self::values).
    ///
    /// # Panics
    ///
    /// Panics if the snapshot holds a value outside 0-9.
    pub fn restore(&mut self, snapshot: &[u8; CELL_COUNT]) {
        for (cell, &value) in self.cells.iter_mut().zip(snapshot) {
            cell.set_value(value);
        }
    }

    /// Clears every cell back to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set_value(0);
        }
    }

    /// Returns the values 1-9 that can be placed at `(row, col)` without
    /// duplicating a nonzero value in its row, column, or region.
    ///
    /// The cell's own value is ignored, so the result is meaningful for the
    /// cell a search is about to fill.
    #[must_use]
    pub fn candidates(&self, row: u8, col: u8) -> CandidateSet {
        let target = self.cell(row, col);
        let mut candidates = CandidateSet::FULL;
        for cell in &self.cells {
            if cell.index() != target.index() && !cell.is_empty() && cell.sees(target) {
                candidates.remove(cell.value());
            }
        }
        candidates
    }

    /// Returns `true` if every row, column, and region holds each value 1-9
    /// exactly once.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let mut rows = [CandidateSet::EMPTY; 9];
        let mut cols = [CandidateSet::EMPTY; 9];
        let mut regions = [CandidateSet::EMPTY; 9];
        for cell in &self.cells {
            if cell.is_empty() {
                return false;
            }
            let value = cell.value();
            let row = &mut rows[usize::from(cell.row())];
            let col = &mut cols[usize::from(cell.col())];
            let region = &mut regions[usize::from(cell.region())];
            if row.contains(value) || col.contains(value) || region.contains(value) {
                return false;
            }
            row.insert(value);
            col.insert(value);
            region.insert(value);
        }
        true
    }

    /// Returns the board as a 9×9 value matrix in row-major order.
    #[must_use]
    pub fn matrix(&self) -> [[u8; 9]; 9] {
        let mut matrix = [[0; 9]; 9];
        for cell in &self.cells {
            matrix[usize::from(cell.row())][usize::from(cell.col())] = cell.value();
        }
        matrix
    }

    /// Returns all 81 cells as deep-copied [`CellData`] records.
    #[must_use]
    pub fn data(&self) -> Vec<CellData> {
        self.cells
            .iter()
            .map(|cell| CellData {
                row: cell.row(),
                col: cell.col(),
                region: cell.region(),
                value: cell.value(),
                index: cell.index(),
            })
            .collect()
    }

    /// Loads board contents from [`CellData`] records.
    ///
    /// Records must arrive in index order (record `i` carries index `i`) and
    /// hold values 0-9. Position metadata in the records is recomputed from
    /// the index rather than trusted.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::WrongLength`], [`DataError::IndexMismatch`], or
    /// [`DataError::ValueOutOfRange`] without modifying the board.
    pub fn set_data(&mut self, data: &[CellData]) -> Result<(), DataError> {
        if data.len() != CELL_COUNT {
            return Err(DataError::WrongLength { len: data.len() });
        }
        for (position, record) in data.iter().enumerate() {
            if usize::from(record.index) != position {
                return Err(DataError::IndexMismatch {
                    position,
                    index: record.index,
                });
            }
            if record.value > 9 {
                return Err(DataError::ValueOutOfRange {
                    index: record.index,
                    value: record.value,
                });
            }
        }
        for (cell, record) in self.cells.iter_mut().zip(data) {
            cell.set_value(record.value);
        }
        Ok(())
    }
}

const THIN_BORDER: &str = "++---+---+---++---+---+---++---+---+---++";
const THICK_BORDER: &str = "++===+===+===++===+===+===++===+===+===++";

/// Empty cells render as a middle dot.
const EMPTY_GLYPH: char = '·';

impl Display for Board {
    /// Renders the board as a bordered grid with 3×3 block separators.
    ///
    /// ```text
    /// ++---+---+---++---+---+---++---+---+---++
    /// || 5 | 3 | · || · | 7 | · || · | · | · ||
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{THIN_BORDER}")?;
        for row in 0..9 {
            write!(f, "||")?;
            for col in 0..9 {
                let value = self.cell(row, col).value();
                if value == 0 {
                    write!(f, " {EMPTY_GLYPH} ")?;
                } else {
                    write!(f, " {value} ")?;
                }
                if col % 3 == 2 {
                    write!(f, "||")?;
                } else {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row == 8 {
                write!(f, "{THIN_BORDER}")?;
            } else if row % 3 == 2 {
                writeln!(f, "{THICK_BORDER}")?;
            } else {
                writeln!(f, "{THIN_BORDER}")?;
            }
        }
        Ok(())
    }
}
