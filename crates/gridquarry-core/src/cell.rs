//! A single board cell and the coordinate arithmetic behind it.

/// One cell of a 9×9 board.
///
/// The position metadata (row, column, region, and flat index) is derived
/// from the flat index at construction and fixed for the cell's lifetime;
/// only the value changes. A value of `0` means the cell is empty.
///
/// # Examples
///
/// ```
/// use gridquarry_core::Cell;
///
/// let cell = Cell::new(40, 5);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 4);
/// assert_eq!(cell.region(), 4);
/// assert_eq!(cell.value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: u8,
    col: u8,
    region: u8,
    index: u8,
    value: u8,
}

impl Cell {
    /// Creates a cell at the given flat index (0-80) holding `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater, or if `value` is 10 or greater.
    #[must_use]
    pub fn new(index: u8, value: u8) -> Self {
        assert!(index < 81, "Cell index must be 0-80, got {index}");
        assert!(value <= 9, "Cell value must be 0-9, got {value}");
        let row = index / 9;
        let col = index % 9;
        Self {
            row,
            col,
            region: region_of(row, col),
            index,
            value,
        }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Returns the region index (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn region(&self) -> u8 {
        self.region
    }

    /// Returns the flat index (0-80, row-major).
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Returns the value (1-9), or 0 if the cell is empty.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Sets the value. `0` clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 10 or greater.
    pub fn set_value(&mut self, value: u8) {
        assert!(value <= 9, "Cell value must be 0-9, got {value}");
        self.value = value;
    }

    /// Returns `true` if the cell holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Returns `true` if both cells share a row, column, or region.
    ///
    /// A cell sees itself.
    #[must_use]
    pub const fn sees(&self, other: &Cell) -> bool {
        self.row == other.row || self.col == other.col || self.region == other.region
    }
}

/// Returns the region index (0-8) containing `(row, col)`.
///
/// Regions are the nine non-overlapping 3×3 sub-grids, numbered left to
/// right, top to bottom.
///
/// # Examples
///
/// ```
/// use gridquarry_core::cell::region_of;
///
/// assert_eq!(region_of(0, 0), 0);
/// assert_eq!(region_of(4, 4), 4);
/// assert_eq!(region_of(8, 8), 8);
/// ```
#[must_use]
pub const fn region_of(row: u8, col: u8) -> u8 {
    assert!(row < 9 && col < 9);
    (row / 3) * 3 + col / 3
}

/// Returns the slot (0-8) of `(row, col)` within its region.
///
/// Slots run left to right, top to bottom inside the region, so
/// `region_position(region_of(r, c), region_slot(r, c)) == (r, c)` for every
/// position.
#[must_use]
pub const fn region_slot(row: u8, col: u8) -> u8 {
    assert!(row < 9 && col < 9);
    (row % 3) * 3 + col % 3
}

/// Converts a `(region, slot)` pair back to `(row, col)`.
///
/// This is the exact inverse of [`region_of`] + [`region_slot`]; the solver
/// relies on the round-trip being lossless.
///
/// # Panics
///
/// Panics if `region` or `slot` is 9 or greater.
///
/// # Examples
///
/// ```
/// use gridquarry_core::cell::region_position;
///
/// assert_eq!(region_position(0, 0), (0, 0));
/// assert_eq!(region_position(4, 4), (4, 4));
/// assert_eq!(region_position(8, 8), (8, 8));
/// ```
#[must_use]
pub const fn region_position(region: u8, slot: u8) -> (u8, u8) {
    assert!(region < 9 && slot < 9);
    ((region / 3) * 3 + slot / 3, (region % 3) * 3 + slot % 3)
}
