//! A set of cell indices 0-80, stored as a bitmask.

/// A set of flat cell indices (0-80), represented as a 128-bit mask.
///
/// Used to track which cells have already been attempted during a removal
/// pass without allocating.
///
/// # Examples
///
/// ```
/// use gridquarry_core::CellSet;
///
/// let mut tried = CellSet::new();
/// tried.insert(0);
/// tried.insert(80);
///
/// assert_eq!(tried.len(), 2);
/// assert!(tried.contains(80));
/// assert!(!tried.contains(40));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    const fn bit(index: u8) -> u128 {
        assert!(index < 81, "Cell index must be 0-80");
        1 << index
    }

    /// Inserts a cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    pub fn insert(&mut self, index: u8) {
        self.bits |= Self::bit(index);
    }

    /// Removes a cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    pub fn remove(&mut self, index: u8) {
        self.bits &= !Self::bit(index);
    }

    /// Returns `true` if the set contains `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub fn contains(self, index: u8) -> bool {
        self.bits & Self::bit(index) != 0
    }

    /// Returns the number of indices in the set.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn len(self) -> u8 {
        self.bits.count_ones() as u8
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = CellSet::new();
        assert!(set.is_empty());

        set.insert(13);
        set.insert(13);
        assert_eq!(set.len(), 1);
        assert!(set.contains(13));

        set.remove(13);
        assert!(set.is_empty());
        assert!(!set.contains(13));
    }

    #[test]
    fn test_full_range() {
        let mut set = CellSet::new();
        for index in 0..81 {
            set.insert(index);
        }
        assert_eq!(set.len(), 81);
    }

    #[test]
    #[should_panic(expected = "Cell index must be 0-80")]
    fn test_rejects_81() {
        let mut set = CellSet::new();
        set.insert(81);
    }
}
