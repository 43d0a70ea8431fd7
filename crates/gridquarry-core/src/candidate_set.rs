//! A set of candidate values 1-9, stored as a bitmask.

use std::iter::FusedIterator;

/// A set of values from 1 to 9, represented as a 16-bit mask.
///
/// Bits 0-8 represent the values 1-9 respectively. The type is used for the
/// per-cell candidate bookkeeping during grid filling and solution counting.
///
/// # Examples
///
/// ```
/// use gridquarry_core::CandidateSet;
///
/// let mut candidates = CandidateSet::FULL;
/// candidates.remove(5);
/// candidates.remove(7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(5));
/// assert!(candidates.contains(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidateSet {
    bits: u16,
}

const FULL_BITS: u16 = 0x1ff;

impl CandidateSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing every value 1-9.
    pub const FULL: Self = Self { bits: FULL_BITS };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(value: u8) -> u16 {
        assert!(
            1 <= value && value <= 9,
            "Candidate value must be between 1 and 9"
        );
        1 << (value - 1)
    }

    /// Inserts a value (1-9) into the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside the range 1-9.
    pub fn insert(&mut self, value: u8) {
        self.bits |= Self::bit(value);
    }

    /// Removes a value (1-9) from the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside the range 1-9.
    pub fn remove(&mut self, value: u8) {
        self.bits &= !Self::bit(value);
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside the range 1-9.
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        self.bits & Self::bit(value) != 0
    }

    /// Returns the number of values in the set.
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

    /// Returns the `n`th smallest value in the set, if any.
    ///
    /// Used to draw a uniformly random member: pick `n` below [`len`] and
    /// select it.
    ///
    /// [`len`]: Self::len
    ///
    /// # Examples
    ///
    /// ```
    /// use gridquarry_core::CandidateSet;
    ///
    /// let set = CandidateSet::from_iter([2, 5, 9]);
    /// assert_eq!(set.nth(0), Some(2));
    /// assert_eq!(set.nth(2), Some(9));
    /// assert_eq!(set.nth(3), None);
    /// ```
    #[must_use]
    pub fn nth(self, n: u8) -> Option<u8> {
        self.iter().nth(usize::from(n))
    }

    /// Returns an iterator over the values in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl FromIterator<u8> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`CandidateSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = u8;

    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range() {
        let mut set = CandidateSet::new();
        set.insert(1);
        set.insert(9);
        assert!(set.contains(1));
        assert!(set.contains(9));
        assert_eq!(set.len(), 2);
    }

    #[test]
    #[should_panic(expected = "Candidate value must be")]
    fn test_rejects_zero() {
        let mut set = CandidateSet::new();
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "Candidate value must be")]
    fn test_rejects_ten() {
        let mut set = CandidateSet::new();
        set.insert(10);
    }

    #[test]
    fn test_iteration_order() {
        let set = CandidateSet::from_iter([9, 1, 5, 3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_nth() {
        let set = CandidateSet::from_iter([4, 6, 8]);
        assert_eq!(set.nth(0), Some(4));
        assert_eq!(set.nth(1), Some(6));
        assert_eq!(set.nth(2), Some(8));
        assert_eq!(set.nth(3), None);
        assert_eq!(CandidateSet::EMPTY.nth(0), None);
    }

    #[test]
    fn test_remove() {
        let mut set = CandidateSet::FULL;
        set.remove(5);
        assert_eq!(set.len(), 8);
        assert!(!set.contains(5));
        // removing an absent value is a no-op
        set.remove(5);
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn test_constants() {
        assert_eq!(CandidateSet::EMPTY.len(), 0);
        assert!(CandidateSet::EMPTY.is_empty());
        assert_eq!(CandidateSet::FULL.len(), 9);
        for value in 1..=9 {
            assert!(CandidateSet::FULL.contains(value));
        }
    }
}
