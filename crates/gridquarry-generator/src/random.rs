//! Randomness helpers shared by the filling and digging loops.

use std::ops::Range;

use gridquarry_core::CellSet;
use rand::{Rng, RngExt as _};

/// Draws one value uniformly from `range`.
///
/// # Panics
///
/// Panics if the range is empty.
pub fn uniform_pick<R: Rng + ?Sized>(rng: &mut R, range: Range<u8>) -> u8 {
    assert!(!range.is_empty(), "cannot pick from an empty range");
    rng.random_range(range)
}

/// Draws cell indices below `max` until one is neither in `excluded` nor
/// rejected by `reject`.
///
/// The caller must guarantee that at least one acceptable index exists;
/// otherwise this loops forever.
pub fn uniform_pick_excluding<R, F>(rng: &mut R, max: u8, excluded: &CellSet, reject: F) -> u8
where
    R: Rng + ?Sized,
    F: Fn(u8) -> bool,
{
    loop {
        let index = rng.random_range(0..max);
        if !excluded.contains(index) && !reject(index) {
            return index;
        }
    }
}
