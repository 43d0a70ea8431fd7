//! Reproducible seeds for puzzle generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// A 32-byte seed that fully determines a generation run.
///
/// Seeds print and parse as 64 hex digits, so a puzzle can be reproduced
/// from its logged seed.
///
/// # Examples
///
/// ```
/// use gridquarry_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSeed {
    bytes: [u8; 32],
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Draws a fresh random seed from the operating system entropy source.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill(&mut bytes);
        Self { bytes }
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Builds the deterministic RNG this seed describes.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a [`PuzzleSeed`] from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    WrongLength {
        /// Length of the rejected string.
        len: usize,
    },
    /// The string contains a non-hex character.
    #[display("seed contains a non-hex character")]
    InvalidDigit,
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::WrongLength { len: s.len() });
        }
        let mut bytes = [0u8; 32];
        for (byte, chunk) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let hex = std::str::from_utf8(chunk).map_err(|_| ParseSeedError::InvalidDigit)?;
            *byte = u8::from_str_radix(hex, 16).map_err(|_| ParseSeedError::InvalidDigit)?;
        }
        Ok(Self { bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        let parsed: PuzzleSeed = text.parse().unwrap();
        assert_eq!(parsed, seed);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let err = "abcd".parse::<PuzzleSeed>().unwrap_err();
        assert_eq!(err, ParseSeedError::WrongLength { len: 4 });

        let err = "zz".repeat(32).parse::<PuzzleSeed>().unwrap_err();
        assert_eq!(err, ParseSeedError::InvalidDigit);
    }

    #[test]
    fn test_generate_produces_distinct_seeds() {
        // Not a randomness test, just a sanity check that entropy flows.
        assert_ne!(PuzzleSeed::generate(), PuzzleSeed::generate());
    }

    #[test]
    fn test_rng_is_deterministic() {
        use rand::RngExt as _;

        let seed = PuzzleSeed::from_bytes([7; 32]);
        let a: u64 = seed.rng().random();
        let b: u64 = seed.rng().random();
        assert_eq!(a, b);
    }
}
