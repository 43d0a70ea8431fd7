//! Named difficulty presets mapping to target clue counts.

use std::{
    fmt::{self, Display},
    ops::Range,
    str::FromStr,
};

/// A named difficulty, defined by how many cells stay filled.
///
/// Each difficulty owns an inclusive-exclusive range of clue counts (cells
/// to *keep*, not to remove); the session draws the actual target uniformly
/// from that range.
///
/// # Examples
///
/// ```
/// use gridquarry_generator::Difficulty;
///
/// assert_eq!(Difficulty::Hard.clue_range(), 25..30);
/// assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 35 to 44 clues.
    Easy,
    /// 30 to 34 clues.
    Medium,
    /// 25 to 29 clues.
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the inclusive-exclusive range of clue counts for this
    /// difficulty.
    #[must_use]
    pub const fn clue_range(self) -> Range<u8> {
        match self {
            Self::Easy => 35..45,
            Self::Medium => 30..35,
            Self::Hard => 25..30,
        }
    }

    /// Returns the lowercase name of this difficulty.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a [`Difficulty`] name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {name:?}, expected easy, medium, or hard")]
pub struct ParseDifficultyError {
    /// The rejected name.
    pub name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError {
                name: s.to_owned(),
            })
    }
}
