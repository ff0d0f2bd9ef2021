//! Series mode types.

use core::fmt;
use core::str::FromStr;

use crate::error::{ParseModeError, SeriesError};

/// How long a series lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesMode {
    /// Play exactly this many rounds.
    Rounds(u32),
    /// Play until one side wins a majority of this many rounds.
    BestOf(u32),
}

impl SeriesMode {
    /// Creates a fixed-length series mode.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub const fn rounds(count: u32) -> Result<Self, SeriesError> {
        if count == 0 {
            return Err(SeriesError::ZeroRounds);
        }
        Ok(Self::Rounds(count))
    }

    /// Creates a best-of series mode.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or even.
    ///
    /// # Example
    ///
    /// ```
    /// use rpsrs::{SeriesError, SeriesMode};
    ///
    /// assert_eq!(SeriesMode::best_of(3), Ok(SeriesMode::BestOf(3)));
    /// assert_eq!(SeriesMode::best_of(4), Err(SeriesError::EvenBestOf(4)));
    /// ```
    pub const fn best_of(count: u32) -> Result<Self, SeriesError> {
        if count == 0 {
            return Err(SeriesError::ZeroRounds);
        }
        if count % 2 == 0 {
            return Err(SeriesError::EvenBestOf(count));
        }
        Ok(Self::BestOf(count))
    }

    /// Returns the maximum number of rounds the series can last.
    #[must_use]
    pub const fn round_cap(self) -> u32 {
        match self {
            Self::Rounds(count) | Self::BestOf(count) => count,
        }
    }

    /// Returns the wins needed to take a best-of series.
    ///
    /// Returns `None` in rounds mode.
    #[must_use]
    pub const fn target_wins(self) -> Option<u32> {
        match self {
            Self::Rounds(_) => None,
            Self::BestOf(count) => Some(count / 2 + 1),
        }
    }
}

impl fmt::Display for SeriesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rounds(count) => write!(f, "{count} rounds"),
            Self::BestOf(count) => write!(f, "best of {count}"),
        }
    }
}

/// Which kind of series the player asked for, before a count is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// Fixed number of rounds.
    Rounds,
    /// First to a majority.
    BestOf,
}

impl ModeKind {
    /// Builds the series mode for `count`.
    ///
    /// # Errors
    ///
    /// See [`SeriesMode::rounds`] and [`SeriesMode::best_of`].
    pub const fn with_count(self, count: u32) -> Result<SeriesMode, SeriesError> {
        match self {
            Self::Rounds => SeriesMode::rounds(count),
            Self::BestOf => SeriesMode::best_of(count),
        }
    }
}

impl FromStr for ModeKind {
    type Err = ParseModeError;

    /// Accepts anything whose letters start with `r` (rounds) or `b`
    /// (best-of), so `rounds`, `Best-of` and `bestof` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: String = s
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match letters.chars().next() {
            Some('r') => Ok(Self::Rounds),
            Some('b') => Ok(Self::BestOf),
            _ => Err(ParseModeError(s.trim().to_owned())),
        }
    }
}
