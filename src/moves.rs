//! Move vocabulary.

use core::fmt;
use core::str::FromStr;

use rand::Rng;

use crate::error::ParseMoveError;

/// A move a player can make in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Rock. Beats scissors.
    Rock,
    /// Paper. Beats rock.
    Paper,
    /// Scissors. Beats paper.
    Scissors,
}

impl Move {
    /// Every move, in menu order.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Returns whether this move beats `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use rpsrs::Move;
    ///
    /// assert!(Move::Rock.beats(Move::Scissors));
    /// assert!(!Move::Rock.beats(Move::Paper));
    /// assert!(!Move::Rock.beats(Move::Rock));
    /// ```
    #[must_use]
    pub const fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Scissors, Self::Paper) | (Self::Paper, Self::Rock)
        )
    }

    /// Draws a move uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Returns the lowercase name of the move.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses `rock`, `paper` or `scissors`, ignoring case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.name().eq_ignore_ascii_case(input))
            .ok_or_else(|| ParseMoveError(input.to_owned()))
    }
}
