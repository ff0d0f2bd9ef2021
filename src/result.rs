//! Round and series result types.

use core::fmt;

use crate::moves::Move;

/// Result of a single round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player's move beat the computer's.
    Win,
    /// Computer's move beat the player's.
    Lose,
    /// Both sides played the same move.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Draw => "draw",
        })
    }
}

/// A resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's move.
    pub player_move: Move,
    /// The computer's move.
    pub computer_move: Move,
    /// The outcome for the player.
    pub outcome: Outcome,
}

/// Running tally of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeriesResult {
    /// Rounds won by the player.
    pub player_wins: u64,
    /// Rounds won by the computer.
    pub computer_wins: u64,
    /// Drawn rounds.
    pub draws: u64,
    /// Rounds played so far.
    pub rounds_played: u64,
}

impl SeriesResult {
    /// Folds one round outcome into the tally.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.player_wins += 1,
            Outcome::Lose => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.rounds_played += 1;
    }

    /// Returns the share of rounds won, lost and drawn in this series.
    #[must_use]
    pub fn percentages(&self) -> Percentages {
        Percentages::of(
            self.player_wins,
            self.computer_wins,
            self.draws,
            self.rounds_played,
        )
    }
}

/// Series-level verdict used to pick the reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesOutcome {
    /// The player won the series.
    Won,
    /// The computer won the series.
    Lost,
    /// Both sides finished with the same number of wins.
    Tied,
    /// No winner was declared: a best-of cap ran out before either side
    /// reached the majority, or the series is still running.
    Undecided,
}

/// Returns `part` as a percentage of `total`, or `0.0` when `total` is zero.
///
/// # Example
///
/// ```
/// use rpsrs::percentage;
///
/// assert_eq!(percentage(2, 5), 40.0);
/// assert_eq!(percentage(3, 0), 0.0);
/// ```
#[must_use]
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * part as f64 / total as f64
}

/// Win, loss and draw shares of some number of rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentages {
    /// Share of rounds won by the player.
    pub player: f64,
    /// Share of rounds won by the computer.
    pub computer: f64,
    /// Share of drawn rounds.
    pub draws: f64,
}

impl Percentages {
    /// Computes the three shares against `total` rounds.
    #[must_use]
    pub fn of(player_wins: u64, computer_wins: u64, draws: u64, total: u64) -> Self {
        Self {
            player: percentage(player_wins, total),
            computer: percentage(computer_wins, total),
            draws: percentage(draws, total),
        }
    }
}

impl fmt::Display for Percentages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You: {:.2}%   Computer: {:.2}%   Draws: {:.2}%",
            self.player, self.computer, self.draws
        )
    }
}
