//! Cumulative statistics kept across sessions.

use serde::{Deserialize, Serialize};

use crate::result::{Outcome, Percentages};

/// All-time counters.
///
/// `player_wins + computer_wins + draws == rounds_played` holds after every
/// mutation made through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllTimeStats {
    /// Total reward points earned.
    pub points: u64,
    /// Rounds played across all series.
    pub rounds_played: u64,
    /// Rounds won by the player.
    pub player_wins: u64,
    /// Rounds won by the computer.
    pub computer_wins: u64,
    /// Drawn rounds.
    pub draws: u64,
}

impl AllTimeStats {
    /// Counts one round.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.player_wins = self.player_wins.saturating_add(1),
            Outcome::Lose => self.computer_wins = self.computer_wins.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
        }
        self.rounds_played = self.rounds_played.saturating_add(1);
    }

    /// Credits reward points and returns the new total.
    pub const fn award(&mut self, points: u64) -> u64 {
        self.points = self.points.saturating_add(points);
        self.points
    }

    /// Returns whether the outcome counters add up to `rounds_played`.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.player_wins
            .saturating_add(self.computer_wins)
            .saturating_add(self.draws)
            == self.rounds_played
    }

    /// Recomputes `rounds_played` from the outcome counters.
    pub const fn repair(&mut self) {
        self.rounds_played = self
            .player_wins
            .saturating_add(self.computer_wins)
            .saturating_add(self.draws);
    }

    /// Returns the all-time share of rounds won, lost and drawn.
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
