//! Reward configuration.

use serde::{Deserialize, Serialize};

use crate::result::SeriesOutcome;

/// Message shown when a series ends without a winner.
pub const UNDECIDED_MESSAGE: &str = "The series ended undecided. No points awarded.";

/// Rewards and messages applied at the end of a series.
///
/// Use the builder methods to customize it:
///
/// ```
/// use rpsrs::Config;
///
/// let config = Config::default()
///     .with_win_reward(250)
///     .with_tie_reward(50)
///     .with_lose_message("Better luck next time.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Points for winning a series.
    pub win_reward: u64,
    /// Points for a tied series.
    pub tie_reward: u64,
    /// Points for losing a series.
    pub lose_reward: u64,
    /// Message shown after winning a series.
    pub win_message: String,
    /// Message shown after a tied series.
    pub tie_message: String,
    /// Message shown after losing a series.
    pub lose_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            win_reward: 100,
            tie_reward: 20,
            lose_reward: 10,
            win_message: "🎉 You won the series!".to_owned(),
            tie_message: "🤝 The series is a tie.".to_owned(),
            lose_message: "😞 You lost the series.".to_owned(),
        }
    }
}

impl Config {
    /// Sets the reward for winning a series.
    ///
    /// # Example
    ///
    /// ```
    /// use rpsrs::Config;
    ///
    /// let config = Config::default().with_win_reward(500);
    /// assert_eq!(config.win_reward, 500);
    /// ```
    #[must_use]
    pub const fn with_win_reward(mut self, points: u64) -> Self {
        self.win_reward = points;
        self
    }

    /// Sets the reward for a tied series.
    #[must_use]
    pub const fn with_tie_reward(mut self, points: u64) -> Self {
        self.tie_reward = points;
        self
    }

    /// Sets the reward for losing a series.
    #[must_use]
    pub const fn with_lose_reward(mut self, points: u64) -> Self {
        self.lose_reward = points;
        self
    }

    /// Sets the message shown after winning a series.
    #[must_use]
    pub fn with_win_message(mut self, message: impl Into<String>) -> Self {
        self.win_message = message.into();
        self
    }

    /// Sets the message shown after a tied series.
    #[must_use]
    pub fn with_tie_message(mut self, message: impl Into<String>) -> Self {
        self.tie_message = message.into();
        self
    }

    /// Sets the message shown after losing a series.
    #[must_use]
    pub fn with_lose_message(mut self, message: impl Into<String>) -> Self {
        self.lose_message = message.into();
        self
    }

    /// Returns the points credited for a series outcome.
    ///
    /// An undecided series earns nothing.
    #[must_use]
    pub const fn reward_for(&self, outcome: SeriesOutcome) -> u64 {
        match outcome {
            SeriesOutcome::Won => self.win_reward,
            SeriesOutcome::Tied => self.tie_reward,
            SeriesOutcome::Lost => self.lose_reward,
            SeriesOutcome::Undecided => 0,
        }
    }

    /// Returns the message shown for a series outcome.
    #[must_use]
    pub fn message_for(&self, outcome: SeriesOutcome) -> &str {
        match outcome {
            SeriesOutcome::Won => self.win_message.as_str(),
            SeriesOutcome::Tied => self.tie_message.as_str(),
            SeriesOutcome::Lost => self.lose_message.as_str(),
            SeriesOutcome::Undecided => UNDECIDED_MESSAGE,
        }
    }
}
