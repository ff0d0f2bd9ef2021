//! Series engine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::SeriesError;
use crate::moves::Move;
use crate::result::{RoundResult, SeriesOutcome, SeriesResult};
use crate::rules::resolve;

pub mod mode;

pub use mode::{ModeKind, SeriesMode};

/// One play session against the computer.
///
/// The series owns its random source and the running tally. It does not
/// touch all-time statistics; see [`Session`](crate::Session) for that.
pub struct Series {
    /// Length rule for this series.
    mode: SeriesMode,
    /// Running tally.
    result: SeriesResult,
    /// Set when the player stops before the series is over.
    abandoned: bool,
    /// Source of computer moves.
    rng: ChaCha8Rng,
}

impl Series {
    /// Creates a new series with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use rpsrs::{Move, Series, SeriesMode};
    ///
    /// let mut series = Series::new(SeriesMode::Rounds(1), 42);
    /// let round = series.play(Move::Rock).unwrap();
    /// assert_eq!(round.player_move, Move::Rock);
    /// assert!(series.is_over());
    /// ```
    #[must_use]
    pub fn new(mode: SeriesMode, seed: u64) -> Self {
        Self {
            mode,
            result: SeriesResult::default(),
            abandoned: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the series mode.
    #[must_use]
    pub const fn mode(&self) -> SeriesMode {
        self.mode
    }

    /// Returns the tally so far.
    #[must_use]
    pub const fn result(&self) -> SeriesResult {
        self.result
    }

    /// Returns the 1-based number of the round about to be played.
    #[must_use]
    pub const fn next_round(&self) -> u64 {
        self.result.rounds_played + 1
    }

    /// Returns whether the player stopped the series early.
    #[must_use]
    pub const fn is_abandoned(&self) -> bool {
        self.abandoned
    }

    /// Returns whether no further rounds can be played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        if self.abandoned {
            return true;
        }
        let played = self.result.rounds_played;
        let cap = u64::from(self.mode.round_cap());
        match self.mode.target_wins() {
            None => played >= cap,
            Some(target) => {
                let target = u64::from(target);
                self.result.player_wins >= target
                    || self.result.computer_wins >= target
                    || played >= cap
            }
        }
    }

    /// Plays a round against a computer move drawn uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns an error if the series is already over.
    pub fn play(&mut self, player: Move) -> Result<RoundResult, SeriesError> {
        if self.is_over() {
            return Err(SeriesError::Finished);
        }
        let computer = Move::random(&mut self.rng);
        self.play_against(player, computer)
    }

    /// Plays a round against a known computer move.
    ///
    /// # Errors
    ///
    /// Returns an error if the series is already over.
    pub fn play_against(
        &mut self,
        player: Move,
        computer: Move,
    ) -> Result<RoundResult, SeriesError> {
        if self.is_over() {
            return Err(SeriesError::Finished);
        }

        let round = RoundResult {
            player_move: player,
            computer_move: computer,
            outcome: resolve(player, computer),
        };
        self.result.record(round.outcome);
        log::debug!(
            "round {}: {} vs {} -> {}",
            self.result.rounds_played,
            player,
            computer,
            round.outcome
        );

        Ok(round)
    }

    /// Stops the series before it is over.
    ///
    /// Rounds already played still count, and the series is judged on the
    /// wins so far.
    pub fn abandon(&mut self) {
        if !self.is_over() {
            self.abandoned = true;
        }
    }

    /// Returns the series-level verdict.
    ///
    /// A series still running is [`SeriesOutcome::Undecided`]. In rounds
    /// mode, and for an abandoned series of either mode, the side with more
    /// wins takes the series and equal wins tie. A best-of series played out
    /// must be won by reaching the majority; running out of rounds first
    /// leaves it undecided.
    #[must_use]
    pub fn outcome(&self) -> SeriesOutcome {
        if !self.is_over() {
            return SeriesOutcome::Undecided;
        }

        let SeriesResult {
            player_wins,
            computer_wins,
            ..
        } = self.result;

        match self.mode.target_wins() {
            Some(target) if !self.abandoned => {
                let target = u64::from(target);
                if player_wins >= target {
                    SeriesOutcome::Won
                } else if computer_wins >= target {
                    SeriesOutcome::Lost
                } else {
                    SeriesOutcome::Undecided
                }
            }
            _ => match player_wins.cmp(&computer_wins) {
                core::cmp::Ordering::Greater => SeriesOutcome::Won,
                core::cmp::Ordering::Less => SeriesOutcome::Lost,
                core::cmp::Ordering::Equal => SeriesOutcome::Tied,
            },
        }
    }
}
