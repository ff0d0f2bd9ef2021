//! Play session: all-time bookkeeping around series.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{SeriesError, StoreError};
use crate::moves::Move;
use crate::options::Config;
use crate::result::{RoundResult, SeriesOutcome, SeriesResult};
use crate::series::{Series, SeriesMode};
use crate::stats::AllTimeStats;
use crate::store::StatsStore;

/// Random draws a demo makes before settling for a scripted decisive round.
pub const DEMO_ATTEMPTS: usize = 10;

/// Draws random move pairs until one is decisive, giving up after
/// `attempts` draws with rock against scissors.
#[must_use]
pub fn decisive_moves<R: Rng>(rng: &mut R, attempts: usize) -> (Move, Move) {
    (0..attempts)
        .map(|_| (Move::random(&mut *rng), Move::random(&mut *rng)))
        .find(|&(player, computer)| player != computer)
        .unwrap_or((Move::Rock, Move::Scissors))
}

/// What happened when a series was closed out.
#[derive(Debug)]
pub struct Settlement {
    /// Final tally of the series.
    pub result: SeriesResult,
    /// Series-level verdict.
    pub outcome: SeriesOutcome,
    /// Points credited for the series.
    pub reward: u64,
    /// All-time points after the reward.
    pub total_points: u64,
    /// Message configured for the verdict.
    pub message: String,
    /// Whether the updated statistics reached disk.
    pub saved: Result<(), StoreError>,
}

/// Loaded configuration and all-time statistics, plus the random source
/// that seeds each series.
///
/// Statistics change in memory after every round and are written once per
/// settled series. A failed write leaves the in-memory values intact.
pub struct Session {
    store: StatsStore,
    config: Config,
    stats: AllTimeStats,
    rng: ChaCha8Rng,
}

impl Session {
    /// Opens a session, loading both records from `store`.
    #[must_use]
    pub fn open(store: StatsStore, seed: u64) -> Self {
        let config = store.load_config();
        let stats = store.load_stats();
        log::debug!(
            "opened session in {} ({} rounds, {} points)",
            store.dir().display(),
            stats.rounds_played,
            stats.points
        );
        Self::new(store, config, stats, seed)
    }

    /// Creates a session from already loaded values.
    #[must_use]
    pub fn new(store: StatsStore, config: Config, stats: AllTimeStats, seed: u64) -> Self {
        Self {
            store,
            config,
            stats,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the store backing this session.
    #[must_use]
    pub const fn store(&self) -> &StatsStore {
        &self.store
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current all-time statistics.
    #[must_use]
    pub const fn stats(&self) -> &AllTimeStats {
        &self.stats
    }

    /// Starts a series seeded from the session's random source.
    pub fn start_series(&mut self, mode: SeriesMode) -> Series {
        Series::new(mode, self.rng.random())
    }

    /// Plays a round against a random computer move and counts it in the
    /// all-time statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the series is already over.
    pub fn play_round(
        &mut self,
        series: &mut Series,
        player: Move,
    ) -> Result<RoundResult, SeriesError> {
        let round = series.play(player)?;
        self.record_round(&round);
        Ok(round)
    }

    /// Plays a round against a known computer move and counts it in the
    /// all-time statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the series is already over.
    pub fn play_round_against(
        &mut self,
        series: &mut Series,
        player: Move,
        computer: Move,
    ) -> Result<RoundResult, SeriesError> {
        let round = series.play_against(player, computer)?;
        self.record_round(&round);
        Ok(round)
    }

    const fn record_round(&mut self, round: &RoundResult) {
        self.stats.record(round.outcome);
    }

    /// Applies the series reward and saves the statistics.
    ///
    /// Consumes the series, so each one pays out once.
    pub fn settle(&mut self, series: Series) -> Settlement {
        let outcome = series.outcome();
        let reward = self.config.reward_for(outcome);
        let total_points = self.stats.award(reward);
        let saved = self.store.save_stats(&self.stats);
        if let Err(err) = &saved {
            log::warn!("statistics not saved: {err}");
        }
        log::debug!("series settled: {outcome:?}, +{reward} points");

        Settlement {
            result: series.result(),
            outcome,
            reward,
            total_points,
            message: self.config.message_for(outcome).to_owned(),
            saved,
        }
    }

    /// Plays one automated decisive round and settles it like a one-round
    /// series.
    ///
    /// # Errors
    ///
    /// Never fails in practice: the fresh one-round series always accepts
    /// its first round.
    pub fn demo(&mut self) -> Result<(RoundResult, Settlement), SeriesError> {
        let (player, computer) = decisive_moves(&mut self.rng, DEMO_ATTEMPTS);
        let mut series = self.start_series(SeriesMode::Rounds(1));
        let round = self.play_round_against(&mut series, player, computer)?;
        Ok((round, self.settle(series)))
    }

    /// Replaces and saves the configuration.
    ///
    /// The new configuration is kept for this session even if the save
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn update_config(&mut self, config: Config) -> Result<(), StoreError> {
        self.config = config;
        self.store.save_config(&self.config)
    }

    /// Zeroes the all-time statistics and saves them.
    ///
    /// The in-memory statistics are zeroed even if the save fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.stats = AllTimeStats::default();
        self.store.reset().map(|_| ())
    }
}
