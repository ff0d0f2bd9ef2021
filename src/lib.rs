//! A rock-paper-scissors game against a random computer opponent, with
//! persistent scores.
//!
//! The crate provides a [`Series`] type that runs one play session in rounds
//! or best-of mode, a [`Session`] that folds every round into
//! [`AllTimeStats`] and applies the series reward, and a [`StatsStore`] that
//! keeps the statistics and the reward [`Config`] on disk. The [`cli`] module
//! holds the interactive menu used by the `rpsrs` binary.
//!
//! # Example
//!
//! ```
//! use rpsrs::{Move, Series, SeriesMode, SeriesOutcome};
//!
//! let mut series = Series::new(SeriesMode::BestOf(3), 7);
//! series.play_against(Move::Rock, Move::Scissors).unwrap();
//! series.play_against(Move::Paper, Move::Rock).unwrap();
//! assert!(series.is_over());
//! assert_eq!(series.outcome(), SeriesOutcome::Won);
//! ```

pub mod cli;
pub mod error;
pub mod moves;
pub mod options;
pub mod result;
pub mod rules;
pub mod series;
pub mod session;
pub mod stats;
pub mod store;

// Re-export main types
pub use error::{ParseModeError, ParseMoveError, SeriesError, StoreError};
pub use moves::Move;
pub use options::Config;
pub use result::{Outcome, Percentages, RoundResult, SeriesOutcome, SeriesResult, percentage};
pub use rules::resolve;
pub use series::{ModeKind, Series, SeriesMode};
pub use session::{Session, Settlement};
pub use stats::AllTimeStats;
pub use store::StatsStore;
