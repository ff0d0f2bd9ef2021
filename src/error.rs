//! Error types for game and storage operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing a persisted record.
///
/// Reads never produce this error: a missing or damaged record is replaced
/// by its default value.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// The file or directory being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// Record could not be serialized.
    #[error("failed to encode record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when setting up or playing a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// Round count is zero.
    #[error("round count must be greater than zero")]
    ZeroRounds,
    /// Best-of count is even, so a majority is not guaranteed.
    #[error("best-of count must be odd, got {0}")]
    EvenBestOf(u32),
    /// Series is already over.
    #[error("series is already over")]
    Finished,
}

/// Input is not one of `rock`, `paper` or `scissors`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized move: {0:?}")]
pub struct ParseMoveError(pub String);

/// Input names neither rounds mode nor best-of mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized play mode: {0:?}")]
pub struct ParseModeError(pub String);
