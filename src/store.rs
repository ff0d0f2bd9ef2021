//! On-disk persistence for configuration and all-time statistics.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::options::Config;
use crate::stats::AllTimeStats;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "RPS_HOME";

/// File name of the configuration record.
pub const CONFIG_FILE: &str = "config.json";

/// File name of the statistics record.
pub const STATS_FILE: &str = "score.json";

/// Reads and writes the two persisted records under one directory.
///
/// Loads never fail: a missing, unreadable or malformed record yields the
/// default value so the game stays playable. Saves report every failure so
/// the caller can warn the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsStore {
    dir: PathBuf,
}

impl StatsStore {
    /// Creates a store rooted at `dir`. Nothing is touched on disk until the
    /// first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store in the per-user data directory.
    ///
    /// Uses `$RPS_HOME` if set, otherwise `.rps` under the home directory,
    /// otherwise `.rps` in the working directory.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(default_dir())
    }

    /// Returns the data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the configuration record.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Returns the path of the statistics record.
    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.dir.join(STATS_FILE)
    }

    /// Loads the configuration, falling back to defaults.
    #[must_use]
    pub fn load_config(&self) -> Config {
        load_record(&self.config_path())
    }

    /// Saves the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the record cannot be written.
    pub fn save_config(&self, config: &Config) -> Result<(), StoreError> {
        self.save_record(&self.config_path(), config)
    }

    /// Loads the all-time statistics, falling back to zeros.
    ///
    /// A record whose outcome counters do not add up to `rounds_played` is
    /// repaired before it is returned.
    #[must_use]
    pub fn load_stats(&self) -> AllTimeStats {
        let path = self.stats_path();
        let mut stats: AllTimeStats = load_record(&path);
        if !stats.is_consistent() {
            log::warn!(
                "{}: rounds_played {} does not match outcome counters, repairing",
                path.display(),
                stats.rounds_played
            );
            stats.repair();
        }
        stats
    }

    /// Saves the all-time statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the record cannot be written.
    pub fn save_stats(&self, stats: &AllTimeStats) -> Result<(), StoreError> {
        self.save_record(&self.stats_path(), stats)
    }

    /// Zeroes and saves the all-time statistics. Configuration is untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn reset(&self) -> Result<AllTimeStats, StoreError> {
        let stats = AllTimeStats::default();
        self.save_stats(&stats)?;
        log::info!("statistics reset");
        Ok(stats)
    }

    /// Writes `value` next to `path` and renames it into place, so a crash
    /// mid-write never leaves a truncated record behind.
    fn save_record<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let json = serde_json::to_string_pretty(value)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("saved {}", path.display());
        Ok(())
    }
}

fn load_record<T: DeserializeOwned + Default>(path: &Path) -> T {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("{} not found, using defaults", path.display());
            return T::default();
        }
        Err(err) => {
            log::warn!("failed to read {}: {err}, using defaults", path.display());
            return T::default();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|err| {
        log::warn!("failed to parse {}: {err}, using defaults", path.display());
        T::default()
    })
}

fn default_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map_or_else(|| PathBuf::from(".rps"), |home| PathBuf::from(home).join(".rps"))
}
