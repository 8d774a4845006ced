use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Lifetime gameplay statistics, persisted as a single JSON document.
///
/// The document uses camelCase keys and every field has a default, so blobs
/// written by older versions (or a missing file) load cleanly.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stats {
    pub total_games: u32,
    pub total_wins: u32,
    pub total_food_eaten: u32,
    pub best_score: u32,
    /// Mean score per game, rounded half-up
    pub average_score: u32,
    /// The longest snake ever achieved, in cells
    pub longest_snake: u32,
    /// When the most recent game was recorded
    pub last_played: Option<DateTime<Utc>>,
    /// Running sum backing `average_score`; kept so the average stays exact
    /// across sessions
    total_score: u64,
}

/// What a finished session contributes to the lifetime statistics
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SessionSummary {
    pub score: u32,
    pub food_eaten: u32,
    pub snake_length: usize,
    pub won: bool,
}

impl Stats {
    /// Return the default statistics file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("stats.json"))
    }

    /// Fold one finished session into the totals and stamp `last_played`
    pub fn record_game(&mut self, session: &SessionSummary) {
        self.total_games += 1;
        if session.won {
            self.total_wins += 1;
        }
        self.total_food_eaten += session.food_eaten;
        self.total_score += u64::from(session.score);
        self.best_score = self.best_score.max(session.score);
        let games = u64::from(self.total_games);
        self.average_score =
            u32::try_from((self.total_score + games / 2) / games).unwrap_or(u32::MAX);
        self.longest_snake = self
            .longest_snake
            .max(u32::try_from(session.snake_length).unwrap_or(u32::MAX));
        self.last_played = Some(Utc::now());
    }

    /// Fraction of recorded games that ended in a win, as a percentage.
    /// Zero when no games have been recorded.
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.total_wins) / f64::from(self.total_games) * 100.0
        }
    }

    /// Discard all recorded statistics
    pub fn reset(&mut self) {
        *self = Stats::default();
    }

    /// Write the statistics to `path` as JSON, creating parent directories
    /// as needed
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(self).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        Ok(())
    }

    /// Read statistics from `path`.  A missing or unparseable file yields
    /// the default (all-zero) statistics; only an actual read failure is an
    /// error.
    pub fn load(path: &Path) -> Result<Stats, LoadError> {
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Stats::default()),
            Err(e) => return Err(LoadError::read(e)),
        };
        Ok(serde_json::from_slice(&src).unwrap_or_default())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save statistics to disk")]
pub struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    pub(crate) fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize statistics")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write statistics to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read statistics from disk")]
pub struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    pub(crate) fn no_path() -> Self {
        LoadError(LoadErrorSource::NoPath)
    }

    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read statistics file")]
    Read(#[source] std::io::Error),
}
