use crate::options::Options;
use crate::stats::{LoadError, SaveError, Stats};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Config {
    /// Default gameplay options for new sessions
    #[serde(default)]
    pub options: Options,

    /// Settings about data files
    #[serde(default)]
    pub files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the filepath at which statistics should be stored: the file
    /// given in the configuration or, if that is not set, the default
    /// statistics file path.  Return `None` if no path is present in the
    /// configuration and the default path could not be computed.
    fn stats_file(&self) -> Option<Cow<'_, Path>> {
        self.files
            .stats_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| Stats::default_path().map(Cow::from))
    }

    /// Load statistics from the configured file.
    ///
    /// If `self.files.save_stats` is `false`, default statistics are
    /// returned without reading anything from disk.
    pub fn load_stats(&self) -> Result<Stats, LoadError> {
        if !self.files.save_stats {
            return Ok(Stats::default());
        }
        if let Some(p) = self.stats_file() {
            Stats::load(&p)
        } else {
            Err(LoadError::no_path())
        }
    }

    /// Save the given statistics to the configured file.
    ///
    /// If `self.files.save_stats` is `false`, nothing is saved.
    pub fn save_stats(&self, stats: &Stats) -> Result<(), SaveError> {
        if !self.files.save_stats {
            return Ok(());
        }
        if let Some(p) = self.stats_file() {
            stats.save(&p)
        } else {
            Err(SaveError::no_path())
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct FileConfig {
    /// Path at which statistics should be stored
    pub stats_file: Option<PathBuf>,

    /// Whether to load & save statistics in a file
    pub save_stats: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            stats_file: None,
            save_stats: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
