//! Solver configuration
//!
//! Plain settings struct shared by the solver, the bot and the commands.
//! Values come from built-in defaults, optionally overlaid by a JSON file,
//! then by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parallel::FailurePolicy;

/// Guess limit for a multi-board game
pub const MULTI_MAX_GUESSES: usize = 9;

/// Errors raised while reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Tunables for guess selection and parallel evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Below this many bits of knowledge the solver explores the full list
    pub iv_threshold: f64,
    /// Guesses allowed per game
    pub max_guesses: usize,
    /// Number of top ranked guesses inspected for ties
    pub tie_window: usize,
    /// Fewer distinct entropies than this in the window counts as a tie
    pub min_distinct: usize,
    /// In multi-board play, guess a board's last candidate before ranking
    pub finish_singletons: bool,
    /// First guess of every game; `None` computes one
    pub opening: Option<String>,
    /// Worker threads, 0 for one per core
    pub concurrency: usize,
    pub failure_policy: FailurePolicy,
    /// Show progress bars for long batches
    pub progress: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            iv_threshold: 9.0,
            max_guesses: 6,
            tie_window: 5,
            min_distinct: 3,
            finish_singletons: true,
            opening: Some("CRANE".to_string()),
            concurrency: 0,
            failure_policy: FailurePolicy::Propagate,
            progress: false,
        }
    }
}

impl SolverConfig {
    /// Read a config from a JSON file; missing fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_entropy::config::SolverConfig;
    ///
    /// let config = SolverConfig::from_file("solver.json").unwrap();
    /// println!("explore below {} bits", config.iv_threshold);
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert!((config.iv_threshold - 9.0).abs() < f64::EPSILON);
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.tie_window, 5);
        assert_eq!(config.min_distinct, 3);
        assert!(config.finish_singletons);
        assert_eq!(config.opening.as_deref(), Some("CRANE"));
        assert_eq!(config.failure_policy, FailurePolicy::Propagate);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SolverConfig =
            serde_json::from_str(r#"{"iv_threshold": 7.5, "failure_policy": "skip"}"#).unwrap();
        assert!((config.iv_threshold - 7.5).abs() < f64::EPSILON);
        assert_eq!(config.failure_policy, FailurePolicy::Skip);
        assert_eq!(config.max_guesses, 6);
    }

    #[test]
    fn null_opening_means_computed() {
        let config: SolverConfig = serde_json::from_str(r#"{"opening": null}"#).unwrap();
        assert!(config.opening.is_none());
    }

    #[test]
    fn from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "wordle_entropy_config_{}.json",
            std::process::id()
        ));
        let mut config = SolverConfig::default();
        config.concurrency = 2;
        fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = SolverConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!(
            "wordle_entropy_bad_config_{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();

        let err = SolverConfig::from_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
