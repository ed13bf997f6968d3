//! Precomputed score database
//!
//! Maps every guess to its hint score map so opener tables can be consumed
//! without recomputation. The JSON layout is
//! `{ "WORD": { "C...P": { "p": 0.01, "I": 6.64 }, ... }, ... }`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Word;
use crate::parallel::ParallelExecutor;
use crate::solver::ScoredGuess;
use crate::solver::entropy::{ScoreMap, score_map};

/// Errors raised while reading or writing a database
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("could not access score database {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid score database {path}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Word -> hint score map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreDb(BTreeMap<Word, ScoreMap>);

impl ScoreDb {
    /// Score every guess against the answers, in parallel
    #[must_use]
    pub fn compute(executor: &ParallelExecutor, guesses: &[Word], answers: &[Word]) -> Self {
        let maps = executor.map("scoring guesses", guesses, |guess| score_map(guess, answers));
        let db: BTreeMap<Word, ScoreMap> = guesses.iter().copied().zip(maps).collect();
        info!("scored {} guesses against {} answers", db.len(), answers.len());
        Self(db)
    }

    /// Read a database from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be opened or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatabaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| DatabaseError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the database as JSON
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DatabaseError> {
        let path = path.as_ref();
        let io_error = |source| DatabaseError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        serde_json::to_writer(&mut writer, self).map_err(|source| DatabaseError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(io_error)
    }

    #[must_use]
    pub fn get(&self, word: &Word) -> Option<&ScoreMap> {
        self.0.get(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entropy of every word, `Σ p·I` over its score map
    #[must_use]
    pub fn entropies(&self) -> BTreeMap<Word, f64> {
        self.0
            .iter()
            .map(|(word, scores)| (*word, scores.values().map(|s| s.p * s.info).sum()))
            .collect()
    }

    /// Words by entropy, best first; equal entropies in alphabetical order
    #[must_use]
    pub fn ranked(&self) -> Vec<ScoredGuess> {
        let mut ranked: Vec<ScoredGuess> = self
            .entropies()
            .into_iter()
            .map(|(word, entropy)| ScoredGuess { word, entropy })
            .collect();
        ranked.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
        ranked
    }
}
