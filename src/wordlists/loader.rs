//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::{Word, WordError};

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: invalid word")]
    InvalidEntry {
        path: PathBuf,
        line: usize,
        #[source]
        source: WordError,
    },
}

/// Load words from a newline-delimited file
///
/// Blank lines are skipped and entries are normalized to uppercase. Any other
/// invalid entry fails the whole load with its line number.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::InvalidEntry` for the first malformed line.
///
/// # Examples
/// ```no_run
/// use wordle_entropy::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_lines(&content).map_err(|(line, source)| LoadError::InvalidEntry {
        path: path.to_path_buf(),
        line,
        source,
    })
}

/// Parse newline-delimited words, reporting the 1-based line of the first
/// invalid entry
///
/// # Errors
///
/// Returns the line number and the word error of the first invalid line.
pub fn parse_lines(content: &str) -> Result<Vec<Word>, (usize, WordError)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Word::new(line.trim()).map_err(|e| (index + 1, e)))
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// Embedded lists are validated by the build script, so nothing is dropped
/// here in practice; entries that fail anyway are skipped.
///
/// # Examples
/// ```
/// use wordle_entropy::wordlists::loader::words_from_slice;
/// use wordle_entropy::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
