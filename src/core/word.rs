//! Wordle word representation
//!
//! A `Word` is five uppercase ASCII letters stored inline, so it is `Copy` and
//! cheap to share across worker threads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of letters in every word
pub const WORD_SIZE: usize = 5;

/// A five letter word, normalized to uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_SIZE]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_SIZE} letters, got {0}")]
    InvalidLength(usize),

    #[error("word '{0}' must contain only ASCII letters")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from raw text
    ///
    /// Input is case-insensitive and stored uppercase. Surrounding whitespace
    /// is not trimmed; callers reading lines trim first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything but ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let length = text.chars().count();
        if length != WORD_SIZE {
            return Err(WordError::InvalidLength(length));
        }

        let bytes = text.as_bytes();
        if bytes.len() != WORD_SIZE || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters(text.to_string()));
        }

        let mut letters = [0u8; WORD_SIZE];
        for (slot, &byte) in letters.iter_mut().zip(bytes) {
            *slot = byte.to_ascii_uppercase();
        }
        Ok(Self(letters))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Letters are validated ASCII on construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the letters as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_SIZE] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the word contains a specific (uppercase) letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Number of times a letter occurs in the word
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&l| l == letter).count()
    }

    /// Occurrence count of every letter, indexed by `letter - b'A'`
    #[must_use]
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &letter in &self.0 {
            counts[usize::from(letter - b'A')] += 1;
        }
        counts
    }

    /// Letters that appear more than once, in first-occurrence order
    #[must_use]
    pub fn repeated_letters(&self) -> Vec<u8> {
        let counts = self.letter_counts();
        let mut repeated = Vec::new();
        for &letter in &self.0 {
            if counts[usize::from(letter - b'A')] > 1 && !repeated.contains(&letter) {
                repeated.push(letter);
            }
        }
        repeated
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Word {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}
