//! The shared, read-only word universe
//!
//! A `Lexicon` pairs the full list of guessable words with the (usually
//! smaller) list of words that may be the secret answer. It is built once and
//! passed by reference to games, solvers and workers.

use std::path::Path;

use log::debug;
use rustc_hash::FxHashSet;
use thiserror::Error;

use super::loader::{LoadError, load_from_file, words_from_slice};
use super::{ANSWERS, WORDS};
use crate::core::Word;

/// Errors raised while assembling a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("the word list is empty")]
    Empty,

    #[error("answer {0} is not in the word list")]
    AnswerNotInWords(Word),
}

/// Guessable words plus the answer subset
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
    answers: Vec<Word>,
    index: FxHashSet<Word>,
    answer_index: FxHashSet<Word>,
}

impl Lexicon {
    /// Build a lexicon from word and answer lists
    ///
    /// Duplicates are dropped, keeping the first occurrence so the order of the
    /// input is preserved. When `answers` is `None` every word is a possible
    /// answer.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::Empty` for an empty word list (or an explicitly
    /// empty answer list) and `LexiconError::AnswerNotInWords` when an answer
    /// is not guessable.
    pub fn new(words: Vec<Word>, answers: Option<Vec<Word>>) -> Result<Self, LexiconError> {
        let words = dedup(words);
        if words.is_empty() {
            return Err(LexiconError::Empty);
        }
        let index: FxHashSet<Word> = words.iter().copied().collect();

        let answers = match answers {
            Some(answers) => {
                let answers = dedup(answers);
                if answers.is_empty() {
                    return Err(LexiconError::Empty);
                }
                if let Some(stray) = answers.iter().find(|a| !index.contains(a)) {
                    return Err(LexiconError::AnswerNotInWords(*stray));
                }
                answers
            }
            None => words.clone(),
        };

        let answer_index = answers.iter().copied().collect();
        debug!(
            "lexicon ready: {} words, {} answers",
            words.len(),
            answers.len()
        );
        Ok(Self {
            words,
            answers,
            index,
            answer_index,
        })
    }

    /// Lexicon from the lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded lists are inconsistent, which the build
    /// script rules out.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::new(words_from_slice(WORDS), Some(words_from_slice(ANSWERS)))
    }

    /// Lexicon from newline-delimited files
    ///
    /// # Errors
    ///
    /// Propagates load errors and the validation errors of [`Lexicon::new`].
    pub fn from_files(
        words_path: impl AsRef<Path>,
        answers_path: Option<impl AsRef<Path>>,
    ) -> Result<Self, LexiconError> {
        let words = load_from_file(words_path)?;
        let answers = answers_path.map(load_from_file).transpose()?;
        Self::new(words, answers)
    }

    /// All guessable words, in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words that may be the secret answer, in load order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Check whether a word may be guessed
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Check whether a word may be the secret answer
    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.answer_index.contains(word)
    }

    /// Look up raw text, returning the word only if it is guessable
    #[must_use]
    pub fn find(&self, text: &str) -> Option<Word> {
        Word::new(text).ok().filter(|word| self.contains(word))
    }
}

fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.into_iter().filter(|word| seen.insert(*word)).collect()
}
