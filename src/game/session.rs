//! A single Wordle game
//!
//! The game owns its secret answer and guess history and borrows the shared
//! lexicon for validation and candidate filtering.

use std::fmt;

use thiserror::Error;

use crate::constraints::{ConstraintSet, aggregate, filter};
use crate::core::{Hint, Word, WordError};
use crate::wordlists::Lexicon;

/// Default number of guesses in a game
pub const MAX_GUESSES: usize = 6;

/// Errors raised while playing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("{0} is not in the word list")]
    UnknownWord(Word),

    /// The hints rule out every answer
    #[error("no answer is consistent with the hints so far")]
    Contradiction,
}

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// One game against a fixed answer
#[derive(Debug, Clone)]
pub struct Game<'a> {
    answer: Word,
    lexicon: &'a Lexicon,
    max_guesses: usize,
    history: Vec<(Word, Hint)>,
}

impl<'a> Game<'a> {
    #[must_use]
    pub const fn new(answer: Word, lexicon: &'a Lexicon) -> Self {
        Self {
            answer,
            lexicon,
            max_guesses: MAX_GUESSES,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Play a guess and return its hint
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameOver` once the game is finished,
    /// `GameError::InvalidWord` for malformed input and
    /// `GameError::UnknownWord` for words outside the lexicon. The game is
    /// unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Word;
    /// use wordle_entropy::game::Game;
    /// use wordle_entropy::wordlists::Lexicon;
    ///
    /// let lexicon = Lexicon::embedded().unwrap();
    /// let mut game = Game::new(Word::new("chest").unwrap(), &lexicon);
    ///
    /// assert_eq!(game.guess("crane").unwrap().basic(), "C...P");
    /// assert!(game.guess("chest").unwrap().is_win());
    /// assert_eq!(game.score(), Some(2));
    /// ```
    pub fn guess(&mut self, raw: &str) -> Result<Hint, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let word = Word::new(raw.trim())?;
        if !self.lexicon.contains(&word) {
            return Err(GameError::UnknownWord(word));
        }

        let hint = Hint::encode(&word, &self.answer);
        self.history.push((word, hint));
        Ok(hint)
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.last_hint().is_some_and(|hint| hint.is_win()) {
            GameState::Won
        } else if self.history.len() >= self.max_guesses {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state() != GameState::InProgress
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state() == GameState::Won
    }

    /// Guesses taken, once won
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        self.is_won().then_some(self.history.len())
    }

    #[must_use]
    pub const fn answer(&self) -> Word {
        self.answer
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Hint)] {
        &self.history
    }

    #[must_use]
    pub fn last_hint(&self) -> Option<Hint> {
        self.history.last().map(|&(_, hint)| hint)
    }

    #[must_use]
    pub fn constraints(&self) -> ConstraintSet {
        aggregate(&self.history)
    }

    /// Answers consistent with the hints so far
    ///
    /// # Errors
    ///
    /// Returns `GameError::Contradiction` when no answer is left, which only
    /// happens if the secret is not in the answer list.
    pub fn possible_answers(&self) -> Result<Vec<Word>, GameError> {
        consistent_answers(self.lexicon, &self.history)
    }

    /// Bits of knowledge gained so far, `log2(|answers| / |possible answers|)`
    ///
    /// # Errors
    ///
    /// Returns `GameError::Contradiction` when no answer is left.
    pub fn information_value(&self) -> Result<f64, GameError> {
        let possible = self.possible_answers()?.len();
        Ok((self.lexicon.answers().len() as f64 / possible as f64).log2())
    }
}

/// Answers of `lexicon` consistent with a guess history
///
/// # Errors
///
/// Returns `GameError::Contradiction` when the hints rule out every answer.
pub fn consistent_answers(
    lexicon: &Lexicon,
    history: &[(Word, Hint)],
) -> Result<Vec<Word>, GameError> {
    let possible = filter(lexicon.answers(), &aggregate(history));
    if possible.is_empty() {
        return Err(GameError::Contradiction);
    }
    Ok(possible)
}

impl fmt::Display for Game<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (word, hint) in &self.history {
            let spaced: Vec<String> = word.as_str().chars().map(|c| c.to_string()).collect();
            writeln!(f, "{}", spaced.join(" "))?;
            writeln!(f, "{hint}")?;
        }
        Ok(())
    }
}
