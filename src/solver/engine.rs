//! Main Wordle solver interface

use log::{debug, warn};
use rustc_hash::FxHashSet;
use thiserror::Error;

use super::entropy::{ENTROPY_EPSILON, ScoredGuess, distinct_entropies, rank};
use crate::config::SolverConfig;
use crate::core::Word;
use crate::game::GameError;
use crate::parallel::{ExecutorError, ParallelExecutor};
use crate::wordlists::Lexicon;

/// Errors raised while choosing a guess
#[derive(Debug, Error)]
pub enum SolverError {
    /// The hints so far rule out every answer
    #[error("no answer is consistent with the hints so far")]
    NoConsistentCandidate,

    #[error("there are no guesses to rank")]
    EmptyGuessPool,

    #[error(transparent)]
    Executor(#[from] ExecutorError),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Entropy-maximizing guess selection
///
/// Borrows the shared lexicon, configuration and executor; it holds no game
/// state, so one solver can serve any number of games.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
    config: &'a SolverConfig,
    executor: &'a ParallelExecutor,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(
        lexicon: &'a Lexicon,
        config: &'a SolverConfig,
        executor: &'a ParallelExecutor,
    ) -> Self {
        Self {
            lexicon,
            config,
            executor,
        }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[must_use]
    pub const fn config(&self) -> &'a SolverConfig {
        self.config
    }

    #[must_use]
    pub const fn executor(&self) -> &'a ParallelExecutor {
        self.executor
    }

    /// First guess of a game
    ///
    /// The configured opener is used when it is a known word; otherwise the
    /// best guess against every answer is computed, which ranks the whole
    /// word list and is slow.
    ///
    /// # Errors
    ///
    /// Propagates `best_guess` errors when an opener has to be computed.
    pub fn opening(&self) -> Result<Word, SolverError> {
        if let Some(text) = &self.config.opening {
            match self.lexicon.find(text) {
                Some(word) => return Ok(word),
                None => warn!("opening word {text} is not in the word list, computing one"),
            }
        }
        self.best_guess(self.lexicon.answers(), self.config.max_guesses)
            .map(|scored| scored.word)
    }

    /// Bits of knowledge represented by a pool of `possible` answers
    #[must_use]
    pub fn information_value(&self, possible: usize) -> f64 {
        if possible == 0 {
            return 0.0;
        }
        (self.lexicon.answers().len() as f64 / possible as f64).log2()
    }

    /// Whether to rank the full word list rather than the possible answers
    ///
    /// Early on, when little is known and guesses remain, a non-answer that
    /// splits the pool better beats guessing a candidate outright.
    #[must_use]
    pub fn should_explore(&self, possible: usize, guesses_remaining: usize) -> bool {
        self.information_value(possible) < self.config.iv_threshold && guesses_remaining > 1
    }

    /// Pick the next guess for a board
    ///
    /// # Algorithm
    /// 1. Drop anything outside the answer list; none left is fatal
    /// 2. A single candidate is guessed directly
    /// 3. Explore (rank all words) or exploit (rank the candidates) by the
    ///    information already known
    /// 4. If exploiting with guesses to spare and the top of the ranking is
    ///    a near tie, rank all words instead
    /// 5. From an all-words ranking, prefer a candidate tied with the best
    ///
    /// # Errors
    ///
    /// Returns `SolverError::NoConsistentCandidate` when `possible` holds no
    /// answer.
    pub fn best_guess(
        &self,
        possible: &[Word],
        guesses_remaining: usize,
    ) -> Result<ScoredGuess, SolverError> {
        let possible: Vec<Word> = possible
            .iter()
            .copied()
            .filter(|word| self.lexicon.is_answer(word))
            .collect();

        match possible.as_slice() {
            [] => return Err(SolverError::NoConsistentCandidate),
            [only] => {
                return Ok(ScoredGuess {
                    word: *only,
                    entropy: 0.0,
                });
            }
            _ => {}
        }

        let explore = self.should_explore(possible.len(), guesses_remaining);
        debug!(
            "{} possible answers, {:.2} bits known, {}",
            possible.len(),
            self.information_value(possible.len()),
            if explore { "exploring" } else { "exploiting" }
        );

        let (ranked, from_all_words) = if explore {
            (rank(self.executor, self.lexicon.words(), &possible), true)
        } else {
            let ranked = rank(self.executor, &possible, &possible);
            if self.is_tied(&ranked, guesses_remaining) {
                debug!("top guesses are tied, ranking all words");
                (rank(self.executor, self.lexicon.words(), &possible), true)
            } else {
                (ranked, false)
            }
        };

        let top = *ranked.first().ok_or(SolverError::EmptyGuessPool)?;
        if !from_all_words {
            return Ok(top);
        }

        let candidates: FxHashSet<Word> = possible.iter().copied().collect();
        Ok(ranked
            .iter()
            .take_while(|scored| top.entropy - scored.entropy < ENTROPY_EPSILON)
            .find(|scored| candidates.contains(&scored.word))
            .copied()
            .unwrap_or(top))
    }

    /// Too few distinct entropies among the top `tie_window` entries, however
    /// many there are
    fn is_tied(&self, ranked: &[ScoredGuess], guesses_remaining: usize) -> bool {
        guesses_remaining > 1
            && distinct_entropies(ranked, self.config.tie_window) < self.config.min_distinct
    }
}
