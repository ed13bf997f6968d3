//! Guess selection across several boards at once
//!
//! In multi-board play every guess lands on all unsolved boards, so a guess
//! is worth the sum of the information it yields on each of them.

use log::debug;
use rustc_hash::FxHashSet;

use super::engine::{Solver, SolverError};
use super::entropy::{ENTROPY_EPSILON, ScoredGuess, entropy};
use crate::core::Word;

impl Solver<'_> {
    /// Pick one guess for several boards
    ///
    /// `boards` holds the possible answers of every unsolved board. With
    /// `finish_singletons` set, a board down to one candidate is finished
    /// first. Otherwise each board chooses
    /// its guess pool with the same explore/exploit rule as a single board,
    /// every word of the combined pools is scored on all boards and the
    /// highest total wins, earlier words in the lexicon winning ties.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::NoConsistentCandidate` if any board has no
    /// answer left and `SolverError::EmptyGuessPool` if there are no boards.
    pub fn best_guess_multi(
        &self,
        boards: &[Vec<Word>],
        guesses_remaining: usize,
    ) -> Result<ScoredGuess, SolverError> {
        let lexicon = self.lexicon();
        let boards: Vec<Vec<Word>> = boards
            .iter()
            .map(|board| board.iter().copied().filter(|w| lexicon.is_answer(w)).collect())
            .collect();

        if boards.is_empty() {
            return Err(SolverError::EmptyGuessPool);
        }
        if boards.iter().any(Vec::is_empty) {
            return Err(SolverError::NoConsistentCandidate);
        }
        let finish = self.config().finish_singletons;
        if let Some(board) = boards.iter().find(|board| finish && board.len() == 1) {
            return Ok(ScoredGuess {
                word: board[0],
                entropy: 0.0,
            });
        }

        let explore = boards
            .iter()
            .any(|board| self.should_explore(board.len(), guesses_remaining));
        let pool: Vec<Word> = if explore {
            lexicon.words().to_vec()
        } else {
            let union: FxHashSet<Word> = boards.iter().flatten().copied().collect();
            lexicon
                .words()
                .iter()
                .copied()
                .filter(|word| union.contains(word))
                .collect()
        };
        debug!(
            "{} boards, ranking {} words{}",
            boards.len(),
            pool.len(),
            if explore { " (exploring)" } else { "" }
        );

        let totals = self.executor().map("ranking multi-board guesses", &pool, |guess| {
            boards.iter().map(|board| entropy(guess, board)).sum::<f64>()
        });

        let mut best: Option<ScoredGuess> = None;
        for (word, total) in pool.into_iter().zip(totals) {
            if best.is_none_or(|b| total > b.entropy + ENTROPY_EPSILON) {
                best = Some(ScoredGuess {
                    word,
                    entropy: total,
                });
            }
        }
        best.ok_or(SolverError::EmptyGuessPool)
    }
}
