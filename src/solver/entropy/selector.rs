//! Entropy ranking of guess pools
//!
//! Scores every guess of a pool on the executor and orders them by expected
//! information gain.

use serde::{Deserialize, Serialize};

use super::calculator::entropy;
use crate::core::Word;
use crate::parallel::ParallelExecutor;

/// Tolerance used when comparing entropies for equality
pub const ENTROPY_EPSILON: f64 = 1e-9;

/// A guess with its expected information gain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredGuess {
    pub word: Word,
    pub entropy: f64,
}

/// Rank guesses by entropy over the answers, best first
///
/// Entropies are computed in parallel. The sort is stable, so guesses with
/// equal entropy keep their order in `guesses`.
///
/// # Examples
/// ```
/// use wordle_entropy::core::Word;
/// use wordle_entropy::parallel::{FailurePolicy, ParallelExecutor};
/// use wordle_entropy::solver::entropy::rank;
///
/// let executor = ParallelExecutor::new(2, FailurePolicy::Propagate).unwrap();
/// let guesses = vec![Word::new("aaaaa").unwrap(), Word::new("aeros").unwrap()];
/// let answers = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
///
/// let ranked = rank(&executor, &guesses, &answers);
/// assert_eq!(ranked[0].word.as_str(), "AEROS");
/// ```
#[must_use]
pub fn rank(executor: &ParallelExecutor, guesses: &[Word], answers: &[Word]) -> Vec<ScoredGuess> {
    let mut ranked = executor.map("ranking guesses", guesses, |guess| ScoredGuess {
        word: *guess,
        entropy: entropy(guess, answers),
    });
    ranked.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
    ranked
}

/// Number of distinct entropy values among the first `window` entries
#[must_use]
pub fn distinct_entropies(ranked: &[ScoredGuess], window: usize) -> usize {
    let mut distinct: Vec<f64> = Vec::new();
    for scored in ranked.iter().take(window) {
        if !distinct
            .iter()
            .any(|&e| (e - scored.entropy).abs() < ENTROPY_EPSILON)
        {
            distinct.push(scored.entropy);
        }
    }
    distinct.len()
}
