//! Word solving command
//!
//! Lets the bot solve a specific answer and returns the solution path.

use anyhow::{Result, bail};

use crate::constraints::{aggregate, filter};
use crate::core::{Hint, Word};
use crate::solver::entropy::entropy;
use crate::solver::{Solver, bot};

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub hint: Hint,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected information of the guess over the candidates before it
    pub entropy: f64,
}

/// Solve a specific answer with the bot
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the answer list
/// - The solver cannot provide a valid guess
pub fn solve_word(target: &str, solver: &Solver<'_>) -> Result<SolveResult> {
    let target = Word::new(target)?;
    let lexicon = solver.lexicon();
    if !lexicon.is_answer(&target) {
        bail!("{target} is not in the answer list");
    }

    let game = bot::play(solver, target)?;
    let history = game.history();

    let guesses = (0..history.len())
        .map(|turn| {
            let before = filter(lexicon.answers(), &aggregate(&history[..turn]));
            let after = filter(&before, &aggregate(&history[..=turn]));
            let (word, hint) = history[turn];
            GuessStep {
                word,
                hint,
                candidates_before: before.len(),
                candidates_after: after.len(),
                entropy: entropy(&word, &before),
            }
        })
        .collect();

    Ok(SolveResult {
        success: game.is_won(),
        guesses,
        target,
    })
}
