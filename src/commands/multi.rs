//! Multi-board command
//!
//! The bot plays several boards at once, one guess feeding all of them.

use anyhow::{Result, bail, ensure};
use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::config::MULTI_MAX_GUESSES;
use crate::core::Word;
use crate::game::MultiGame;
use crate::solver::{Solver, bot};

/// Play the given answers, or `boards` random distinct answers if none given
///
/// # Errors
///
/// Returns an error if an answer is invalid or not in the answer list, if
/// more boards are requested than there are answers, or if the solver fails.
pub fn solve_multi<'a, R: Rng + ?Sized>(
    solver: &Solver<'a>,
    words: &[String],
    boards: usize,
    rng: &mut R,
) -> Result<MultiGame<'a>> {
    let lexicon = solver.lexicon();

    let answers: Vec<Word> = if words.is_empty() {
        ensure!(boards > 0, "at least one board is needed");
        ensure!(
            boards <= lexicon.answers().len(),
            "only {} answers are available",
            lexicon.answers().len()
        );
        lexicon.answers().choose_multiple(rng, boards).copied().collect()
    } else {
        let mut answers = Vec::with_capacity(words.len());
        for text in words {
            let word = Word::new(text)?;
            if !lexicon.is_answer(&word) {
                bail!("{word} is not in the answer list");
            }
            answers.push(word);
        }
        answers
    };

    Ok(bot::play_multi(solver, &answers, MULTI_MAX_GUESSES)?)
}
