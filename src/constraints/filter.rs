//! Candidate filtering
//!
//! Applies a `ConstraintSet` to a word list, keeping the words consistent with
//! everything learned so far. Pure and read-only, so it is safe to call from
//! any number of workers at once.

use super::aggregate::ConstraintSet;
use crate::core::Word;

impl ConstraintSet {
    /// Check whether a word is consistent with the constraints
    ///
    /// Absence never overrides presence: a letter marked wrong in one slot but
    /// correct or misplaced in another still has to be allowed, only capped by
    /// `max_occurrences`.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let exact = self
            .correct
            .iter()
            .all(|(&position, &letter)| word.letter_at(position) == letter);

        let misplaced = self
            .wrong_position
            .iter()
            .all(|&(letter, position)| word.contains(letter) && word.letter_at(position) != letter);

        let absent = self
            .not_in_word
            .iter()
            .all(|&letter| !word.contains(letter) || self.is_known_present(letter));

        let capped = self
            .max_occurrences
            .iter()
            .all(|(&letter, &cap)| word.count(letter) <= cap);

        exact && misplaced && absent && capped
    }

    fn is_known_present(&self, letter: u8) -> bool {
        self.correct.values().any(|&l| l == letter)
            || self.wrong_position.iter().any(|&(l, _)| l == letter)
    }
}

/// Keep the words admitted by the constraints, preserving input order
///
/// # Examples
/// ```
/// use wordle_entropy::constraints::{aggregate, filter};
/// use wordle_entropy::core::{Hint, Word};
///
/// let words: Vec<Word> = ["chest", "chess", "crane"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("pious").unwrap();
/// let hint = Hint::encode(&guess, &words[0]);
///
/// let remaining = filter(&words, &aggregate(&[(guess, hint)]));
/// assert_eq!(remaining, vec![words[0]]);
/// ```
#[must_use]
pub fn filter(words: &[Word], constraints: &ConstraintSet) -> Vec<Word> {
    words
        .iter()
        .filter(|word| constraints.admits(word))
        .copied()
        .collect()
}
