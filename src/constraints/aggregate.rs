//! Folding hint history into constraints
//!
//! Each (guess, hint) pair is split into per-position letter facts. The
//! facts of all guesses are merged into a `ConstraintSet`, which only ever
//! gains information as guesses accumulate.

use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;

use crate::core::{Hint, HintState, WORD_SIZE, Word};

/// One letter of a guess together with the feedback it received
///
/// Identity is `(letter, position)`: the state is carried along but does not
/// take part in equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct LetterFact {
    pub letter: u8,
    pub position: usize,
    pub state: HintState,
}

impl LetterFact {
    /// Align a hint with its guess
    #[must_use]
    pub fn from_guess(guess: &Word, hint: &Hint) -> [Self; WORD_SIZE] {
        std::array::from_fn(|position| Self {
            letter: guess.letter_at(position),
            position,
            state: hint.state_at(position),
        })
    }
}

impl PartialEq for LetterFact {
    fn eq(&self, other: &Self) -> bool {
        self.letter == other.letter && self.position == other.position
    }
}

impl Eq for LetterFact {}

impl Hash for LetterFact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.letter.hash(state);
        self.position.hash(state);
    }
}

/// Deduplicated letter facts from a whole session
#[derive(Debug, Clone, Default)]
pub struct FactSet(FxHashSet<LetterFact>);

impl FactSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fact, returning `true` if it is new
    ///
    /// A letter and position already on record keep their first state.
    pub fn insert(&mut self, fact: LetterFact) -> bool {
        self.0.insert(fact)
    }

    /// Strongest state seen for a letter at any position
    ///
    /// Used for keyboard displays: a letter correct anywhere shows as correct.
    #[must_use]
    pub fn best_state(&self, letter: u8) -> Option<HintState> {
        self.0
            .iter()
            .filter(|fact| fact.letter == letter)
            .map(|fact| fact.state)
            .max()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Aggregated knowledge from all guesses of a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    /// Position -> letter that must be there
    pub correct: BTreeMap<usize, u8>,
    /// Letters known to be present, but not at the paired position
    pub wrong_position: BTreeSet<(u8, usize)>,
    /// Letters marked wrong somewhere; only absent if never seen as present
    pub not_in_word: BTreeSet<u8>,
    /// Letter -> maximum number of occurrences
    pub max_occurrences: BTreeMap<u8, usize>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one more guess into the constraints
    ///
    /// A letter that is both credited (correct or misplaced) and marked wrong
    /// within the same guess occurs exactly as often as it was credited, which
    /// becomes its cap. When several guesses cap a letter the smallest cap
    /// wins.
    pub fn push(&mut self, guess: &Word, hint: &Hint) {
        let mut included = [0usize; 26];
        let mut excluded = [false; 26];

        for fact in LetterFact::from_guess(guess, hint) {
            let slot = usize::from(fact.letter - b'A');
            match fact.state {
                HintState::Correct => {
                    self.correct.insert(fact.position, fact.letter);
                    included[slot] += 1;
                }
                HintState::Misplaced => {
                    self.wrong_position.insert((fact.letter, fact.position));
                    included[slot] += 1;
                }
                HintState::Wrong => {
                    self.not_in_word.insert(fact.letter);
                    excluded[slot] = true;
                }
            }
        }

        for (slot, (&count, &was_excluded)) in included.iter().zip(&excluded).enumerate() {
            if count > 0 && was_excluded {
                let letter = b'A' + slot as u8;
                self.max_occurrences
                    .entry(letter)
                    .and_modify(|cap| *cap = (*cap).min(count))
                    .or_insert(count);
            }
        }
    }

    /// Letters known to be in the answer
    #[must_use]
    pub fn present_letters(&self) -> BTreeSet<u8> {
        self.correct
            .values()
            .copied()
            .chain(self.wrong_position.iter().map(|&(letter, _)| letter))
            .collect()
    }

    /// Letters known to be absent: marked wrong and never seen as present
    #[must_use]
    pub fn absent_letters(&self) -> BTreeSet<u8> {
        let present = self.present_letters();
        self.not_in_word.difference(&present).copied().collect()
    }

    /// True when no guess has been folded in
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct.is_empty()
            && self.wrong_position.is_empty()
            && self.not_in_word.is_empty()
            && self.max_occurrences.is_empty()
    }
}

/// Aggregate a whole guess history
///
/// # Examples
/// ```
/// use wordle_entropy::constraints::aggregate;
/// use wordle_entropy::core::{Hint, Word};
///
/// let guess = Word::new("crane").unwrap();
/// let hint = Hint::encode(&guess, &Word::new("chest").unwrap());
/// let constraints = aggregate(&[(guess, hint)]);
///
/// assert_eq!(constraints.correct.get(&0), Some(&b'C'));
/// assert!(constraints.wrong_position.contains(&(b'E', 4)));
/// ```
#[must_use]
pub fn aggregate(history: &[(Word, Hint)]) -> ConstraintSet {
    let mut constraints = ConstraintSet::new();
    for (guess, hint) in history {
        constraints.push(guess, hint);
    }
    constraints
}
