//! Wordle feedback hints
//!
//! A hint holds one tri-state entry per letter position. Two text forms exist:
//! - glyph form: 🟩 correct, 🟨 misplaced, ⬛ wrong
//! - basic form: `C` correct, `P` misplaced, `.` wrong
//!
//! The basic form is what the score database uses as map keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::word::{WORD_SIZE, Word};

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HintState {
    /// Letter not in the answer (or all its occurrences already credited)
    Wrong,
    /// Letter in the answer, but not at this position
    Misplaced,
    /// Letter at the correct position
    Correct,
}

impl HintState {
    /// Display glyph
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Wrong => '⬛',
        }
    }

    /// Single ASCII code used in the basic form
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Misplaced => 'P',
            Self::Wrong => '.',
        }
    }

    /// Parse from either a glyph or a basic code
    ///
    /// Basic codes are case-insensitive. `⬜` is accepted as wrong too, since
    /// the light theme of the game shows it.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '🟩' | 'C' | 'c' => Some(Self::Correct),
            '🟨' | 'P' | 'p' => Some(Self::Misplaced),
            '⬛' | '⬜' | '.' => Some(Self::Wrong),
            _ => None,
        }
    }
}

/// Error type for unparseable hints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("hint must have exactly {WORD_SIZE} entries, got {0}")]
    InvalidLength(usize),

    #[error("'{0}' is not a hint symbol (use C/P/. or 🟩/🟨/⬛)")]
    InvalidSymbol(char),
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hint([HintState; WORD_SIZE]);

impl Hint {
    /// All positions correct
    pub const WIN: Self = Self([HintState::Correct; WORD_SIZE]);

    /// Number of distinct hints (3^5)
    pub const COUNT: usize = 243;

    #[must_use]
    pub const fn new(states: [HintState; WORD_SIZE]) -> Self {
        Self(states)
    }

    /// Calculate the hint shown when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. Naive pass: correct if the letters match, misplaced if the guess
    ///    letter occurs anywhere in the answer, wrong otherwise
    /// 2. Demotion pass: a letter repeated in the guess is credited at most as
    ///    many times as it occurs in the answer. Exact matches are credited
    ///    first, then misplaced entries left to right; the excess become wrong.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{Hint, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("abide").unwrap();
    /// // Only one E in ABIDE, so the second E is wrong
    /// assert_eq!(Hint::encode(&guess, &answer).basic(), "..P.P");
    /// ```
    #[must_use]
    pub fn encode(guess: &Word, answer: &Word) -> Self {
        let naive = Self::naive(guess, answer);
        naive.demote_repeats(guess, answer)
    }

    fn naive(guess: &Word, answer: &Word) -> Self {
        let mut states = [HintState::Wrong; WORD_SIZE];
        for (i, state) in states.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if answer.letter_at(i) == letter {
                *state = HintState::Correct;
            } else if answer.contains(letter) {
                *state = HintState::Misplaced;
            }
        }
        Self(states)
    }

    fn demote_repeats(self, guess: &Word, answer: &Word) -> Self {
        let mut states = self.0;
        for letter in guess.repeated_letters() {
            let in_answer = answer.count(letter);
            if in_answer == 0 {
                continue;
            }

            let mut matched = (0..WORD_SIZE)
                .filter(|&i| guess.letter_at(i) == letter && states[i] == HintState::Correct)
                .count();

            for i in 0..WORD_SIZE {
                if guess.letter_at(i) == letter && states[i] == HintState::Misplaced {
                    matched += 1;
                    if matched > in_answer {
                        states[i] = HintState::Wrong;
                    }
                }
            }
        }
        Self(states)
    }

    /// Per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[HintState; WORD_SIZE] {
        &self.0
    }

    /// State at a position (0-4)
    #[inline]
    #[must_use]
    pub const fn state_at(&self, position: usize) -> HintState {
        self.0[position]
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }

    /// Basic form, e.g. `C...P`
    #[must_use]
    pub fn basic(&self) -> String {
        self.0.iter().map(|state| state.code()).collect()
    }

    /// Glyph form, e.g. `🟩⬛⬛⬛🟨`
    #[must_use]
    pub fn glyphs(&self) -> String {
        self.0.iter().map(|state| state.glyph()).collect()
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyphs())
    }
}

impl FromStr for Hint {
    type Err = HintError;

    /// Parse from the glyph form or the basic form (mixing is tolerated)
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::Hint;
    ///
    /// let basic: Hint = "C...P".parse().unwrap();
    /// let glyphs: Hint = "🟩⬛⬛⬛🟨".parse().unwrap();
    /// assert_eq!(basic, glyphs);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_SIZE {
            return Err(HintError::InvalidLength(symbols.len()));
        }

        let mut states = [HintState::Wrong; WORD_SIZE];
        for (state, symbol) in states.iter_mut().zip(symbols) {
            *state = HintState::from_char(symbol).ok_or(HintError::InvalidSymbol(symbol))?;
        }
        Ok(Self(states))
    }
}

impl Serialize for Hint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.basic())
    }
}

impl<'de> Deserialize<'de> for Hint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Hint::encode(&guess, &answer).basic()
    }

    #[test]
    fn all_correct_against_itself() {
        for text in ["crane", "slate", "eerie", "mamma", "zzzzz"] {
            let word = Word::new(text).unwrap();
            assert!(Hint::encode(&word, &word).is_win());
        }
    }

    #[test]
    fn disjoint_words_all_wrong() {
        assert_eq!(hint("crane", "pious"), ".....");
        assert_eq!(hint("abcde", "fghij"), ".....");
    }

    #[test]
    fn partial_feedback() {
        assert_eq!(hint("crane", "chest"), "C...P");
        assert_eq!(hint("pious", "chest"), "....P");
        assert_eq!(hint("crane", "slate"), "..C.C");
    }

    #[test]
    fn repeated_letter_in_guess_beyond_answer() {
        // THERE on WHERE: the guess E's are both exact
        assert_eq!(hint("there", "where"), ".CCCC");
        // KEEPS on ABBEY: one E in the answer, first E misplaced, second wrong
        assert_eq!(hint("keeps", "abbey"), ".P...");
        assert_eq!(hint("keeps", "algae"), ".P...");
        // SPEED on ERASE: the answer has two E's, both credited
        assert_eq!(hint("speed", "erase"), "P.PP.");
    }

    #[test]
    fn exact_match_credited_before_misplaced() {
        // TABLE on LOBBY: B is exact at 2, L misplaced
        assert_eq!(hint("table", "lobby"), "..CP.");
        // SLOSH on GHOST: the exact S wins, the first S is wrong
        assert_eq!(hint("slosh", "ghost"), "..CCP");
        // AARON on KORAN: only one A, the first is credited
        assert_eq!(hint("aaron", "koran"), "P.CPC");
        // ROBOT on FLOOR
        assert_eq!(hint("robot", "floor"), "PP.C.");
    }

    #[test]
    fn triple_repeated_letters() {
        // EERIE on THREE: three E's in the guess, two in the answer
        assert_eq!(hint("eerie", "three"), "P.C.C");
        // EERIE on EMCEE: three E's in both
        assert_eq!(hint("eerie", "emcee"), "CP..C");
        // MAMMA on MADAM: three M's against two
        assert_eq!(hint("mamma", "madam"), "CCP.P");
    }

    #[test]
    fn parse_both_forms() {
        let basic: Hint = "CP..c".parse().unwrap();
        let glyphs: Hint = "🟩🟨⬛⬜🟩".parse().unwrap();
        assert_eq!(basic, glyphs);
        assert_eq!(basic.basic(), "CP..C");
        assert_eq!(basic.to_string(), "🟩🟨⬛⬛🟩");
    }

    #[test]
    fn parse_errors() {
        assert_eq!("CP.".parse::<Hint>(), Err(HintError::InvalidLength(3)));
        assert_eq!("CP.X.".parse::<Hint>(), Err(HintError::InvalidSymbol('X')));
        assert_eq!("".parse::<Hint>(), Err(HintError::InvalidLength(0)));
    }

    #[test]
    fn serde_uses_basic_form() {
        let hint: Hint = "C...P".parse().unwrap();
        assert_eq!(serde_json::to_string(&hint).unwrap(), "\"C...P\"");
        let back: Hint = serde_json::from_str("\"C...P\"").unwrap();
        assert_eq!(back, hint);
    }
}
