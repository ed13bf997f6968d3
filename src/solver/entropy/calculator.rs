//! Shannon entropy calculation for Wordle hints
//!
//! Given a guess and the answers still possible, groups the answers by the
//! hint they would produce and measures the information in that distribution.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Hint, Word};

/// Probability and information content of one hint bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HintScore {
    /// Share of the answers landing in this bucket
    pub p: f64,
    /// Information in bits, `log2(1/p)`
    #[serde(rename = "I")]
    pub info: f64,
}

/// Hint -> score for every hint a guess can produce
pub type ScoreMap = BTreeMap<Hint, HintScore>;

/// Group answers by the hint they produce with the guess
///
/// # Examples
/// ```
/// use wordle_entropy::core::Word;
/// use wordle_entropy::solver::entropy::hint_counts;
///
/// let guess = Word::new("crane").unwrap();
/// let answers = vec![
///     Word::new("slate").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
/// let counts = hint_counts(&guess, &answers);
/// assert_eq!(counts.values().sum::<usize>(), 2);
/// ```
#[must_use]
pub fn hint_counts(guess: &Word, answers: &[Word]) -> FxHashMap<Hint, usize> {
    let mut counts = FxHashMap::default();

    for answer in answers {
        let hint = Hint::encode(guess, answer);
        *counts.entry(hint).or_insert(0) += 1;
    }

    counts
}

/// Information gained by observing an outcome of probability `p`, in bits
///
/// `p` must lie in (0, 1]; certain outcomes carry no information.
#[inline]
#[must_use]
pub fn information_value(p: f64) -> f64 {
    debug_assert!(p > 0.0 && p <= 1.0, "probability {p} out of range");
    (1.0 / p).log2()
}

/// Probability and information of every hint bucket
///
/// Returns an empty map when there are no answers.
#[must_use]
pub fn score_map(guess: &Word, answers: &[Word]) -> ScoreMap {
    if answers.is_empty() {
        return ScoreMap::new();
    }

    let total = answers.len() as f64;
    hint_counts(guess, answers)
        .into_iter()
        .map(|(hint, count)| {
            let p = count as f64 / total;
            (
                hint,
                HintScore {
                    p,
                    info: information_value(p),
                },
            )
        })
        .collect()
}

/// Expected information gain of a guess, in bits
///
/// # Formula
/// H = Σ p · log₂(1/p)
///
/// where p is the share of the answers producing each hint.
///
/// # Examples
/// ```
/// use wordle_entropy::core::Word;
/// use wordle_entropy::solver::entropy::entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let answers = vec![
///     Word::new("slate").unwrap(),
///     Word::new("pious").unwrap(),
/// ];
/// // Two equally likely hints: one bit
/// assert!((entropy(&guess, &answers) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn entropy(guess: &Word, answers: &[Word]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }
    shannon_entropy(&hint_counts(guess, answers))
}

/// Shannon entropy of a bucket size distribution
///
/// # Properties
/// - 0.0 for a certain outcome (one bucket)
/// - maximal for a uniform distribution
/// - within [0, log₂(n)] for n buckets
#[must_use]
pub fn shannon_entropy<S>(counts: &std::collections::HashMap<Hint, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            p * information_value(p)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn information_value_in_bits() {
        assert!(information_value(1.0).abs() < 1e-12);
        assert!((information_value(0.5) - 1.0).abs() < 1e-12);
        assert!((information_value(0.125) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let mut counts = FxHashMap::default();
        for code in ["C....", ".C...", "..C..", "...C."] {
            counts.insert(code.parse::<Hint>().unwrap(), 25);
        }
        assert!((shannon_entropy(&counts) - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(Hint::WIN, 10);
        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_below_uniform() {
        let hints: Vec<Hint> = ["C....", ".C...", "..C..", "...C."]
            .iter()
            .map(|code| code.parse().unwrap())
            .collect();

        let uniform: FxHashMap<Hint, usize> = hints.iter().map(|&h| (h, 25)).collect();
        let skewed: FxHashMap<Hint, usize> = hints
            .iter()
            .zip([97, 1, 1, 1])
            .map(|(&h, n)| (h, n))
            .collect();

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Hint, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_of_no_answers_is_zero() {
        assert!(entropy(&word("crane"), &[]).abs() < f64::EPSILON);
        assert!(score_map(&word("crane"), &[]).is_empty());
    }

    #[test]
    fn entropy_zero_when_one_bucket() {
        let answers = words_from_slice(&["aaaaa", "bbbbb", "ccccc"]);
        assert!(entropy(&word("zzzzz"), &answers).abs() < 0.001);
    }

    #[test]
    fn entropy_bounded_by_answer_count() {
        let answers = words_from_slice(&["slate", "irate", "trace", "raise"]);
        let value = entropy(&word("crane"), &answers);
        assert!(value > 1.0 && value <= 2.0);
    }

    #[test]
    fn score_map_probabilities_sum_to_one() {
        let answers = words_from_slice(&["chest", "cello", "chime", "comet", "bench", "pious"]);
        let scores = score_map(&word("crane"), &answers);

        let total: f64 = scores.values().map(|s| s.p).sum();
        assert!((total - 1.0).abs() < 0.01);

        let weighted: f64 = scores.values().map(|s| s.p * s.info).sum();
        assert!((weighted - entropy(&word("crane"), &answers)).abs() < 1e-9);
    }

    #[test]
    fn score_map_buckets_match_counts() {
        let answers = words_from_slice(&["chest", "cello", "comet"]);
        let scores = score_map(&word("crane"), &answers);
        let bucket = scores[&"C...P".parse::<Hint>().unwrap()];
        assert!((bucket.p - 1.0).abs() < 1e-12);
        assert!(bucket.info.abs() < 1e-12);
    }

    #[test]
    fn hint_score_serializes_with_capital_i() {
        let score = HintScore { p: 0.5, info: 1.0 };
        assert_eq!(
            serde_json::to_string(&score).unwrap(),
            r#"{"p":0.5,"I":1.0}"#
        );
    }
}
