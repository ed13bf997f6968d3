//! Word analysis command
//!
//! Analyzes the entropy and hint distribution of a specific word.

use anyhow::{Result, bail};

use crate::core::Word;
use crate::solver::entropy::{ScoreMap, entropy, score_map};
use crate::wordlists::Lexicon;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
    pub scores: ScoreMap,
}

/// Analyze the entropy of a word against the answer list
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the word list
pub fn analyze_word(text: &str, lexicon: &Lexicon) -> Result<AnalysisResult> {
    let word = Word::new(text)?;
    if !lexicon.contains(&word) {
        bail!("{word} is not in the word list");
    }

    let answers = lexicon.answers();
    let entropy = entropy(&word, answers);
    let expected_reduction = entropy.exp2();

    Ok(AnalysisResult {
        word,
        entropy,
        expected_reduction,
        expected_remaining: answers.len() as f64 / expected_reduction,
        total_candidates: answers.len(),
        scores: score_map(&word, answers),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_valid_word() {
        let lexicon = Lexicon::embedded().unwrap();
        let result = analyze_word("crane", &lexicon).unwrap();

        assert_eq!(result.word.as_str(), "CRANE");
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, lexicon.answers().len());

        let total: f64 = result.scores.values().map(|s| s.p).sum();
        assert!((total - 1.0).abs() < 0.01);
    }

    #[test]
    fn analyze_rejects_unknown_and_invalid() {
        let lexicon = Lexicon::embedded().unwrap();
        assert!(analyze_word("qxzvj", &lexicon).is_err());
        assert!(analyze_word("cranes", &lexicon).is_err());
    }

    #[test]
    fn entropy_properties() {
        let lexicon = Lexicon::embedded().unwrap();
        let result = analyze_word("pious", &lexicon).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (result.scores.len() as f64).log2() + 1e-9);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.total_candidates as f64);
    }
}
