//! Entropy-based guess evaluation
//!
//! Implements Shannon entropy over hint distributions and the parallel
//! ranking built on it. This is the foundation of information-theoretic
//! solving.

mod calculator;
mod selector;

pub use calculator::{
    HintScore, ScoreMap, entropy, hint_counts, information_value, score_map, shannon_entropy,
};
pub use selector::{ENTROPY_EPSILON, ScoredGuess, distinct_entropies, rank};
