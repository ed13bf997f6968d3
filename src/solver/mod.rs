//! Wordle solving
//!
//! Entropy ranking, guess selection for single and multi-board games, and
//! bots built on top of them.

pub mod bot;
mod engine;
pub mod entropy;
mod multi;

pub use bot::BenchSummary;
pub use engine::{Solver, SolverError};
pub use entropy::ScoredGuess;
