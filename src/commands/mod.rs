//! Command implementations

pub mod analyze;
pub mod assist;
pub mod benchmark;
mod input;
pub mod multi;
pub mod play;
pub mod solve;
pub mod top;

pub use analyze::{AnalysisResult, analyze_word};
pub use assist::run_assist;
pub use benchmark::run_benchmark;
pub use multi::solve_multi;
pub use play::run_play;
pub use solve::{GuessStep, SolveResult, solve_word};
pub use top::{precompute, top_guesses};
