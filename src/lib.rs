//! Wordle Entropy
//!
//! A Wordle solving engine: hint encoding, constraint aggregation and
//! filtering, and guess selection that maximizes the expected information of
//! the next hint. Also plays Quordle-style multi-board games.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_entropy::config::SolverConfig;
//! use wordle_entropy::parallel::{FailurePolicy, ParallelExecutor};
//! use wordle_entropy::solver::Solver;
//! use wordle_entropy::wordlists::Lexicon;
//!
//! let lexicon = Lexicon::embedded().unwrap();
//! let config = SolverConfig::default();
//! let executor = ParallelExecutor::new(0, FailurePolicy::Propagate).unwrap();
//! let solver = Solver::new(&lexicon, &config, &executor);
//!
//! let best = solver.best_guess(lexicon.answers(), 6).unwrap();
//! println!("{} ({:.3} bits)", best.word, best.entropy);
//! ```

// Core domain types
pub mod core;

// Hint constraints and filtering
pub mod constraints;

// Word lists
pub mod wordlists;

// Solving algorithms
pub mod solver;

// Game sessions
pub mod game;

// Parallel batch evaluation
pub mod parallel;

// Precomputed score tables
pub mod database;

// Settings and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
