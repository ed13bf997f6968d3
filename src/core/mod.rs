//! Core domain types for Wordle
//!
//! Words and the hints the game returns for them. Everything here is pure and
//! `Copy`, so it can be shared freely across worker threads.

mod hint;
mod word;

pub use hint::{Hint, HintError, HintState};
pub use word::{WORD_SIZE, Word, WordError};
