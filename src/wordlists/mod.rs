//! Word lists for Wordle solving
//!
//! Embedded lists compiled into the binary, file loading, and the `Lexicon`
//! that bundles guessable words with the answer subset.

mod embedded;
mod lexicon;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, WORDS, WORDS_COUNT};
pub use lexicon::{Lexicon, LexiconError};
