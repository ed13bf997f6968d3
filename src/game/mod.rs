//! Game sessions
//!
//! `Game` plays one board against a secret answer; `MultiGame` drives several
//! boards with a shared guess sequence.

mod multi;
mod session;

pub use multi::MultiGame;
pub use session::{Game, GameError, GameState, MAX_GUESSES, consistent_answers};
