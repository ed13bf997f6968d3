//! Constraint aggregation and candidate filtering
//!
//! Turns a guess history into a compact `ConstraintSet` and applies it to a
//! word list.

mod aggregate;
mod filter;

pub use aggregate::{ConstraintSet, FactSet, LetterFact, aggregate};
pub use filter::filter;
