//! Opening word tables
//!
//! Ranks first guesses by entropy against the whole answer list, either from
//! a precomputed score database or computed on the spot, and writes score
//! databases for later use.

use std::path::Path;

use anyhow::{Context, Result};

use crate::database::ScoreDb;
use crate::solver::entropy::{ScoredGuess, rank};
use crate::solver::Solver;

/// Best `n` opening guesses
///
/// # Errors
///
/// Returns an error if the database cannot be loaded.
pub fn top_guesses(solver: &Solver<'_>, db: Option<&Path>, n: usize) -> Result<Vec<ScoredGuess>> {
    let mut ranked = match db {
        Some(path) => ScoreDb::load(path)?.ranked(),
        None => {
            let lexicon = solver.lexicon();
            rank(solver.executor(), lexicon.words(), lexicon.answers())
        }
    };
    ranked.truncate(n);
    Ok(ranked)
}

/// Score the first `limit` words (all by default) and save the database
///
/// # Errors
///
/// Returns an error if the database cannot be written.
pub fn precompute(solver: &Solver<'_>, output: &Path, limit: Option<usize>) -> Result<ScoreDb> {
    let lexicon = solver.lexicon();
    let words = lexicon.words();
    let guesses = &words[..limit.unwrap_or(words.len()).min(words.len())];

    let db = ScoreDb::compute(solver.executor(), guesses, lexicon.answers());
    db.save(output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(db)
}
