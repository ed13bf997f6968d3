//! Benchmark command
//!
//! Plays the bot against every answer (or the first `limit`) and summarizes
//! the guess counts.

use anyhow::{Context, Result};

use crate::solver::{BenchSummary, Solver, bot};

/// Run the benchmark over the answer list
///
/// With `random` set the random-candidate bot plays instead of the solver,
/// which gives a baseline to compare against.
///
/// # Errors
///
/// Returns an error if a game fails under the propagate failure policy.
pub fn run_benchmark(
    solver: &Solver<'_>,
    limit: Option<usize>,
    random: bool,
) -> Result<BenchSummary> {
    let answers = solver.lexicon().answers();
    let targets = &answers[..limit.unwrap_or(answers.len()).min(answers.len())];

    bot::benchmark(solver, targets, random).context("benchmark aborted")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::parallel::{FailurePolicy, ParallelExecutor};
    use crate::wordlists::Lexicon;

    #[test]
    fn benchmark_runs() {
        let lexicon = Lexicon::embedded().unwrap();
        let config = SolverConfig::default();
        let executor = ParallelExecutor::new(0, FailurePolicy::Propagate).unwrap();
        let solver = Solver::new(&lexicon, &config, &executor);

        let result = run_benchmark(&solver, Some(8), false).unwrap();
        assert_eq!(result.total_games, 8);
        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }

    #[test]
    fn random_baseline_runs() {
        let lexicon = Lexicon::embedded().unwrap();
        let config = SolverConfig::default();
        let executor = ParallelExecutor::new(0, FailurePolicy::Propagate).unwrap();
        let solver = Solver::new(&lexicon, &config, &executor);

        let result = run_benchmark(&solver, Some(20), true).unwrap();
        assert_eq!(result.total_games, 20);
        assert_eq!(result.solved + result.failed, 20);
    }

    #[test]
    fn limit_beyond_list_is_clamped() {
        let lexicon = Lexicon::new(
            crate::wordlists::loader::words_from_slice(&["crane", "slate"]),
            None,
        )
        .unwrap();
        let config = SolverConfig::default();
        let executor = ParallelExecutor::new(1, FailurePolicy::Propagate).unwrap();
        let solver = Solver::new(&lexicon, &config, &executor);

        let result = run_benchmark(&solver, Some(50), false).unwrap();
        assert_eq!(result.total_games, 2);
        assert_eq!(result.solved, 2);
    }
}
