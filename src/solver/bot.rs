//! Automated play
//!
//! Bots that play whole games against a known answer, and a benchmark that
//! runs one game per answer on the executor.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;
use rand::prelude::IndexedRandom;

use super::engine::{Solver, SolverError};
use crate::core::Word;
use crate::game::{Game, GameError, MultiGame};
use crate::wordlists::Lexicon;

/// Play a game with the entropy solver
///
/// The configured opener comes first, then the best guess for the remaining
/// candidates until the game ends.
///
/// # Errors
///
/// Returns `SolverError::Game(GameError::Contradiction)` if the answer is not
/// in the answer list, since the candidates then run out before it is found.
///
/// # Examples
/// ```
/// use wordle_entropy::config::SolverConfig;
/// use wordle_entropy::core::Word;
/// use wordle_entropy::parallel::{FailurePolicy, ParallelExecutor};
/// use wordle_entropy::solver::{Solver, bot};
/// use wordle_entropy::wordlists::Lexicon;
///
/// let lexicon = Lexicon::embedded().unwrap();
/// let config = SolverConfig::default();
/// let executor = ParallelExecutor::new(0, FailurePolicy::Propagate).unwrap();
/// let solver = Solver::new(&lexicon, &config, &executor);
///
/// let game = bot::play(&solver, Word::new("where").unwrap()).unwrap();
/// assert!(game.is_over());
/// ```
pub fn play<'a>(solver: &Solver<'a>, answer: Word) -> Result<Game<'a>, SolverError> {
    let mut game =
        Game::new(answer, solver.lexicon()).with_max_guesses(solver.config().max_guesses);

    while !game.is_over() {
        let guess = if game.history().is_empty() {
            solver.opening()?
        } else {
            solver
                .best_guess(&game.possible_answers()?, game.guesses_remaining())?
                .word
        };
        let hint = game.guess(guess.as_str())?;
        debug!("{answer}: {guess} -> {}", hint.basic());
    }
    Ok(game)
}

/// Play a game guessing a random possible answer every turn
///
/// # Errors
///
/// Returns `SolverError::Game(GameError::Contradiction)` when no candidate is
/// left.
pub fn play_random<'a, R: Rng + ?Sized>(
    lexicon: &'a Lexicon,
    answer: Word,
    max_guesses: usize,
    rng: &mut R,
) -> Result<Game<'a>, SolverError> {
    let mut game = Game::new(answer, lexicon).with_max_guesses(max_guesses);

    while !game.is_over() {
        let possible = game.possible_answers()?;
        let guess = possible.choose(rng).ok_or(GameError::Contradiction)?;
        game.guess(guess.as_str())?;
    }
    Ok(game)
}

/// Play several boards at once
///
/// # Errors
///
/// Propagates `best_guess_multi` errors.
pub fn play_multi<'a>(
    solver: &Solver<'a>,
    answers: &[Word],
    max_guesses: usize,
) -> Result<MultiGame<'a>, SolverError> {
    let mut game = MultiGame::with_max_guesses(answers, solver.lexicon(), max_guesses);

    while !game.is_over() {
        let guess = if game.score() == 0 {
            solver.opening()?
        } else {
            solver
                .best_guess_multi(&game.possible_answers()?, game.guesses_remaining())?
                .word
        };
        game.guess(guess.as_str())?;
        debug!("multi: guess {} is {guess}", game.score());
    }
    Ok(game)
}

/// Aggregate results of a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchSummary {
    pub total_games: usize,
    pub solved: usize,
    /// Games lost or aborted by an error
    pub failed: usize,
    /// Guess count -> games solved in that many guesses
    pub distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub duration: Duration,
}

impl BenchSummary {
    fn from_scores(scores: &[Option<usize>], duration: Duration) -> Self {
        let mut distribution = BTreeMap::new();
        for &score in scores.iter().flatten() {
            *distribution.entry(score).or_insert(0) += 1;
        }
        let solved: usize = distribution.values().sum();
        let total_guesses: usize = distribution.iter().map(|(n, count)| n * count).sum();

        Self {
            total_games: scores.len(),
            solved,
            failed: scores.len() - solved,
            distribution,
            average_guesses: if solved > 0 {
                total_guesses as f64 / solved as f64
            } else {
                0.0
            },
            duration,
        }
    }

    /// Share of games solved
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_games as f64
    }
}

/// Play one game per answer on the executor
///
/// With `random` set, the random-candidate bot plays instead of the solver.
/// Under the skip failure policy a game that errors counts as failed.
///
/// # Errors
///
/// Under the propagate policy, returns the error of the first failing game.
pub fn benchmark(
    solver: &Solver<'_>,
    answers: &[Word],
    random: bool,
) -> Result<BenchSummary, SolverError> {
    let start = Instant::now();
    let max_guesses = solver.config().max_guesses;

    let results = solver
        .executor()
        .try_map("benchmark", answers, |&answer| {
            let game = if random {
                play_random(solver.lexicon(), answer, max_guesses, &mut rand::rng())?
            } else {
                play(solver, answer)?
            };
            Ok::<_, SolverError>(game.score())
        })?;

    let scores: Vec<Option<usize>> = results.into_iter().map(Option::flatten).collect();
    let summary = BenchSummary::from_scores(&scores, start.elapsed());
    info!(
        "benchmark: {}/{} solved, {:.3} average in {:.1}s",
        summary.solved,
        summary.total_games,
        summary.average_guesses,
        summary.duration.as_secs_f64()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MULTI_MAX_GUESSES, SolverConfig};
    use crate::parallel::{FailurePolicy, ParallelExecutor};
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn bot_solves_known_answers() {
        let lexicon = Lexicon::embedded().unwrap();
        let config = SolverConfig::default();
        let executor = ParallelExecutor::new(0, FailurePolicy::Propagate).unwrap();
        let solver = Solver::new(&lexicon, &config, &executor);

        for answer in ["chest", "where", "ghost", "abbey"] {
            let game = play(&solver, word(answer)).unwrap();
            assert!(game.is_won(), "lost on {answer}");
            assert!(game.history().len() <= config.max_guesses);
            assert_eq!(game.history()[0].0.as_str(), "CRANE");
            assert_eq!(game.history().last().unwrap().0, word(answer));
        }
    }

    #[test]
    fn random_bot_only_guesses_candidates() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut rng = rand::rng();

        let game = play_random(&lexicon, word("chest"), 6, &mut rng).unwrap();
        assert!(game.is_over());
        for (guess, _) in game.history() {
            assert!(lexicon.is_answer(guess));
        }
    }

    #[test]
    fn multi_bot_plays_every_board() {
        let lexicon = Lexicon::embedded().unwrap();
        let config = SolverConfig::default();
        let executor = ParallelExecutor::new(0, FailurePolicy::Propagate).unwrap();
        let solver = Solver::new(&lexicon, &config, &executor);

        let answers = [word("chest"), word("ghost")];
        let game = play_multi(&solver, &answers, MULTI_MAX_GUESSES).unwrap();
        assert!(game.is_over());
        assert!(game.score() <= MULTI_MAX_GUESSES);
        assert_eq!(game.boards().len(), 2);
    }

    #[test]
    fn benchmark_counts_every_game() {
        let lexicon = Lexicon::embedded().unwrap();
        let config = SolverConfig::default();
        let executor = ParallelExecutor::new(0, FailurePolicy::Propagate).unwrap();
        let solver = Solver::new(&lexicon, &config, &executor);

        let answers = words_from_slice(&["chest", "where", "ghost", "abbey", "watch"]);
        let summary = benchmark(&solver, &answers, false).unwrap();

        assert_eq!(summary.total_games, 5);
        assert_eq!(summary.solved + summary.failed, 5);
        assert_eq!(summary.distribution.values().sum::<usize>(), summary.solved);
        assert!(summary.distribution.keys().all(|n| (1..=6).contains(n)));
        if summary.solved > 0 {
            assert!(summary.average_guesses >= 1.0 && summary.average_guesses <= 6.0);
        }
    }

    #[test]
    fn benchmark_skip_counts_errors_as_failures() {
        let lexicon = Lexicon::new(
            words_from_slice(&["crane", "slate", "chest"]),
            Some(words_from_slice(&["slate", "chest"])),
        )
        .unwrap();
        let config = SolverConfig::default();
        let executor = ParallelExecutor::new(2, FailurePolicy::Skip).unwrap();
        let solver = Solver::new(&lexicon, &config, &executor);

        // QXZVJ is neither guessable nor an answer, so its game errors out
        let answers = words_from_slice(&["slate", "qxzvj", "chest"]);
        let summary = benchmark(&solver, &answers, false).unwrap();
        assert_eq!(summary.total_games, 3);
        assert_eq!(summary.solved, 2);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn benchmark_propagate_reports_error() {
        let lexicon = Lexicon::new(
            words_from_slice(&["crane", "slate", "chest"]),
            Some(words_from_slice(&["slate", "chest"])),
        )
        .unwrap();
        let config = SolverConfig::default();
        let executor = ParallelExecutor::new(2, FailurePolicy::Propagate).unwrap();
        let solver = Solver::new(&lexicon, &config, &executor);

        let answers = words_from_slice(&["slate", "qxzvj"]);
        assert!(benchmark(&solver, &answers, false).is_err());
    }

    #[test]
    fn unknown_answer_is_a_contradiction() {
        let lexicon = Lexicon::new(
            words_from_slice(&["crane", "slate", "chest"]),
            Some(words_from_slice(&["slate", "chest"])),
        )
        .unwrap();
        let config = SolverConfig::default();
        let executor = ParallelExecutor::new(1, FailurePolicy::Propagate).unwrap();
        let solver = Solver::new(&lexicon, &config, &executor);

        // CRANE on QXZVJ is all wrong, which rules out SLATE and CHEST
        assert!(matches!(
            play(&solver, word("qxzvj")),
            Err(SolverError::Game(GameError::Contradiction))
        ));
        assert!(matches!(
            play_random(&lexicon, word("qxzvj"), 6, &mut rand::rng()),
            Err(SolverError::Game(GameError::Contradiction))
        ));
        assert!(matches!(
            play_multi(&solver, &[word("chest"), word("qxzvj")], MULTI_MAX_GUESSES),
            Err(SolverError::Game(GameError::Contradiction))
        ));
    }

    #[test]
    fn summary_statistics() {
        let summary =
            BenchSummary::from_scores(&[Some(3), Some(4), None, Some(3)], Duration::ZERO);
        assert_eq!(summary.solved, 3);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.distribution, BTreeMap::from([(3, 2), (4, 1)]));
        assert!((summary.average_guesses - 10.0 / 3.0).abs() < 1e-12);
        assert!((summary.success_rate() - 0.75).abs() < 1e-12);
    }
}
