//! End-to-end scenarios on the built-in word lists

use wordle_entropy::config::SolverConfig;
use wordle_entropy::constraints::{aggregate, filter};
use wordle_entropy::core::{Hint, Word};
use wordle_entropy::parallel::{FailurePolicy, ParallelExecutor};
use wordle_entropy::solver::entropy::{entropy, rank, score_map};
use wordle_entropy::solver::{Solver, bot};
use wordle_entropy::wordlists::Lexicon;

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn hint(guess: &str, answer: &str) -> String {
    Hint::encode(&word(guess), &word(answer)).basic()
}

#[test]
fn duplicate_letter_hints() {
    assert_eq!(hint("there", "where"), ".CCCC");
    assert_eq!(hint("keeps", "abbey"), ".P...");
    assert_eq!(hint("speed", "erase"), "P.PP.");
    assert_eq!(hint("erase", "speed"), "P..PP");
    assert_eq!(hint("aaron", "koran"), "P.CPC");
    assert_eq!(hint("table", "lobby"), "..CP.");
    assert_eq!(hint("eerie", "there"), "P.P.C");
}

#[test]
fn crane_then_pious_finds_chest() {
    let lexicon = Lexicon::embedded().unwrap();
    let chest = word("chest");

    let mut history = vec![(word("crane"), Hint::encode(&word("crane"), &chest))];
    let constraints = aggregate(&history);
    assert_eq!(constraints.correct.get(&0), Some(&b'C'));
    assert!(constraints.wrong_position.contains(&(b'E', 4)));
    for letter in [b'A', b'R', b'N'] {
        assert!(constraints.not_in_word.contains(&letter));
    }
    assert_eq!(filter(lexicon.answers(), &constraints).len(), 11);

    history.push((word("pious"), Hint::encode(&word("pious"), &chest)));
    assert_eq!(filter(lexicon.answers(), &aggregate(&history)), vec![chest]);
}

#[test]
fn answer_survives_its_own_history() {
    let lexicon = Lexicon::embedded().unwrap();
    for answer in lexicon.answers().iter().step_by(97) {
        let history: Vec<_> = ["crane", "pious", "lymph"]
            .iter()
            .map(|g| (word(g), Hint::encode(&word(g), answer)))
            .collect();
        let possible = filter(lexicon.answers(), &aggregate(&history));
        assert!(possible.contains(answer), "{answer} was filtered out");
    }
}

#[test]
fn hint_probabilities_sum_to_one() {
    let lexicon = Lexicon::embedded().unwrap();
    for guess in ["crane", "zzzzz", "eerie"] {
        let total: f64 = score_map(&word(guess), lexicon.answers())
            .values()
            .map(|s| s.p)
            .sum();
        assert!((total - 1.0).abs() < 0.01, "{guess}: {total}");
    }
}

#[test]
fn top_ranked_guess_has_maximal_entropy() {
    let lexicon = Lexicon::embedded().unwrap();
    let executor = ParallelExecutor::new(0, FailurePolicy::Propagate).unwrap();
    let guesses = &lexicon.words()[..200];

    let ranked = rank(&executor, guesses, lexicon.answers());
    assert_eq!(ranked.len(), guesses.len());
    for scored in &ranked {
        assert!(scored.entropy <= ranked[0].entropy);
        assert!((scored.entropy - entropy(&scored.word, lexicon.answers())).abs() < 1e-12);
    }
}

#[test]
fn entropy_is_zero_only_for_a_single_bucket() {
    let answers = [word("chest"), word("ghost")];
    assert_eq!(entropy(&word("qxzvj"), &answers), 0.0);
    assert!(entropy(&word("chest"), &answers) > 0.0);
}

#[test]
fn solver_wins_sampled_games() {
    let lexicon = Lexicon::embedded().unwrap();
    let config = SolverConfig::default();
    let executor = ParallelExecutor::new(0, FailurePolicy::Propagate).unwrap();
    let solver = Solver::new(&lexicon, &config, &executor);

    for answer in ["chest", "where"] {
        let game = bot::play(&solver, word(answer)).unwrap();
        assert!(game.is_won(), "lost on {answer}");
        assert!(game.history().len() <= config.max_guesses);
        assert_eq!(game.history()[0].0, word("crane"));
    }
}
