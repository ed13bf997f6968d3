//! Live game assistant
//!
//! Suggests guesses for a game played elsewhere: the user types the word
//! actually played and the hint the game showed, and the assistant narrows
//! the candidates.

use std::collections::BTreeSet;
use std::io::BufRead;

use anyhow::Result;
use colored::Colorize;

use super::input::read_line;
use crate::constraints::{FactSet, LetterFact, aggregate};
use crate::core::{Hint, Word};
use crate::game::consistent_answers;
use crate::output::formatters::{colored_guess, keyboard};
use crate::solver::Solver;
use crate::solver::entropy::entropy;

enum Reply<T> {
    Value(T),
    Undo,
    New,
    Quit,
}

fn command<T>(line: &str) -> Option<Reply<T>> {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Some(Reply::Quit),
        "new" | "n" => Some(Reply::New),
        "undo" | "u" => Some(Reply::Undo),
        _ => None,
    }
}

fn read_guess<R: BufRead>(
    input: &mut R,
    solver: &Solver<'_>,
    suggestion: Word,
) -> Result<Reply<Word>> {
    loop {
        let Some(line) = read_line(input, &format!("Word played [{suggestion}]"))? else {
            return Ok(Reply::Quit);
        };
        if line.is_empty() {
            return Ok(Reply::Value(suggestion));
        }
        if let Some(reply) = command(&line) {
            return Ok(reply);
        }
        match solver.lexicon().find(&line) {
            Some(word) => return Ok(Reply::Value(word)),
            None => println!("{} '{line}' is not in the word list\n", "✗".red()),
        }
    }
}

fn read_hint<R: BufRead>(input: &mut R) -> Result<Reply<Hint>> {
    loop {
        let Some(line) = read_line(input, "Hint (C/P/. or 🟩🟨⬛, 'win')")? else {
            return Ok(Reply::Quit);
        };
        if let Some(reply) = command(&line) {
            return Ok(reply);
        }
        if matches!(line.to_lowercase().as_str(), "win" | "correct" | "solved") {
            return Ok(Reply::Value(Hint::WIN));
        }
        match line.parse::<Hint>() {
            Ok(hint) => return Ok(Reply::Value(hint)),
            Err(err) => println!("{} {err}\n", "✗".red()),
        }
    }
}

fn letters(set: &BTreeSet<u8>) -> String {
    if set.is_empty() {
        return "-".to_string();
    }
    set.iter().map(|&b| char::from(b)).collect()
}

fn show_state(history: &[(Word, Hint)]) {
    let mut facts = FactSet::new();
    for (word, hint) in history {
        println!("  {}", colored_guess(word, hint));
        for fact in LetterFact::from_guess(word, hint) {
            facts.insert(fact);
        }
    }
    println!();
    for row in keyboard(&facts) {
        println!("  {row}");
    }

    let constraints = aggregate(history);
    println!(
        "\n  In word: {}   Not in word: {}",
        letters(&constraints.present_letters()).green(),
        letters(&constraints.absent_letters()).dimmed()
    );
    println!();
}

/// Run the assistant until the user quits or input ends
///
/// Returns the number of games solved.
///
/// # Errors
///
/// Returns an error if reading input fails or the solver fails.
pub fn run_assist<R: BufRead>(solver: &Solver<'_>, input: &mut R) -> Result<usize> {
    let max_guesses = solver.config().max_guesses;
    let mut history: Vec<(Word, Hint)> = Vec::new();
    let mut solved = 0;

    println!("\nI'll suggest guesses; tell me the word you played and the hint you got.");
    println!("Commands: 'undo' to take back a guess, 'new' to start over, 'quit' to exit\n");

    loop {
        let possible = match consistent_answers(solver.lexicon(), &history) {
            Ok(possible) => possible,
            Err(err) => {
                println!("\n{} {err}; a hint may be mistyped.", "✗".red());
                let line = read_line(input, "Command (undo/new/quit)")?;
                match line.as_deref().map_or(Some(Reply::Quit), command::<()>) {
                    Some(Reply::Quit) => return Ok(solved),
                    Some(Reply::New) => history.clear(),
                    Some(Reply::Undo) => {
                        history.pop();
                    }
                    Some(Reply::Value(())) | None => {}
                }
                continue;
            }
        };

        let suggestion = if history.is_empty() {
            solver.opening()?
        } else {
            solver
                .best_guess(&possible, max_guesses.saturating_sub(history.len()))?
                .word
        };

        println!("{}", "─".repeat(60));
        println!(
            "Turn {}: {} candidates remaining",
            history.len() + 1,
            possible.len()
        );
        println!(
            "Suggested guess: {} ({:.3} bits)",
            suggestion.as_str().bright_yellow().bold(),
            entropy(&suggestion, &possible)
        );
        if possible.len() <= 10 {
            let listed: Vec<&str> = possible.iter().map(Word::as_str).collect();
            println!("Candidates: {}", listed.join(", "));
        }
        println!();

        let word = match read_guess(input, solver, suggestion)? {
            Reply::Value(word) => word,
            Reply::Undo => {
                history.pop();
                continue;
            }
            Reply::New => {
                history.clear();
                continue;
            }
            Reply::Quit => return Ok(solved),
        };
        let hint = match read_hint(input)? {
            Reply::Value(hint) => hint,
            Reply::Undo => continue,
            Reply::New => {
                history.clear();
                continue;
            }
            Reply::Quit => return Ok(solved),
        };

        history.push((word, hint));
        show_state(&history);

        if hint.is_win() {
            solved += 1;
            println!(
                "{}\n",
                format!("🎉 Solved in {} guesses! Starting a new game.", history.len())
                    .green()
                    .bold()
            );
            history.clear();
        } else if history.len() >= max_guesses {
            println!("Out of guesses. Starting a new game.\n");
            history.clear();
        }
    }
}
