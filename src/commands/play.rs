//! Interactive game command
//!
//! The player guesses a secret answer; invalid or unknown words are reported
//! and retried without costing a guess.

use std::io::BufRead;

use anyhow::Result;
use colored::Colorize;

use super::input::read_line;
use crate::core::{WORD_SIZE, Word};
use crate::game::{Game, GameError};
use crate::output::print_board;
use crate::wordlists::Lexicon;

/// Play one game against `answer`, reading guesses from `input`
///
/// Returns the finished game, or the unfinished one if input runs out or the
/// player quits.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn run_play<'a, R: BufRead>(
    lexicon: &'a Lexicon,
    answer: Word,
    max_guesses: usize,
    input: &mut R,
) -> Result<Game<'a>> {
    let mut game = Game::new(answer, lexicon).with_max_guesses(max_guesses);

    println!(
        "\nGuess the {WORD_SIZE}-letter word in {max_guesses} tries. Type 'quit' to give up.\n"
    );

    while !game.is_over() {
        let prompt = format!("Guess {}/{max_guesses}", game.history().len() + 1);
        let Some(line) = read_line(input, &prompt)? else {
            break;
        };
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            break;
        }

        match game.guess(&line) {
            Ok(_) => {
                print_board(&game);
                if !game.is_over() {
                    let bits = game.information_value()?;
                    println!("  {bits:.2} bits known\n");
                }
            }
            Err(err @ (GameError::InvalidWord(_) | GameError::UnknownWord(_))) => {
                println!("{} {err}\n", "✗".red());
            }
            Err(err) => return Err(err.into()),
        }
    }

    if game.is_won() {
        println!(
            "{}",
            format!("🎉 Solved in {} guesses!", game.history().len())
                .green()
                .bold()
        );
    } else {
        println!("The answer was {}", answer.as_str().bright_yellow().bold());
    }
    Ok(game)
}
