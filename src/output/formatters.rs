//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::constraints::FactSet;
use crate::core::{Hint, HintState, Word};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Color a single letter by its hint state
#[must_use]
pub fn tile(letter: char, state: Option<HintState>) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        Some(HintState::Correct) => text.black().on_green().bold(),
        Some(HintState::Misplaced) => text.black().on_yellow().bold(),
        Some(HintState::Wrong) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn colored_guess(word: &Word, hint: &Hint) -> String {
    word.as_str()
        .chars()
        .zip(hint.states())
        .map(|(letter, &state)| tile(letter, Some(state)).to_string())
        .collect()
}

/// On-screen keyboard colored by the best state seen for each letter
#[must_use]
pub fn keyboard(facts: &FactSet) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| tile(char::from(letter), facts.best_state(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar, full at `log2(243)` bits
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = (Hint::COUNT as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
