//! Several boards played with one guess sequence

use std::fmt;

use super::session::{Game, GameError};
use crate::config::MULTI_MAX_GUESSES;
use crate::core::{HintState, Word};
use crate::wordlists::Lexicon;

/// N games sharing every guess
#[derive(Debug, Clone)]
pub struct MultiGame<'a> {
    boards: Vec<Game<'a>>,
    max_guesses: usize,
    guesses: usize,
}

impl<'a> MultiGame<'a> {
    #[must_use]
    pub fn new(answers: &[Word], lexicon: &'a Lexicon) -> Self {
        Self::with_max_guesses(answers, lexicon, MULTI_MAX_GUESSES)
    }

    #[must_use]
    pub fn with_max_guesses(answers: &[Word], lexicon: &'a Lexicon, max_guesses: usize) -> Self {
        Self {
            boards: answers
                .iter()
                .map(|&answer| Game::new(answer, lexicon).with_max_guesses(max_guesses))
                .collect(),
            max_guesses,
            guesses: 0,
        }
    }

    /// Play a guess on every unfinished board
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameOver` when all boards are finished, and the
    /// validation errors of [`Game::guess`]. Nothing changes on error.
    pub fn guess(&mut self, raw: &str) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let word = Word::new(raw.trim())?;
        if self
            .boards
            .first()
            .is_some_and(|board| !board.lexicon().contains(&word))
        {
            return Err(GameError::UnknownWord(word));
        }

        for board in self.boards.iter_mut().filter(|board| !board.is_over()) {
            board.guess(word.as_str())?;
        }
        self.guesses += 1;
        Ok(())
    }

    #[must_use]
    pub fn boards(&self) -> &[Game<'a>] {
        &self.boards
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.guesses >= self.max_guesses || self.boards.iter().all(Game::is_over)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.boards.iter().all(Game::is_won)
    }

    /// Guesses played so far
    #[must_use]
    pub const fn score(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses)
    }

    /// Possible answers of every board still being played
    ///
    /// # Errors
    ///
    /// Returns `GameError::Contradiction` if any open board has no answer left.
    pub fn possible_answers(&self) -> Result<Vec<Vec<Word>>, GameError> {
        self.boards
            .iter()
            .filter(|board| !board.is_over())
            .map(Game::possible_answers)
            .collect()
    }
}

fn marker(state: HintState) -> char {
    match state {
        HintState::Correct => '●',
        HintState::Misplaced => '○',
        HintState::Wrong => 'x',
    }
}

impl fmt::Display for MultiGame<'_> {
    /// Boards side by side, each row a guess followed by its markers
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.guesses {
            let cells: Vec<String> = self
                .boards
                .iter()
                .map(|board| match board.history().get(row) {
                    Some((word, hint)) => {
                        let markers: String = hint.states().iter().map(|&s| marker(s)).collect();
                        format!("{word} {markers}")
                    }
                    None => " ".repeat(11),
                })
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn guesses_apply_to_open_boards_only() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut game = MultiGame::new(&words(&["chest", "ghost"]), &lexicon);

        game.guess("chest").unwrap();
        assert!(game.boards()[0].is_won());
        assert!(!game.is_over());
        assert_eq!(game.possible_answers().unwrap().len(), 1);

        game.guess("ghost").unwrap();
        assert_eq!(game.boards()[0].history().len(), 1);
        assert_eq!(game.boards()[1].history().len(), 2);
        assert!(game.is_won());
        assert!(game.is_over());
        assert_eq!(game.score(), 2);
        assert_eq!(game.guess("crane"), Err(GameError::GameOver));
    }

    #[test]
    fn board_without_answers_is_a_contradiction() {
        let lexicon = Lexicon::new(words(&["crane", "slate"]), None).unwrap();
        let mut game = MultiGame::new(&words(&["slate", "qxzvj"]), &lexicon);

        game.guess("crane").unwrap();
        assert_eq!(game.possible_answers(), Err(GameError::Contradiction));
    }

    #[test]
    fn runs_out_of_guesses() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut game = MultiGame::with_max_guesses(&words(&["chest", "ghost"]), &lexicon, 1);

        game.guess("chest").unwrap();
        assert!(game.is_over());
        assert!(!game.is_won());
    }

    #[test]
    fn unknown_word_rejected() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut game = MultiGame::new(&words(&["chest", "ghost"]), &lexicon);

        assert!(matches!(game.guess("qxzvj"), Err(GameError::UnknownWord(_))));
        assert_eq!(game.score(), 0);
        assert_eq!(game.guesses_remaining(), MULTI_MAX_GUESSES);
    }

    #[test]
    fn display_side_by_side() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut game = MultiGame::new(&words(&["chest", "ghost"]), &lexicon);
        game.guess("chest").unwrap();
        game.guess("ghost").unwrap();

        let text = game.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "CHEST ●●●●● | CHEST x●x●●");
        assert_eq!(lines[1], "            | GHOST ●●●●●");
    }
}
