//! On-screen keyboard colouring
//!
//! Folds game events into the best feedback seen for each letter.

use super::events::GameEvent;
use crate::core::LetterState;
use rustc_hash::FxHashMap;

/// QWERTY rows shown by keyboard displays
pub const KEYBOARD_LAYOUT: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Per-letter keyboard state driven by game events
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    letters: FxHashMap<char, LetterState>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event
    ///
    /// A letter never moves to a weaker state: exact beats partial beats wrong.
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Reset { .. } => self.letters.clear(),
            GameEvent::AttemptMade { row, .. } => {
                for cell in row.cells() {
                    let current = self.letters.entry(cell.letter).or_default();
                    if cell.state.rank() > current.rank() {
                        *current = cell.state;
                    }
                }
            }
            GameEvent::Ended { .. } => {}
        }
    }

    /// State of `letter`; untouched letters are plain keys
    #[must_use]
    pub fn state_of(&self, letter: char) -> LetterState {
        self.letters
            .get(&letter)
            .copied()
            .unwrap_or(LetterState::Key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn attempt(target: &str, guess: &str) -> GameEvent {
        GameEvent::AttemptMade {
            index: 0,
            row: score(target, guess),
        }
    }

    #[test]
    fn untouched_letters_are_keys() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.state_of('a'), LetterState::Key);
    }

    #[test]
    fn attempts_colour_letters() {
        let mut keyboard = KeyboardState::new();
        keyboard.apply(&attempt("crane", "slate"));

        assert_eq!(keyboard.state_of('s'), LetterState::Wrong);
        assert_eq!(keyboard.state_of('a'), LetterState::Exact);
        assert_eq!(keyboard.state_of('e'), LetterState::Exact);
        assert_eq!(keyboard.state_of('q'), LetterState::Key);
    }

    #[test]
    fn states_never_downgrade() {
        let mut keyboard = KeyboardState::new();
        keyboard.apply(&attempt("crane", "crisp")); // c exact
        keyboard.apply(&attempt("crane", "acorn")); // c partial
        assert_eq!(keyboard.state_of('c'), LetterState::Exact);
        assert_eq!(keyboard.state_of('o'), LetterState::Wrong);
    }

    #[test]
    fn reset_clears_colouring() {
        let mut keyboard = KeyboardState::new();
        keyboard.apply(&attempt("crane", "crane"));
        keyboard.apply(&GameEvent::Reset { seed: "1".into() });
        assert_eq!(keyboard.state_of('c'), LetterState::Key);
    }
}
