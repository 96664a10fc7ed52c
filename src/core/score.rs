//! Guess scoring
//!
//! Feedback per position:
//! - `Exact` when the guess letter matches the target letter at that position
//! - `Partial` when the target contains the letter anywhere else
//! - `Wrong` otherwise
//!
//! The partial test is plain membership: a letter guessed twice against a
//! target holding it once is marked at both positions.

use super::letter::{AttemptRow, LetterCell, LetterState};

/// Score `guess` against `target`
///
/// The row has one cell per target position. Missing guess letters produce
/// blank cells.
///
/// # Examples
/// ```
/// use yawdle::core::{score, LetterState};
///
/// let row = score("apple", "alpea");
/// let states: Vec<_> = row.states().collect();
/// assert_eq!(states, vec![
///     LetterState::Exact,
///     LetterState::Partial,
///     LetterState::Exact,
///     LetterState::Partial,
///     LetterState::Partial,
/// ]);
/// ```
#[must_use]
pub fn score(target: &str, guess: &str) -> AttemptRow {
    let target = target.as_bytes();
    let mut guess = guess.bytes();

    let cells = target
        .iter()
        .map(|&expected| {
            let Some(letter) = guess.next() else {
                return LetterCell::BLANK;
            };
            let state = if letter == expected {
                LetterState::Exact
            } else if target.contains(&letter) {
                LetterState::Partial
            } else {
                LetterState::Wrong
            };
            LetterCell::new(char::from(letter), state)
        })
        .collect();

    AttemptRow::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(row: &AttemptRow) -> Vec<LetterState> {
        row.states().collect()
    }

    #[test]
    fn identical_words_are_all_exact() {
        for word in ["crane", "slate", "apple", "aaaaa", "zebra"] {
            let row = score(word, word);
            assert!(row.is_solved(), "{word} should score all exact");
            assert_eq!(row.word(), word);
        }
    }

    #[test]
    fn disjoint_words_are_all_wrong() {
        let row = score("abcde", "fghij");
        assert!(states(&row).iter().all(|&s| s == LetterState::Wrong));
    }

    #[test]
    fn alpea_against_apple() {
        use LetterState::{Exact, Partial};
        let row = score("apple", "alpea");
        assert_eq!(states(&row), vec![Exact, Partial, Exact, Partial, Partial]);
        assert_eq!(row.word(), "alpea");
    }

    #[test]
    fn duplicate_letters_use_membership() {
        use LetterState::{Partial, Wrong};
        // "speed" has two e's; "erase" holds e at positions 0 and 4 only.
        let row = score("erase", "speed");
        assert_eq!(states(&row), vec![Partial, Wrong, Partial, Partial, Wrong]);

        // One 'o' in the target still marks every misplaced 'o' partial.
        let row = score("polka", "ozone");
        assert_eq!(row.cells()[0].state, Partial);
        assert_eq!(row.cells()[2].state, Partial);
    }

    #[test]
    fn every_cell_is_scored_for_equal_lengths() {
        let pairs = [("crane", "slate"), ("robot", "floor"), ("apple", "zebra")];
        for (target, guess) in pairs {
            let row = score(target, guess);
            assert_eq!(row.len(), 5);
            assert!(row.states().all(LetterState::is_scored));
        }
    }

    #[test]
    fn short_guess_leaves_blanks() {
        let row = score("crane", "cr");
        assert_eq!(row.len(), 5);
        assert_eq!(row.cells()[0].state, LetterState::Exact);
        assert_eq!(row.cells()[4], LetterCell::BLANK);
    }

    #[test]
    fn score_does_not_mutate_inputs() {
        let target = String::from("crane");
        let guess = String::from("nacre");
        let _ = score(&target, &guess);
        assert_eq!(target, "crane");
        assert_eq!(guess, "nacre");
    }
}
