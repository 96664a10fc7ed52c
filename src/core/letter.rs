//! Letter feedback states and scored rows
//!
//! A row holds one cell per target position. Cells carry the letter shown on
//! the board and the feedback state for that position.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback state of a single letter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    /// No data
    #[default]
    Blank,
    /// Typed but not yet scored
    Key,
    /// Letter is not in the target
    Wrong,
    /// Letter is in the target at another position
    Partial,
    /// Letter is in the target at this position
    Exact,
    /// Reserved for presentation affordances
    Disabled,
}

impl LetterState {
    /// Whether this state is the outcome of scoring a submitted guess
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Wrong | Self::Partial | Self::Exact)
    }

    /// One-character code used by result summaries
    ///
    /// Only scored states have a code.
    #[must_use]
    pub const fn code(self) -> Option<char> {
        match self {
            Self::Wrong => Some('w'),
            Self::Partial => Some('p'),
            Self::Exact => Some('e'),
            _ => None,
        }
    }

    /// Parse a summary code; anything unknown reads as `Blank`
    #[must_use]
    pub const fn from_code(code: char) -> Self {
        match code {
            'w' => Self::Wrong,
            'p' => Self::Partial,
            'e' => Self::Exact,
            _ => Self::Blank,
        }
    }

    /// Scorecard emoji for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Partial => '🟨',
            Self::Wrong => '⬜',
            _ => '⬛',
        }
    }

    /// Precedence when several states compete for one keyboard key
    #[must_use]
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::Blank | Self::Disabled => 0,
            Self::Key => 1,
            Self::Wrong => 2,
            Self::Partial => 3,
            Self::Exact => 4,
        }
    }

    /// Lowercase name, as used in serialized snapshots
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Key => "key",
            Self::Wrong => "wrong",
            Self::Partial => "partial",
            Self::Exact => "exact",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCell {
    pub letter: char,
    pub state: LetterState,
}

impl LetterCell {
    /// An empty cell
    pub const BLANK: Self = Self {
        letter: ' ',
        state: LetterState::Blank,
    };

    #[must_use]
    pub const fn new(letter: char, state: LetterState) -> Self {
        Self { letter, state }
    }
}

/// Per-letter feedback for one board row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttemptRow(Vec<LetterCell>);

impl AttemptRow {
    /// Build a row from cells
    #[must_use]
    pub const fn from_cells(cells: Vec<LetterCell>) -> Self {
        Self(cells)
    }

    /// A row with no letters and no feedback
    #[must_use]
    pub fn blank(length: usize) -> Self {
        Self(vec![LetterCell::BLANK; length])
    }

    /// A rejected submission: letters hidden, nothing scored
    ///
    /// Identical to a blank row so that no letter positions leak.
    #[must_use]
    pub fn masked(length: usize) -> Self {
        Self::blank(length)
    }

    /// Preview of an unsubmitted draft
    ///
    /// Typed positions are `Key`, the remainder `Blank`. Letters beyond
    /// `length` are ignored.
    ///
    /// # Examples
    /// ```
    /// use yawdle::core::{AttemptRow, LetterState};
    ///
    /// let row = AttemptRow::provisional("cr", 5);
    /// assert_eq!(row.cells()[1].state, LetterState::Key);
    /// assert_eq!(row.cells()[2].state, LetterState::Blank);
    /// ```
    #[must_use]
    pub fn provisional(draft: &str, length: usize) -> Self {
        let mut letters = draft.chars();
        let cells = (0..length)
            .map(|_| match letters.next() {
                Some(letter) => LetterCell::new(letter, LetterState::Key),
                None => LetterCell::BLANK,
            })
            .collect();
        Self(cells)
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[LetterCell] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every cell is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|cell| cell.state == LetterState::Exact)
    }

    /// The letters of this row as a string (blanks as spaces)
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|cell| cell.letter).collect()
    }

    /// The states of this row, in position order
    pub fn states(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.0.iter().map(|cell| cell.state)
    }

    /// Scorecard emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.states().map(LetterState::emoji).collect()
    }
}
