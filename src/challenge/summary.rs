//! Coarse result summary
//!
//! One code per cell (`w`, `p`, `e`), rows joined by `-`. Carries feedback
//! categories only, never letters, so it can travel unencrypted.

use crate::core::{AttemptRow, LetterState};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const ROW_SEPARATOR: char = '-';

/// Per-row feedback states without letter identities
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSummary {
    rows: Vec<Vec<LetterState>>,
}

impl ResultSummary {
    /// Summarize scored rows
    ///
    /// Unscored cells are kept as `Blank`.
    #[must_use]
    pub fn from_rows(rows: &[AttemptRow]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.states()
                    .map(|state| {
                        if state.is_scored() {
                            state
                        } else {
                            LetterState::Blank
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<LetterState>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the last row is all exact
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.rows.last().is_some_and(|row| {
            !row.is_empty() && row.iter().all(|state| *state == LetterState::Exact)
        })
    }

    /// Emoji grid, one line per row
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().map(|state| state.emoji()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, "{ROW_SEPARATOR}")?;
            }
            for state in row {
                // Blank has no code; any non-code character reads back as blank
                write!(f, "{}", state.code().unwrap_or('b'))?;
            }
        }
        Ok(())
    }
}

impl FromStr for ResultSummary {
    type Err = Infallible;

    /// Lenient parse: unknown codes become `Blank`, empty input is no rows
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        let rows = s
            .split(ROW_SEPARATOR)
            .map(|row| row.chars().map(LetterState::from_code).collect())
            .collect();
        Ok(Self { rows })
    }
}
