//! Formatting utilities for terminal output

use crate::core::{AttemptRow, LetterCell, LetterState};
use colored::{ColoredString, Colorize};

/// A board cell as a coloured tile, e.g. ` C ` on green
#[must_use]
pub fn colored_cell(cell: LetterCell) -> ColoredString {
    let tile = format!(" {} ", cell.letter.to_ascii_uppercase());
    match cell.state {
        LetterState::Exact => tile.black().on_green().bold(),
        LetterState::Partial => tile.black().on_yellow().bold(),
        LetterState::Wrong => tile.white().on_bright_black(),
        LetterState::Key => tile.bright_white().bold(),
        LetterState::Blank | LetterState::Disabled => " · ".bright_black(),
    }
}

/// A whole row of coloured tiles
#[must_use]
pub fn colored_row(row: &AttemptRow) -> String {
    row.cells()
        .iter()
        .map(|&cell| colored_cell(cell).to_string())
        .collect()
}

/// Letters of a row in uppercase with blanks shown as dots
#[must_use]
pub fn plain_row(row: &AttemptRow) -> String {
    row.cells()
        .iter()
        .map(|cell| match cell.state {
            LetterState::Blank | LetterState::Disabled => '·',
            _ => cell.letter.to_ascii_uppercase(),
        })
        .collect()
}

/// A row for the terminal: coloured tiles, or letters plus emoji when
/// colour is off
#[must_use]
pub fn row_text(row: &AttemptRow, colorize: bool) -> String {
    if colorize {
        colored_row(row)
    } else if row.states().any(LetterState::is_scored) {
        format!("{}  {}", plain_row(row), row.to_emoji())
    } else {
        plain_row(row)
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn plain_row_shows_letters_and_blanks() {
        assert_eq!(plain_row(&score("crane", "slate")), "SLATE");
        assert_eq!(plain_row(&AttemptRow::provisional("cr", 5)), "CR···");
        assert_eq!(plain_row(&AttemptRow::masked(5)), "·····");
    }

    #[test]
    fn uncoloured_rows_keep_feedback() {
        assert_eq!(row_text(&score("crane", "crane"), false), "CRANE  🟩🟩🟩🟩🟩");
        assert_eq!(row_text(&AttemptRow::provisional("cr", 5), false), "CR···");
        assert!(row_text(&score("crane", "slate"), true).contains(" S "));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
