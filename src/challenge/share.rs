//! Messages for the sharing sink

use crate::core::AttemptRow;
use crate::game::{GameStatus, Seed};
use serde::Serialize;

/// What a sharing sink receives
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMessage {
    pub title: String,
    pub body: String,
    pub url: String,
}

impl ShareMessage {
    /// Build the scorecard for a game
    ///
    /// The score is `n/limit` for a win and `X/limit` otherwise, followed by
    /// one emoji line per committed row.
    ///
    /// # Examples
    /// ```
    /// use yawdle::challenge::ShareMessage;
    /// use yawdle::core::score;
    /// use yawdle::game::{GameStatus, Seed};
    ///
    /// let rows = [score("crane", "slate"), score("crane", "crane")];
    /// let message = ShareMessage::new(
    ///     &Seed::new("7"),
    ///     &rows,
    ///     GameStatus::Ended { success: true },
    ///     6,
    ///     "https://yawdle.app/?s=7",
    /// );
    /// assert_eq!(message.body, "yawdle 7 2/6\n\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn new(
        seed: &Seed,
        rows: &[AttemptRow],
        status: GameStatus,
        attempts_limit: usize,
        url: &str,
    ) -> Self {
        let score = match status {
            GameStatus::Ended { success: true } => rows.len().to_string(),
            GameStatus::Ended { success: false } | GameStatus::InProgress => "X".to_string(),
        };

        let mut body = format!("yawdle {seed} {score}/{attempts_limit}");
        if !rows.is_empty() {
            let grid = rows
                .iter()
                .map(AttemptRow::to_emoji)
                .collect::<Vec<_>>()
                .join("\n");
            body.push_str("\n\n");
            body.push_str(&grid);
        }

        Self {
            title: format!("yawdle {seed}"),
            body,
            url: url.to_string(),
        }
    }

    /// Body and url as one block of text
    #[must_use]
    pub fn to_text(&self) -> String {
        format!("{}\n\n{}", self.body, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn loss_scores_x() {
        let rows = vec![score("crane", "slate"); 6];
        let message = ShareMessage::new(
            &Seed::new("9"),
            &rows,
            GameStatus::Ended { success: false },
            6,
            "u",
        );
        assert!(message.body.starts_with("yawdle 9 X/6\n\n"));
        assert_eq!(message.body.lines().count(), 8);
    }

    #[test]
    fn empty_game_has_no_grid() {
        let message = ShareMessage::new(&Seed::new("1"), &[], GameStatus::InProgress, 6, "u");
        assert_eq!(message.body, "yawdle 1 X/6");
        assert_eq!(message.title, "yawdle 1");
        assert_eq!(message.to_text(), "yawdle 1 X/6\n\nu");
    }

    #[test]
    fn grid_never_contains_letters() {
        let rows = [score("apple", "alpea")];
        let message = ShareMessage::new(
            &Seed::new("s"),
            &rows,
            GameStatus::InProgress,
            6,
            "u",
        );
        let grid = message.body.lines().last().unwrap();
        assert_eq!(grid, "🟩🟨🟩🟨🟨");
    }
}
