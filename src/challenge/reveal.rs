//! Receiving side of a challenge link
//!
//! A challenge starts unrevealed, showing at most the coarse summary. Supplying
//! the right solution decrypts the attempt history and re-scores it.

use super::codec::{DecodeError, decode};
use super::link::ShareLink;
use super::summary::ResultSummary;
use crate::core::{AttemptRow, normalize_word, score};
use crate::game::Seed;

/// A decrypted play-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedChallenge {
    pub solution: String,
    pub attempts: Vec<String>,
    pub rows: Vec<AttemptRow>,
}

impl RevealedChallenge {
    /// Whether the sharer found the solution
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.rows.last().is_some_and(AttemptRow::is_solved)
    }
}

/// A challenge received through a link
#[derive(Debug, Clone)]
pub struct Challenge {
    seed: Seed,
    payload: String,
    summary: Option<ResultSummary>,
    revealed: Option<RevealedChallenge>,
}

impl Challenge {
    /// Unrevealed challenge from a link; `None` if the link carries no payload
    #[must_use]
    pub fn from_link(link: &ShareLink) -> Option<Self> {
        let payload = link.challenge.clone()?;
        Some(Self {
            seed: link.seed.clone(),
            payload,
            summary: link.summary.clone(),
            revealed: None,
        })
    }

    #[must_use]
    pub const fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Unencrypted summary carried alongside the payload
    #[must_use]
    pub const fn summary(&self) -> Option<&ResultSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub const fn revealed(&self) -> Option<&RevealedChallenge> {
        self.revealed.as_ref()
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed.is_some()
    }

    /// Try to open the challenge with `solution`
    ///
    /// On failure the challenge stays unrevealed and can be retried. Once
    /// revealed, further calls return the existing result.
    ///
    /// # Errors
    ///
    /// Returns the `DecodeError` from the codec; `Rejected` means the word
    /// was wrong.
    pub fn try_reveal(&mut self, solution: &str) -> Result<&RevealedChallenge, DecodeError> {
        if self.revealed.is_none() {
            let attempts = decode(solution, &self.payload)?;
            let solution = normalize_word(solution, solution.len());
            let rows = attempts
                .iter()
                .map(|attempt| score(&solution, attempt))
                .collect();
            log::debug!("Revealed challenge {} with {} attempts", self.seed, attempts.len());
            self.revealed = Some(RevealedChallenge {
                solution,
                attempts,
                rows,
            });
        }
        self.revealed.as_ref().ok_or(DecodeError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::encode;

    fn link(attempts: &[&str]) -> ShareLink {
        let attempts: Vec<String> = attempts.iter().map(ToString::to_string).collect();
        let mut link = ShareLink::new(Seed::new("x"));
        link.challenge = Some(encode("crane", &attempts).unwrap());
        link.summary = Some(ResultSummary::from_rows(
            &attempts
                .iter()
                .map(|a| score("crane", a))
                .collect::<Vec<_>>(),
        ));
        link
    }

    #[test]
    fn plain_link_is_not_a_challenge() {
        assert!(Challenge::from_link(&ShareLink::new(Seed::new("x"))).is_none());
    }

    #[test]
    fn starts_unrevealed_with_summary() {
        let challenge = Challenge::from_link(&link(&["slate", "crane"])).unwrap();
        assert!(!challenge.is_revealed());
        assert_eq!(challenge.summary().unwrap().to_string(), "wwewe-eeeee");
        assert_eq!(challenge.seed().as_str(), "x");
    }

    #[test]
    fn wrong_solution_keeps_it_hidden() {
        let mut challenge = Challenge::from_link(&link(&["slate"])).unwrap();
        assert_eq!(challenge.try_reveal("slate"), Err(DecodeError::Rejected));
        assert!(!challenge.is_revealed());
        assert!(challenge.revealed().is_none());
    }

    #[test]
    fn right_solution_rescores_attempts() {
        let mut challenge = Challenge::from_link(&link(&["slate", "crane"])).unwrap();
        assert!(challenge.try_reveal("irate").is_err());

        let revealed = challenge.try_reveal("CRANE").unwrap();
        assert_eq!(revealed.solution, "crane");
        assert_eq!(revealed.attempts, ["slate", "crane"]);
        assert_eq!(revealed.rows[0], score("crane", "slate"));
        assert!(revealed.is_success());
        assert!(challenge.is_revealed());
    }

    #[test]
    fn revealed_challenge_is_sticky() {
        let mut challenge = Challenge::from_link(&link(&["slate"])).unwrap();
        challenge.try_reveal("crane").unwrap();
        assert_eq!(challenge.try_reveal("wrong").unwrap().solution, "crane");
    }

    #[test]
    fn garbled_payload_is_malformed() {
        let mut link = ShareLink::new(Seed::new("x"));
        link.challenge = Some("!!".to_string());
        let mut challenge = Challenge::from_link(&link).unwrap();
        assert_eq!(challenge.try_reveal("crane"), Err(DecodeError::Malformed));
    }
}
