//! Reveal command
//!
//! Opens a challenge link with a guessed solution.

use crate::challenge::{Challenge, DecodeError, ShareLink};

/// Outcome of one reveal attempt
#[derive(Debug)]
pub struct RevealResult {
    pub challenge: Challenge,
    pub error: Option<DecodeError>,
}

impl RevealResult {
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.challenge.is_revealed()
    }
}

/// Parse `link` and try to open its challenge with `solution`
///
/// A wrong solution is not an error: it is reported in the result so the
/// summary can still be shown.
///
/// # Errors
///
/// Returns an error if the link cannot be parsed or carries no challenge.
pub fn reveal_link(link: &str, solution: &str) -> Result<RevealResult, String> {
    let link = ShareLink::parse(link).map_err(|e| e.to_string())?;
    let mut challenge = Challenge::from_link(&link)
        .ok_or_else(|| format!("link for seed {} carries no challenge", link.seed))?;

    let error = challenge.try_reveal(solution).err();
    if let Some(e) = &error {
        log::info!("Reveal failed: {e}");
    }

    Ok(RevealResult { challenge, error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::encode;
    use crate::game::Seed;

    fn challenge_url() -> String {
        let mut link = ShareLink::new(Seed::new("x"));
        link.challenge = Some(encode("crane", &["slate".to_string()]).unwrap());
        link.to_url("https://yawdle.app/")
    }

    #[test]
    fn reveals_with_right_word() {
        let result = reveal_link(&challenge_url(), "crane").unwrap();
        assert!(result.is_revealed());
        assert!(result.error.is_none());
        let revealed = result.challenge.revealed().unwrap();
        assert_eq!(revealed.attempts, ["slate"]);
    }

    #[test]
    fn wrong_word_is_reported() {
        let result = reveal_link(&challenge_url(), "slate").unwrap();
        assert!(!result.is_revealed());
        assert_eq!(result.error, Some(DecodeError::Rejected));
    }

    #[test]
    fn plain_link_is_an_error() {
        assert!(reveal_link("https://yawdle.app/?s=1", "crane").is_err());
        assert!(reveal_link("https://yawdle.app/", "crane").is_err());
    }
}
