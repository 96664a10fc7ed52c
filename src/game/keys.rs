//! Logical key tokens
//!
//! Presentation layers translate raw key or pointer input into these tokens.

use crate::core::normalize_letter;

/// A logical key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    Letter(char),
    Enter,
    Backspace,
}

impl KeyToken {
    /// Parse `"Enter"`, `"Backspace"` or a single letter
    ///
    /// Letters are lowercased; anything else is not a token.
    ///
    /// # Examples
    /// ```
    /// use yawdle::game::KeyToken;
    ///
    /// assert_eq!(KeyToken::parse("Q"), Some(KeyToken::Letter('q')));
    /// assert_eq!(KeyToken::parse("Enter"), Some(KeyToken::Enter));
    /// assert_eq!(KeyToken::parse("Shift"), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::letter(c),
                    _ => None,
                }
            }
        }
    }

    /// Letter token for `c`, if it is a letter
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        normalize_letter(c).map(Self::Letter)
    }
}
