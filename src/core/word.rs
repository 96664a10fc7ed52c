//! Guess normalization
//!
//! Player input is reduced to lowercase ASCII letters before it is scored or
//! looked up.

/// Normalize raw input into a candidate guess
///
/// Lowercases, drops every non-letter character and truncates to `length`
/// letters.
///
/// # Examples
/// ```
/// use yawdle::core::normalize_word;
///
/// assert_eq!(normalize_word("Cr-ane!", 5), "crane");
/// assert_eq!(normalize_word("planets", 5), "plane");
/// assert_eq!(normalize_word("ab", 5), "ab");
/// ```
#[must_use]
pub fn normalize_word(input: &str, length: usize) -> String {
    input
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_lowercase)
        .take(length)
        .collect()
}

/// Normalize a single typed character, if it is a letter
#[must_use]
pub fn normalize_letter(c: char) -> Option<char> {
    let lower = c.to_ascii_lowercase();
    lower.is_ascii_lowercase().then_some(lower)
}

/// Whether `word` is a well-formed dictionary entry (lowercase ASCII letters)
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}
