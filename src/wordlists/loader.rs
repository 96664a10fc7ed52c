//! Word list loading utilities
//!
//! Parses `word frequency` records from text, files, or the embedded table.

use super::{WordEntry, WordList, WordListError};
use std::fs;
use std::path::Path;

/// Parse newline-delimited `word frequency` records
///
/// Blank lines are skipped. Malformed records are configuration errors and
/// carry their 1-based line number.
///
/// # Errors
///
/// Returns `WordListError` for a missing or non-positive frequency, or when
/// the resulting list fails validation in [`WordList::new`].
///
/// # Examples
/// ```
/// use yawdle::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("apple 10\n\nzebra 1\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words.frequency("apple"), Some(10));
/// ```
pub fn parse_word_list(content: &str) -> Result<WordList, WordListError> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_number = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let word = fields.next().unwrap_or_default();
        let frequency = fields
            .next()
            .ok_or(WordListError::MissingFrequency { line: line_number })?;

        let frequency = frequency
            .parse::<u32>()
            .ok()
            .filter(|&f| f > 0)
            .ok_or_else(|| WordListError::InvalidFrequency {
                line: line_number,
                value: frequency.to_string(),
            })?;

        entries.push(WordEntry::new(word, frequency));
    }

    WordList::new(entries)
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or any parse and
/// validation error from [`parse_word_list`].
///
/// # Examples
/// ```no_run
/// use yawdle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_word_list(&content)
}

/// Build a word list from a `(word, frequency)` slice
///
/// # Errors
///
/// Returns any validation error from [`WordList::new`].
///
/// # Examples
/// ```
/// use yawdle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&[("apple", 10), ("zebra", 1)]).unwrap();
/// assert_eq!(words.word_length(), 5);
/// ```
pub fn words_from_slice(slice: &[(&str, u32)]) -> Result<WordList, WordListError> {
    WordList::new(
        slice
            .iter()
            .map(|&(word, frequency)| WordEntry::new(word, frequency)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_word_list("\napple 10\n   \nzebra 1\n\n").unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("zebra"));
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        let words = parse_word_list("  apple   10  \n").unwrap();
        assert_eq!(words.frequency("apple"), Some(10));
    }

    #[test]
    fn parse_reports_missing_frequency() {
        let err = parse_word_list("apple 10\nzebra\n").unwrap_err();
        assert!(matches!(err, WordListError::MissingFrequency { line: 2 }));
    }

    #[test]
    fn parse_rejects_bad_frequency() {
        let err = parse_word_list("apple ten\n").unwrap_err();
        assert!(matches!(
            err,
            WordListError::InvalidFrequency { line: 1, ref value } if value == "ten"
        ));

        let err = parse_word_list("apple 0\n").unwrap_err();
        assert!(matches!(err, WordListError::InvalidFrequency { line: 1, .. }));
    }

    #[test]
    fn parse_empty_input_is_a_configuration_error() {
        assert!(matches!(
            parse_word_list("\n\n"),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, WordListError::Io { ref path, .. } if path.contains("here.txt")));
    }

    #[test]
    fn load_from_file_round_trips_embedded_format() {
        let path = std::env::temp_dir().join(format!("yawdle-words-{}.txt", std::process::id()));
        fs::write(&path, "crane 3\nslate 5\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.frequency("slate"), Some(5));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn slice_conversion() {
        let words = words_from_slice(&[("crane", 3), ("slate", 3), ("irate", 1)]).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words.buckets().len(), 2);
    }
}
