//! Word lists with frequency weights
//!
//! A [`WordList`] maps every playable word to its relative frequency and
//! groups words into frequency buckets for biased puzzle selection. The
//! default list is embedded into the binary at build time.

mod embedded;
pub mod loader;

use crate::core::is_valid_word;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;
use thiserror::Error;

pub use embedded::{WORDS, WORDS_COUNT};

/// Configuration errors raised while building a word list
///
/// None of these can be recovered from at runtime: without a valid list no
/// puzzle can be generated.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,
    #[error("word {word:?} has length {found}, expected {expected}")]
    MismatchedLength {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("word {0:?} must contain only lowercase ASCII letters")]
    InvalidWord(String),
    #[error("line {line}: missing frequency")]
    MissingFrequency { line: usize },
    #[error("line {line}: frequency {value:?} is not a positive integer")]
    InvalidFrequency { line: usize, value: String },
    #[error("failed to read word list {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A playable word and its relative frequency weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub frequency: u32,
}

impl WordEntry {
    #[must_use]
    pub fn new(word: impl Into<String>, frequency: u32) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Words sharing one frequency weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyBucket {
    pub frequency: u32,
    pub words: Vec<String>,
}

/// Validated, immutable word list
///
/// Invariants: non-empty, every word has the same length, no duplicates.
/// Buckets are ordered from the most frequent weight to the least frequent;
/// words inside a bucket keep their source order.
#[derive(Debug, Clone)]
pub struct WordList {
    frequencies: FxHashMap<String, u32>,
    buckets: Vec<FrequencyBucket>,
    word_length: usize,
}

impl WordList {
    /// Build and validate a word list
    ///
    /// Repeated words keep their first frequency; later duplicates are
    /// logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns `WordListError` when the list is empty, a word has invalid
    /// characters or a frequency of zero, or word lengths differ.
    pub fn new<I>(entries: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = WordEntry>,
    {
        let mut frequencies: FxHashMap<String, u32> = FxHashMap::default();
        let mut by_frequency: FxHashMap<u32, Vec<String>> = FxHashMap::default();
        let mut word_length = None;

        for (index, WordEntry { word, frequency }) in entries.into_iter().enumerate() {
            if !is_valid_word(&word) {
                return Err(WordListError::InvalidWord(word));
            }
            if frequency == 0 {
                return Err(WordListError::InvalidFrequency {
                    line: index + 1,
                    value: frequency.to_string(),
                });
            }

            let expected = *word_length.get_or_insert(word.len());
            if word.len() != expected {
                return Err(WordListError::MismatchedLength {
                    found: word.len(),
                    word,
                    expected,
                });
            }

            if frequencies.contains_key(&word) {
                log::warn!("Ignoring duplicate word list entry {word:?}");
                continue;
            }

            by_frequency.entry(frequency).or_default().push(word.clone());
            frequencies.insert(word, frequency);
        }

        let word_length = word_length.ok_or(WordListError::Empty)?;

        let mut buckets: Vec<FrequencyBucket> = by_frequency
            .into_iter()
            .map(|(frequency, words)| FrequencyBucket { frequency, words })
            .collect();
        buckets.sort_by_key(|bucket| std::cmp::Reverse(bucket.frequency));

        log::debug!(
            "Loaded {} words of length {word_length} in {} frequency buckets",
            frequencies.len(),
            buckets.len()
        );

        Ok(Self {
            frequencies,
            buckets,
            word_length,
        })
    }

    /// The word list compiled into the binary
    ///
    /// Built once per process and shared read-only.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the embedded data is invalid.
    pub fn embedded() -> Result<&'static Self, &'static WordListError> {
        static EMBEDDED: LazyLock<Result<WordList, WordListError>> =
            LazyLock::new(|| loader::words_from_slice(WORDS));

        EMBEDDED.as_ref()
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Always false for a constructed list
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Whether `word` is playable
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    /// Frequency weight of `word`, if present
    #[inline]
    #[must_use]
    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.frequencies.get(word).copied()
    }

    /// Frequency buckets, most frequent first
    #[inline]
    #[must_use]
    pub fn buckets(&self) -> &[FrequencyBucket] {
        &self.buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;

    #[test]
    fn count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_list_is_valid() {
        let words = WordList::embedded().unwrap();
        assert_eq!(words.len(), WORDS_COUNT);
        assert_eq!(words.word_length(), 5);
        assert!(words.contains("crane"));
        assert!(words.contains("apple"));
        assert!(!words.contains("zzzzz"));
    }

    #[test]
    fn embedded_words_are_lowercase() {
        for &(word, frequency) in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(frequency > 0, "Word '{word}' has zero frequency");
        }
    }

    #[test]
    fn buckets_are_most_frequent_first() {
        let words = words_from_slice(&[("zebra", 1), ("apple", 10), ("crane", 5)]).unwrap();
        let order: Vec<u32> = words.buckets().iter().map(|b| b.frequency).collect();
        assert_eq!(order, vec![10, 5, 1]);
    }

    #[test]
    fn bucket_words_keep_source_order() {
        let words =
            words_from_slice(&[("crane", 2), ("slate", 2), ("irate", 2), ("apple", 9)]).unwrap();
        assert_eq!(words.buckets()[1].words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn duplicates_keep_first_frequency() {
        let words = words_from_slice(&[("apple", 10), ("apple", 1), ("zebra", 1)]).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.frequency("apple"), Some(10));
        assert_eq!(words.buckets()[1].words, vec!["zebra"]);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(words_from_slice(&[]), Err(WordListError::Empty)));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = words_from_slice(&[("apple", 1), ("pear", 1)]).unwrap_err();
        assert!(matches!(
            err,
            WordListError::MismatchedLength {
                expected: 5,
                found: 4,
                ..
            }
        ));
    }

    #[test]
    fn invalid_characters_are_rejected() {
        assert!(matches!(
            words_from_slice(&[("Apple", 1)]),
            Err(WordListError::InvalidWord(_))
        ));
        assert!(matches!(
            words_from_slice(&[("ap1le", 1)]),
            Err(WordListError::InvalidWord(_))
        ));
    }

    #[test]
    fn zero_frequency_is_rejected() {
        assert!(matches!(
            words_from_slice(&[("apple", 0)]),
            Err(WordListError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn zero_frequency_reports_input_position() {
        let err = words_from_slice(&[("apple", 1), ("apple", 2), ("zebra", 0)]).unwrap_err();
        assert!(matches!(err, WordListError::InvalidFrequency { line: 3, .. }));
        assert_eq!(
            err.to_string(),
            "line 3: frequency \"0\" is not a positive integer"
        );
    }

    #[test]
    fn embedded_error_keeps_its_type() {
        let result: Result<&'static WordList, &'static WordListError> = WordList::embedded();
        assert!(result.is_ok());
    }
}
