//! Puzzle selection
//!
//! Maps a seed to one target word. The first random draw, raised to the bias
//! exponent, picks a frequency bucket; the second draw picks uniformly inside
//! it. Buckets run from most to least frequent, so a bias above 1 favours
//! common words while the result stays a pure function of the seed.

use crate::core::SeededRng;
use crate::wordlists::WordList;

/// Index into `len` slots for a draw in [0, 1)
#[inline]
fn scaled_index(draw: f64, len: usize) -> usize {
    ((draw * len as f64) as usize).min(len.saturating_sub(1))
}

/// Select the target word for `seed`
///
/// # Examples
/// ```
/// use yawdle::game::select_word;
/// use yawdle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&[("apple", 10), ("zebra", 1)]).unwrap();
/// assert_eq!(select_word("x", &words, 3.0), "apple");
/// assert_eq!(select_word("x", &words, 3.0), select_word("x", &words, 3.0));
/// ```
#[must_use]
pub fn select_word<'a>(seed: &str, words: &'a WordList, bias: f64) -> &'a str {
    let mut rng = SeededRng::new(seed);
    let buckets = words.buckets();

    let biased = rng.next_float().powf(bias);
    let bucket = &buckets[scaled_index(biased, buckets.len())];

    let word = &bucket.words[scaled_index(rng.next_float(), bucket.words.len())];
    log::trace!("Seed {seed:?} selected bucket {} word {word:?}", bucket.frequency);
    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RANDOM_BIAS;
    use crate::wordlists::loader::words_from_slice;

    fn apple_zebra() -> WordList {
        words_from_slice(&[("apple", 10), ("zebra", 1)]).unwrap()
    }

    #[test]
    fn golden_small_list() {
        let words = apple_zebra();
        assert_eq!(select_word("x", &words, RANDOM_BIAS), "apple");
        assert_eq!(select_word("1", &words, RANDOM_BIAS), "zebra");
    }

    #[test]
    fn golden_embedded_list() {
        let words = WordList::embedded().unwrap();
        assert_eq!(select_word("x", words, RANDOM_BIAS), "still");
        assert_eq!(select_word("plagiarism", words, RANDOM_BIAS), "world");
    }

    #[test]
    fn deterministic_per_seed() {
        let words = WordList::embedded().unwrap();
        for seed in ["a", "b", "12345", "plagiarism", ""] {
            let first = select_word(seed, words, RANDOM_BIAS);
            for _ in 0..3 {
                assert_eq!(select_word(seed, words, RANDOM_BIAS), first);
            }
        }
    }

    #[test]
    fn selected_word_is_in_list() {
        let words = WordList::embedded().unwrap();
        for n in 0..200 {
            let word = select_word(&n.to_string(), words, RANDOM_BIAS);
            assert!(words.contains(word));
        }
    }

    #[test]
    fn single_word_list_always_selects_it() {
        let words = words_from_slice(&[("crane", 1)]).unwrap();
        for n in 0..20 {
            assert_eq!(select_word(&n.to_string(), &words, RANDOM_BIAS), "crane");
        }
    }

    #[test]
    fn bias_favours_frequent_words() {
        let words = apple_zebra();
        let apples = (0..1000)
            .filter(|n| select_word(&n.to_string(), &words, RANDOM_BIAS) == "apple")
            .count();
        // P(apple) = P(i^3 < 0.5) ≈ 0.79
        assert!(apples > 700, "apple selected {apples} times");
    }

    #[test]
    fn scaled_index_stays_in_bounds() {
        assert_eq!(scaled_index(0.0, 4), 0);
        assert_eq!(scaled_index(0.999_999, 4), 3);
        assert_eq!(scaled_index(1.0, 4), 3);
        assert_eq!(scaled_index(0.5, 1), 0);
    }
}
