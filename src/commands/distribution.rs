//! Selection distribution command
//!
//! Samples many seeds in parallel and reports how often each frequency
//! bucket and word is chosen. Useful for tuning the bias exponent against a
//! word list.

use crate::game::select_word;
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Hits for one frequency bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketHits {
    pub frequency: u32,
    pub words: usize,
    pub hits: usize,
}

/// Result of sampling seeds `0..samples`
#[derive(Debug)]
pub struct Distribution {
    pub samples: usize,
    pub bias: f64,
    /// Most frequent bucket first, matching the word list
    pub buckets: Vec<BucketHits>,
    /// Most selected words, descending
    pub top_words: Vec<(String, usize)>,
    pub distinct_words: usize,
    pub duration: Duration,
}

/// Sample the puzzle selector over decimal seeds `0..samples`
///
/// Seeds are the same strings [`Seed::random`](crate::game::Seed::random)
/// produces, so the result reflects what players actually get.
#[must_use]
pub fn sample_distribution(
    words: &WordList,
    bias: f64,
    samples: usize,
    show_progress: bool,
) -> Distribution {
    let pb = if show_progress {
        let pb = ProgressBar::new(samples as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let counts = (0..samples)
        .into_par_iter()
        .map(|i| {
            let word = select_word(&i.to_string(), words, bias);
            pb.inc(1);
            word
        })
        .fold(FxHashMap::default, |mut counts, word| {
            *counts.entry(word).or_insert(0usize) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut a, b| {
            for (word, n) in b {
                *a.entry(word).or_insert(0) += n;
            }
            a
        });

    pb.finish_and_clear();
    let duration = start.elapsed();

    let buckets = words
        .buckets()
        .iter()
        .map(|bucket| BucketHits {
            frequency: bucket.frequency,
            words: bucket.words.len(),
            hits: bucket
                .words
                .iter()
                .filter_map(|w| counts.get(w.as_str()))
                .sum(),
        })
        .collect();

    let mut top_words: Vec<(String, usize)> = counts
        .iter()
        .map(|(word, &n)| ((*word).to_string(), n))
        .collect();
    top_words.sort_by(|(wa, a), (wb, b)| b.cmp(a).then_with(|| wa.cmp(wb)));
    let distinct_words = top_words.len();
    top_words.truncate(10);

    log::debug!("Sampled {samples} seeds in {:.2}s", duration.as_secs_f64());

    Distribution {
        samples,
        bias,
        buckets,
        top_words,
        distinct_words,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn bias_favours_frequent_bucket() {
        let words = words_from_slice(&[("apple", 10), ("zebra", 1)]).unwrap();
        let dist = sample_distribution(&words, 3.0, 1000, false);

        assert_eq!(dist.samples, 1000);
        assert_eq!(dist.buckets.len(), 2);
        assert_eq!(dist.buckets[0].frequency, 10);
        assert_eq!(dist.buckets[0].hits, 793);
        assert_eq!(dist.buckets[1].hits, 207);
        assert_eq!(dist.top_words[0], ("apple".to_string(), 793));
        assert_eq!(dist.distinct_words, 2);
    }

    #[test]
    fn hits_sum_to_samples() {
        let words = WordList::embedded().unwrap();
        let dist = sample_distribution(words, 3.0, 500, false);
        let total: usize = dist.buckets.iter().map(|b| b.hits).sum();
        assert_eq!(total, 500);
        assert!(dist.top_words.len() <= 10);
    }

    #[test]
    fn unbiased_sampling_is_roughly_even() {
        let words = words_from_slice(&[("apple", 10), ("zebra", 1)]).unwrap();
        let dist = sample_distribution(&words, 1.0, 1000, false);
        assert!(dist.buckets[0].hits > 400);
        assert!(dist.buckets[1].hits > 400);
    }
}
