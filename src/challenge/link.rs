//! Share-link query format
//!
//! `s` is the seed, `c` the optional challenge payload and `k` the optional
//! coarse summary. Values are percent-encoded; unknown keys are ignored.

use super::summary::ResultSummary;
use crate::game::Seed;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::borrow::Cow;
use std::fmt::Write as _;
use thiserror::Error;

/// Everything outside the RFC 3986 unreserved set is escaped
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Failure to read a share link
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("link has no seed parameter")]
    MissingSeed,
    #[error("invalid percent-encoding in link parameter '{key}'")]
    BadEncoding { key: String },
}

/// Puzzle identity plus optional challenge data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub seed: Seed,
    pub challenge: Option<String>,
    pub summary: Option<ResultSummary>,
}

impl ShareLink {
    /// A plain link to the puzzle for `seed`
    #[must_use]
    pub const fn new(seed: Seed) -> Self {
        Self {
            seed,
            challenge: None,
            summary: None,
        }
    }

    /// Query string without the leading `?`
    #[must_use]
    pub fn query(&self) -> String {
        let mut query = format!("s={}", percent_encode(self.seed.as_str()));
        if let Some(challenge) = &self.challenge {
            let _ = write!(query, "&c={}", percent_encode(challenge));
        }
        if let Some(summary) = &self.summary {
            let _ = write!(query, "&k={}", percent_encode(&summary.to_string()));
        }
        query
    }

    /// Full URL under `base`
    ///
    /// # Examples
    /// ```
    /// use yawdle::challenge::ShareLink;
    /// use yawdle::game::Seed;
    ///
    /// let link = ShareLink::new(Seed::new("42"));
    /// assert_eq!(link.to_url("https://yawdle.app/"), "https://yawdle.app/?s=42");
    /// ```
    #[must_use]
    pub fn to_url(&self, base: &str) -> String {
        let base = base.split(['?', '#']).next().unwrap_or_default();
        format!("{base}?{}", self.query())
    }

    /// Parse a full URL or a bare query string
    ///
    /// # Errors
    ///
    /// Returns `LinkError::MissingSeed` if there is no non-empty `s`
    /// parameter, or `LinkError::BadEncoding` if a known value cannot be
    /// percent-decoded.
    pub fn parse(url_or_query: &str) -> Result<Self, LinkError> {
        let query = url_or_query
            .split_once('?')
            .map_or(url_or_query, |(_, query)| query);
        let query = query.split('#').next().unwrap_or_default();

        let mut seed = None;
        let mut challenge = None;
        let mut summary = None;

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match key {
                "s" => &mut seed,
                "c" => &mut challenge,
                "k" => &mut summary,
                _ => continue,
            };
            let decoded = percent_decode(value).ok_or_else(|| LinkError::BadEncoding {
                key: key.to_string(),
            })?;
            *slot = Some(decoded);
        }

        let seed = seed
            .filter(|seed| !seed.is_empty())
            .ok_or(LinkError::MissingSeed)?;

        Ok(Self {
            seed: Seed::new(seed),
            challenge: challenge.filter(|c| !c.is_empty()),
            summary: summary
                .filter(|k| !k.is_empty())
                .and_then(|k| k.parse().ok()),
        })
    }
}

fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Every `%` starts a two-digit hex escape
fn has_valid_escapes(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.iter().enumerate().all(|(i, &byte)| {
        byte != b'%'
            || bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

/// Decode `%XX` escapes and `+` as space; `None` on bad escapes or UTF-8
fn percent_decode(value: &str) -> Option<String> {
    if !has_valid_escapes(value) {
        return None;
    }
    let value = value.replace('+', " ");
    percent_decode_str(&value)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}
