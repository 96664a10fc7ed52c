//! Puzzle seeds

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one reproducible puzzle
///
/// Opaque and never mutated: a different puzzle needs a different seed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    #[must_use]
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    /// A fresh seed: a random `u32` from the OS-seeded CSPRNG, in decimal
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random::<u32>().to_string())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Seed {
    fn from(seed: &str) -> Self {
        Self::new(seed)
    }
}

impl From<String> for Seed {
    fn from(seed: String) -> Self {
        Self(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_seeds_are_decimal() {
        let seed = Seed::random();
        assert!(!seed.as_str().is_empty());
        assert!(seed.as_str().parse::<u32>().is_ok());
    }

    #[test]
    fn display_is_raw_string() {
        assert_eq!(Seed::from("plagiarism").to_string(), "plagiarism");
    }
}
