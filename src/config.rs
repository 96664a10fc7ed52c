//! Game configuration

/// Default number of attempts per puzzle
pub const DEFAULT_ATTEMPTS_LIMIT: usize = 6;

/// Exponent applied to the first random draw when choosing a frequency bucket
///
/// Values above 1 skew selection toward the most frequent bucket.
pub const RANDOM_BIAS: f64 = 3.0;

/// Base URL used when building share links
pub const DEFAULT_BASE_URL: &str = "https://yawdle.app/";

/// Tunable parameters for a game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub attempts_limit: usize,
    pub random_bias: f64,
    pub base_url: String,
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            attempts_limit: DEFAULT_ATTEMPTS_LIMIT,
            random_bias: RANDOM_BIAS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the attempts limit (at least one attempt is always allowed)
    #[must_use]
    pub fn with_attempts_limit(mut self, attempts_limit: usize) -> Self {
        self.attempts_limit = attempts_limit.max(1);
        self
    }

    #[must_use]
    pub const fn with_random_bias(mut self, random_bias: f64) -> Self {
        self.random_bias = random_bias;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
