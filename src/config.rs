//! Loading configuration.
//!
//! ```rust
//! use tweetscope::config::LoadConfig;
//!
//! let config = LoadConfig::new().with_skip_invalid(true);
//! assert!(config.skip_invalid);
//! ```

use serde::{Deserialize, Serialize};

/// Controls how [`crate::loader`] treats records that fail validation.
///
/// Syntax errors (malformed JSON, an unparsable timestamp, a missing
/// column) always abort loading. Only records that parse but break a
/// [`Tweet`](crate::Tweet) invariant are affected by this setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Drop invalid records (logged at `warn`) instead of failing (default: false)
    pub skip_invalid: bool,
}

impl LoadConfig {
    /// Creates a strict configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that skips invalid records.
    pub fn lenient() -> Self {
        Self { skip_invalid: true }
    }

    /// Sets whether to skip invalid records.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}
