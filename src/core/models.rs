//! Output rendering options.

use serde::{Deserialize, Serialize};

/// Controls which optional columns the writers emit.
///
/// `author` and `text` are always written. By default `id` and `timestamp`
/// are written too, which keeps JSON, JSONL and CSV output loadable again by
/// [`crate::loader`].
///
/// # Example
///
/// ```rust
/// use tweetscope::core::models::OutputConfig;
///
/// let config = OutputConfig::new().without_ids();
/// assert!(!config.include_ids);
/// assert!(config.include_timestamps);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include tweet ids (default: true)
    pub include_ids: bool,
    /// Include timestamps (default: true)
    pub include_timestamps: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_ids: true,
            include_timestamps: true,
        }
    }
}

impl OutputConfig {
    /// Creates a configuration that writes every column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with only `author` and `text`.
    pub fn minimal() -> Self {
        Self {
            include_ids: false,
            include_timestamps: false,
        }
    }

    /// Omits the `id` column.
    #[must_use]
    pub fn without_ids(mut self) -> Self {
        self.include_ids = false;
        self
    }

    /// Omits the `timestamp` column.
    #[must_use]
    pub fn without_timestamps(mut self) -> Self {
        self.include_timestamps = false;
        self
    }

    /// Returns `true` if the output can be read back as tweets.
    pub fn is_loadable(&self) -> bool {
        self.include_ids && self.include_timestamps
    }
}
