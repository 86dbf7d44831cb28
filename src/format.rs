//! File formats for tweet collections.
//!
//! The same three formats are used for reading ([`crate::loader`]) and
//! writing ([`crate::core::output`]), so one [`Format`] enum covers both.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-format", feature = "json-format"))]
//! # fn example() -> tweetscope::Result<()> {
//! use tweetscope::format::{Format, to_format_string};
//! use tweetscope::core::models::OutputConfig;
//! use tweetscope::Tweet;
//! use chrono::Utc;
//!
//! let tweets = vec![Tweet::new(1, "alice", "Hello!", Utc::now())?];
//!
//! let format = Format::from_path("out.jsonl")?;
//! assert_eq!(format, Format::Jsonl);
//!
//! let rendered = to_format_string(&tweets, format, &OutputConfig::new())?;
//! assert_eq!(rendered.lines().count(), 1);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Tweet;
use crate::core::models::OutputConfig;
use crate::error::TweetscopeError;

/// A serialized tweet collection format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Format {
    /// JSON array of tweet objects
    #[default]
    Json,

    /// JSON Lines - one tweet object per line. Also known as NDJSON.
    Jsonl,

    /// Comma-separated values with a header row
    Csv,
}

impl Format {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use tweetscope::format::Format;
    ///
    /// assert_eq!(Format::Csv.extension(), "csv");
    /// assert_eq!(Format::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Jsonl => "jsonl",
            Format::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [Format] {
        &[Format::Json, Format::Jsonl, Format::Csv]
    }

    /// Returns the cargo feature this format needs.
    pub fn required_feature(&self) -> &'static str {
        match self {
            Format::Json | Format::Jsonl => "json-format",
            Format::Csv => "csv-format",
        }
    }

    /// Detects the format from a path's extension (case-insensitive).
    ///
    /// ```rust
    /// use tweetscope::format::Format;
    ///
    /// assert_eq!(Format::from_path("tweets.ndjson").unwrap(), Format::Jsonl);
    /// assert!(Format::from_path("tweets.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TweetscopeError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "json" => Ok(Format::Json),
            "jsonl" | "ndjson" => Ok(Format::Jsonl),
            "csv" => Ok(Format::Csv),
            _ => Err(TweetscopeError::unknown_format(path)),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Jsonl => write!(f, "JSONL"),
            Format::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "jsonl" | "ndjson" => Ok(Format::Jsonl),
            "csv" => Ok(Format::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                Format::all_names().join(", ")
            )),
        }
    }
}

#[allow(dead_code)]
pub(crate) fn feature_disabled(format: Format) -> TweetscopeError {
    TweetscopeError::invalid_format(
        "tweet collection",
        format!(
            "{} requires the '{}' feature to be enabled",
            format,
            format.required_feature()
        ),
    )
}

/// Writes tweets to a file in the given format.
///
/// # Errors
///
/// Returns an error if the format's feature is disabled or the file cannot
/// be written.
#[allow(unused_variables)]
pub fn write_to_format(
    tweets: &[Tweet],
    path: impl AsRef<Path>,
    format: Format,
    config: &OutputConfig,
) -> Result<(), TweetscopeError> {
    match format {
        #[cfg(feature = "json-format")]
        Format::Json => crate::core::output::write_json(tweets, path, config),
        #[cfg(feature = "json-format")]
        Format::Jsonl => crate::core::output::write_jsonl(tweets, path, config),
        #[cfg(feature = "csv-format")]
        Format::Csv => crate::core::output::write_csv(tweets, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders tweets to a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string(
    tweets: &[Tweet],
    format: Format,
    config: &OutputConfig,
) -> Result<String, TweetscopeError> {
    match format {
        #[cfg(feature = "json-format")]
        Format::Json => crate::core::output::to_json(tweets, config),
        #[cfg(feature = "json-format")]
        Format::Jsonl => crate::core::output::to_jsonl(tweets, config),
        #[cfg(feature = "csv-format")]
        Format::Csv => crate::core::output::to_csv(tweets, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
