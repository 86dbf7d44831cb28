//! Error types for tweetscope.
//!
//! Two layers:
//!
//! - [`ValidationError`] is what [`Tweet::new`](crate::Tweet::new) returns
//!   when a record breaks one of its two invariants. It is small and `Clone`
//!   so callers can match on it or carry it around cheaply.
//! - [`TweetscopeError`] covers everything around the core: loading files,
//!   decoding JSON/CSV, parsing dates for filters, writing output.
//!
//! Extraction and filtering never fail, so they don't appear here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for tweetscope operations.
///
/// # Example
///
/// ```rust
/// use tweetscope::error::Result;
/// use tweetscope::Tweet;
///
/// fn my_function() -> Result<Vec<Tweet>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TweetscopeError>;

/// Which of the two record invariants was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Author is empty or contains a character outside `[A-Za-z0-9_-]`.
    InvalidAuthor,
    /// Text is longer than [`MAX_TEXT_LEN`](crate::tweet::MAX_TEXT_LEN) characters.
    TextTooLong,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationErrorKind::InvalidAuthor => write!(f, "invalid-author"),
            ValidationErrorKind::TextTooLong => write!(f, "text-too-long"),
        }
    }
}

/// A tweet could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The author is not a valid username.
    #[error("Invalid author '{author}': expected one or more of A-Z, a-z, 0-9, '_' or '-'")]
    InvalidAuthor {
        /// The rejected author string
        author: String,
    },

    /// The text exceeds the length limit.
    #[error("Text is {length} characters long (maximum: {max})")]
    TextTooLong {
        /// Length of the rejected text, in characters
        length: usize,
        /// The limit that was exceeded
        max: usize,
    },
}

impl ValidationError {
    /// Returns the kind of invariant that was violated.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::InvalidAuthor { .. } => ValidationErrorKind::InvalidAuthor,
            ValidationError::TextTooLong { .. } => ValidationErrorKind::TextTooLong,
        }
    }
}

/// The error type for all fallible tweetscope operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TweetscopeError {
    /// A tweet failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A record in a loaded collection failed validation.
    ///
    /// `index` is the 0-based position of the record in its source.
    #[error("Invalid record #{index}: {source}")]
    InvalidRecord {
        /// Position of the record in the input
        index: usize,
        /// Why the record was rejected
        #[source]
        source: ValidationError,
    },

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON decoding/encoding error.
    #[cfg(feature = "json-format")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV decoding/encoding error.
    #[cfg(feature = "csv-format")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid date in a filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The string that failed to parse
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The input does not have the expected structure.
    #[error("Invalid {format} input: {message}")]
    InvalidFormat {
        /// The format being read
        format: &'static str,
        /// What's wrong
        message: String,
    },

    /// No format could be inferred from a file path.
    #[error("Cannot detect format of '{}': use an extension of json, jsonl or csv", path.display())]
    UnknownFormat {
        /// The path whose extension was not recognized
        path: PathBuf,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TweetscopeError {
    /// Creates an invalid record error.
    pub fn invalid_record(index: usize, source: ValidationError) -> Self {
        TweetscopeError::InvalidRecord { index, source }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        TweetscopeError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD or RFC 3339",
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        TweetscopeError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an unknown format error.
    pub fn unknown_format(path: impl Into<PathBuf>) -> Self {
        TweetscopeError::UnknownFormat { path: path.into() }
    }

    /// Returns the validation error behind this error, if any.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            TweetscopeError::Validation(e) | TweetscopeError::InvalidRecord { source: e, .. } => {
                Some(e)
            }
            _ => None,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TweetscopeError::Io(_))
    }

    /// Returns `true` if a record failed validation.
    pub fn is_validation(&self) -> bool {
        self.validation().is_some()
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, TweetscopeError::InvalidDate { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(
            self,
            TweetscopeError::InvalidFormat { .. } | TweetscopeError::UnknownFormat { .. }
        )
    }
}
