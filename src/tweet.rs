//! The immutable tweet record.
//!
//! A [`Tweet`] is an authored, timestamped piece of text with an id. It is
//! validated once, at construction, and can't be changed afterwards:
//!
//! - the author is a non-empty run of ASCII letters, digits, `_` or `-`;
//! - the text is at most [`MAX_TEXT_LEN`] characters.
//!
//! Identity is the id alone. Two tweets with the same id compare equal and
//! hash the same no matter what else they carry.
//!
//! # Examples
//!
//! ```
//! use tweetscope::Tweet;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 9, 28, 10, 0, 0).unwrap();
//! let tweet = Tweet::new(1, "alyssa", "is it reasonable to talk about rivest so much?", ts)?;
//!
//! assert_eq!(tweet.author(), "alyssa");
//! assert_eq!(
//!     tweet.to_string(),
//!     "(1 2024-09-28T10:00:00.000Z alyssa) is it reasonable to talk about rivest so much?"
//! );
//! # Ok::<(), tweetscope::ValidationError>(())
//! ```
//!
//! ## Serialization
//!
//! Deserialization runs the same checks as [`Tweet::new`]:
//!
//! ```
//! # #[cfg(feature = "json-format")]
//! # {
//! use tweetscope::Tweet;
//!
//! let ok = r#"{"id":1,"author":"bbitdiddle","text":"hi","timestamp":"2024-09-28T10:00:00Z"}"#;
//! assert!(serde_json::from_str::<Tweet>(ok).is_ok());
//!
//! let bad = r#"{"id":2,"author":"not valid","text":"hi","timestamp":"2024-09-28T10:00:00Z"}"#;
//! assert!(serde_json::from_str::<Tweet>(bad).is_err());
//! # }
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum tweet length, in characters.
pub const MAX_TEXT_LEN: usize = 140;

/// An immutable, validated tweet.
///
/// Fields are private; use the accessors. Construct with [`Tweet::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTweet")]
pub struct Tweet {
    id: u64,
    author: String,
    text: String,
    timestamp: DateTime<Utc>,
}

/// Unvalidated wire shape of a tweet.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawTweet {
    pub(crate) id: u64,
    pub(crate) author: String,
    pub(crate) text: String,
    pub(crate) timestamp: DateTime<Utc>,
}

impl TryFrom<RawTweet> for Tweet {
    type Error = ValidationError;

    fn try_from(raw: RawTweet) -> Result<Self, Self::Error> {
        Tweet::new(raw.id, raw.author, raw.text, raw.timestamp)
    }
}

impl Tweet {
    /// Creates a tweet, checking the author and text invariants.
    ///
    /// Values are stored exactly as given; no case folding or trimming.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidAuthor`] if `author` is empty or has a
    ///   character outside `[A-Za-z0-9_-]`
    /// - [`ValidationError::TextTooLong`] if `text` has more than
    ///   [`MAX_TEXT_LEN`] characters
    pub fn new(
        id: u64,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let author = author.into();
        let text = text.into();

        if !is_valid_author(&author) {
            return Err(ValidationError::InvalidAuthor { author });
        }

        let length = text.chars().count();
        if length > MAX_TEXT_LEN {
            return Err(ValidationError::TextTooLong {
                length,
                max: MAX_TEXT_LEN,
            });
        }

        Ok(Self {
            id,
            author,
            text,
            timestamp,
        })
    }

    /// Returns the unique identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the username that wrote this tweet.
    ///
    /// Usernames are case-insensitive by convention, but the value is
    /// returned as it was given.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the tweet text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the tweet was sent.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Returns `true` if `author` is a non-empty run of `[A-Za-z0-9_-]`.
pub fn is_valid_author(author: &str) -> bool {
    !author.is_empty()
        && author
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

impl PartialEq for Tweet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tweet {}

impl Hash for Tweet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Tweet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {}) {}",
            self.id,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.author,
            self.text
        )
    }
}
