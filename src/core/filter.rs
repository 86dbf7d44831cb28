//! Select tweets by author, time window and keyword.
//!
//! Three selectors, each returning a fresh `Vec` in input order:
//!
//! | Selector | Keeps tweets whose... |
//! |----------|-----------------------|
//! | [`written_by`] | author equals the username exactly |
//! | [`in_timespan`] | timestamp lies in a closed [`Timespan`] |
//! | [`containing`] | text contains any of the words, ignoring case |
//!
//! [`FilterConfig`] bundles all three for callers (such as the CLI) that
//! build a query from optional parts; [`apply_filters`] runs it.
//!
//! # Examples
//!
//! ```
//! use tweetscope::Tweet;
//! use tweetscope::core::filter::{containing, written_by};
//! use chrono::Utc;
//!
//! let now = Utc::now();
//! let tweets = vec![
//!     Tweet::new(1, "user1", "Hello world!", now)?,
//!     Tweet::new(2, "user2", "Java is awesome!", now)?,
//!     Tweet::new(3, "user1", "Coding is fun!", now)?,
//! ];
//!
//! let by_user1 = written_by(&tweets, "user1");
//! assert_eq!(by_user1.len(), 2);
//!
//! let found = containing(&tweets, &["java", "WORLD"]);
//! assert_eq!(found.iter().map(Tweet::id).collect::<Vec<_>>(), [1, 2]);
//! # Ok::<(), tweetscope::ValidationError>(())
//! ```
//!
//! # Behavior Notes
//!
//! - `written_by` is case-sensitive: `"Alice"` does not match `"alice"`
//! - `containing` is substring matching, so `"cat"` matches `"category"`
//! - `containing` with no words returns nothing

use chrono::{DateTime, NaiveDate, Utc};

use crate::Tweet;
use crate::core::extract::Timespan;
use crate::error::TweetscopeError;

/// Returns the tweets whose author equals `username`, compared exactly.
pub fn written_by(tweets: &[Tweet], username: &str) -> Vec<Tweet> {
    tweets
        .iter()
        .filter(|tweet| tweet.author() == username)
        .cloned()
        .collect()
}

/// Returns the tweets sent within `timespan`, both ends inclusive.
///
/// A span whose start is after its end matches nothing.
pub fn in_timespan(tweets: &[Tweet], timespan: &Timespan) -> Vec<Tweet> {
    tweets
        .iter()
        .filter(|tweet| timespan.contains(tweet.timestamp()))
        .cloned()
        .collect()
}

/// Returns the tweets whose text contains at least one of `words`, ignoring
/// case.
///
/// Matching is by substring. An empty `words` list yields an empty result;
/// an empty word matches every tweet.
pub fn containing<S: AsRef<str>>(tweets: &[Tweet], words: &[S]) -> Vec<Tweet> {
    if words.is_empty() {
        return Vec::new();
    }

    let words: Vec<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();

    tweets
        .iter()
        .filter(|tweet| {
            let text = tweet.text().to_lowercase();
            words.iter().any(|word| text.contains(word.as_str()))
        })
        .cloned()
        .collect()
}

/// Configuration for combining the selectors.
///
/// Active parts are combined with AND logic. With nothing set, every tweet
/// passes.
///
/// ```
/// use tweetscope::core::filter::FilterConfig;
///
/// # fn main() -> tweetscope::Result<()> {
/// let config = FilterConfig::new()
///     .with_author("alyssa")
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?
///     .with_words(["rivest", "6.031"]);
/// assert!(config.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only tweets by this exact author.
    pub author: Option<String>,

    /// Include only tweets on or after this instant.
    pub after: Option<DateTime<Utc>>,

    /// Include only tweets on or before this instant.
    pub before: Option<DateTime<Utc>>,

    /// Include only tweets containing one of these words. `Some(vec![])`
    /// matches nothing.
    pub words: Option<Vec<String>>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author filter (exact match).
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the start bound from a `YYYY-MM-DD` date (start of day, UTC) or an
    /// RFC 3339 instant.
    ///
    /// # Errors
    ///
    /// Returns [`TweetscopeError::InvalidDate`] if neither format parses.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, TweetscopeError> {
        self.after = Some(parse_bound(date_str, BoundEdge::Start)?);
        Ok(self)
    }

    /// Sets the end bound from a `YYYY-MM-DD` date (end of day, UTC) or an
    /// RFC 3339 instant.
    ///
    /// # Errors
    ///
    /// Returns [`TweetscopeError::InvalidDate`] if neither format parses.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, TweetscopeError> {
        self.before = Some(parse_bound(date_str, BoundEdge::End)?);
        Ok(self)
    }

    /// Sets the start bound directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end bound directly.
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Adds one keyword.
    #[must_use]
    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        self.words.get_or_insert_with(Vec::new).push(word.into());
        self
    }

    /// Sets the keyword list, replacing any previous one.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.author.is_some() || self.has_time_filter() || self.words.is_some()
    }

    /// Returns `true` if a time bound is set.
    pub fn has_time_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// The time window implied by the bounds; open ends are unbounded.
    pub fn timespan(&self) -> Timespan {
        let unbounded = Timespan::unbounded();
        Timespan::new(
            self.after.unwrap_or(unbounded.start),
            self.before.unwrap_or(unbounded.end),
        )
    }
}

#[derive(Clone, Copy)]
enum BoundEdge {
    Start,
    End,
}

/// Parses a filter bound: RFC 3339 as-is, or a bare date widened to the
/// start or end of that day.
fn parse_bound(input: &str, edge: BoundEdge) -> Result<DateTime<Utc>, TweetscopeError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| TweetscopeError::invalid_date(input))?;

    let naive = match edge {
        BoundEdge::Start => date.and_hms_opt(0, 0, 0),
        BoundEdge::End => date.and_hms_nano_opt(23, 59, 59, 999_999_999),
    }
    .ok_or_else(|| TweetscopeError::invalid_date(input))?;

    Ok(naive.and_utc())
}

/// Filters tweets by every active part of `config`, preserving order.
///
/// ```
/// use tweetscope::Tweet;
/// use tweetscope::core::filter::{FilterConfig, apply_filters};
/// use chrono::{TimeZone, Utc};
///
/// # fn main() -> tweetscope::Result<()> {
/// let tweets = vec![
///     Tweet::new(1, "alice", "old news", Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())?,
///     Tweet::new(2, "alice", "new news", Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap())?,
///     Tweet::new(3, "bob", "news too", Utc.with_ymd_and_hms(2024, 6, 16, 12, 0, 0).unwrap())?,
/// ];
///
/// let config = FilterConfig::new()
///     .with_author("alice")
///     .with_date_from("2024-06-01")?;
///
/// let filtered = apply_filters(&tweets, &config);
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].id(), 2);
/// # Ok(())
/// # }
/// ```
pub fn apply_filters(tweets: &[Tweet], config: &FilterConfig) -> Vec<Tweet> {
    let mut selected = match config.author {
        Some(ref author) => written_by(tweets, author),
        None => tweets.to_vec(),
    };

    if config.has_time_filter() {
        selected = in_timespan(&selected, &config.timespan());
    }

    if let Some(ref words) = config.words {
        selected = containing(&selected, words.as_slice());
    }

    log::debug!(
        "filters kept {} of {} tweets",
        selected.len(),
        tweets.len()
    );
    selected
}
