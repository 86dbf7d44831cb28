//! Summaries over a tweet collection: time span and mentioned users.
//!
//! Both functions are pure and take the collection by slice; nothing is
//! modified or retained.
//!
//! # Examples
//!
//! ```
//! use tweetscope::Tweet;
//! use tweetscope::core::extract::{get_mentioned_users, get_timespan};
//! use chrono::{TimeZone, Utc};
//!
//! let t1 = Utc.with_ymd_and_hms(2024, 9, 28, 10, 0, 0).unwrap();
//! let t2 = Utc.with_ymd_and_hms(2024, 9, 28, 12, 30, 0).unwrap();
//! let tweets = vec![
//!     Tweet::new(1, "a", "Hi @Bob", t2)?,
//!     Tweet::new(2, "b", "no mention", t1)?,
//! ];
//!
//! let span = get_timespan(&tweets).unwrap();
//! assert_eq!((span.start, span.end), (t1, t2));
//!
//! let users = get_mentioned_users(&tweets);
//! assert!(users.contains("bob"));
//! assert_eq!(users.len(), 1);
//! # Ok::<(), tweetscope::ValidationError>(())
//! ```

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::Tweet;

/// A closed time interval `[start, end]`.
///
/// Nothing stops `start` from being after `end`; such a span contains no
/// instant (see [`is_empty`](Self::is_empty)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timespan {
    /// First instant of the interval (inclusive).
    pub start: DateTime<Utc>,
    /// Last instant of the interval (inclusive).
    pub end: DateTime<Utc>,
}

impl Timespan {
    /// Creates a span from `start` to `end`, both inclusive.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// A span covering every representable instant.
    pub fn unbounded() -> Self {
        Self::new(DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC)
    }

    /// Returns `true` if `ts` lies within the span, ends included.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Returns `true` if no instant lies within the span (`start > end`).
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Length of the span; zero when empty.
    pub fn duration(&self) -> Duration {
        if self.is_empty() {
            Duration::zero()
        } else {
            self.end - self.start
        }
    }
}

/// Returns the smallest span containing every tweet's timestamp.
///
/// Returns `None` for an empty collection: there is no interval to report.
/// With a single distinct timestamp, `start == end`.
pub fn get_timespan(tweets: &[Tweet]) -> Option<Timespan> {
    let mut timestamps = tweets.iter().map(Tweet::timestamp);
    let first = timestamps.next()?;

    let (start, end) = timestamps.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts)));
    log::debug!("timespan over {} tweets: {} .. {}", tweets.len(), start, end);

    Some(Timespan { start, end })
}

/// Returns the lowercased set of usernames mentioned across all tweets.
///
/// A mention is `@` followed by one or more of `[A-Za-z0-9_]`, where the `@`
/// is not preceded by a username character and the run extends as far as it
/// can. See [`mentions`] for the per-text scan.
pub fn get_mentioned_users(tweets: &[Tweet]) -> HashSet<String> {
    let users: HashSet<String> = tweets
        .iter()
        .flat_map(|tweet| mentions(tweet.text()))
        .map(str::to_ascii_lowercase)
        .collect();

    log::debug!(
        "found {} distinct mentioned users in {} tweets",
        users.len(),
        tweets.len()
    );
    users
}

/// Iterates over the usernames mentioned in `text`, in order, with their
/// original case.
///
/// ```
/// use tweetscope::core::extract::mentions;
///
/// let found: Vec<_> = mentions("@Alice and @bob_2, mail me at a@b.com").collect();
/// assert_eq!(found, ["Alice", "bob_2"]);
/// ```
pub fn mentions(text: &str) -> Mentions<'_> {
    Mentions { text, pos: 0 }
}

/// Iterator returned by [`mentions`].
#[derive(Debug, Clone)]
pub struct Mentions<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Mentions<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        // Username characters are ASCII, so scanning bytes never splits a
        // multi-byte character: those bytes are all >= 0x80.
        let bytes = self.text.as_bytes();

        while self.pos < bytes.len() {
            let at = self.pos;
            self.pos += 1;

            if bytes[at] != b'@' {
                continue;
            }
            if at > 0 && is_username_byte(bytes[at - 1]) {
                continue;
            }

            let start = at + 1;
            let end = bytes[start..]
                .iter()
                .position(|&b| !is_username_byte(b))
                .map_or(bytes.len(), |offset| start + offset);

            if end > start {
                self.pos = end;
                return Some(&self.text[start..end]);
            }
        }

        None
    }
}

fn is_username_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
