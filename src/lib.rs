//! # Tweetscope
//!
//! A small library for working with collections of short, timestamped,
//! authored text records ("tweets").
//!
//! ## Overview
//!
//! - **[`Tweet`]** - an immutable record, validated at construction
//!   (author is `[A-Za-z0-9_-]+`, text is at most 140 characters). Identity
//!   is the id alone.
//! - **Extraction** - [`get_timespan`](core::get_timespan) and
//!   [`get_mentioned_users`](core::get_mentioned_users) summarize a collection.
//! - **Filtering** - [`written_by`](core::written_by),
//!   [`in_timespan`](core::in_timespan) and [`containing`](core::containing)
//!   select a sub-collection, preserving order.
//!
//! Every extraction and filtering function is pure: it takes a slice, never
//! mutates it and keeps no state between calls, so it is safe to call from
//! any number of threads on shared input.
//!
//! ## Quick Start
//!
//! ```rust
//! use tweetscope::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! fn main() -> Result<()> {
//!     let t1 = Utc.with_ymd_and_hms(2024, 9, 28, 10, 0, 0).unwrap();
//!     let t2 = Utc.with_ymd_and_hms(2024, 9, 28, 11, 0, 0).unwrap();
//!
//!     let tweets = vec![
//!         Tweet::new(1, "alyssa", "Hi @Bob, see you at 6.031?", t1)?,
//!         Tweet::new(2, "bbitdiddle", "@alyssa yes! cc @BOB", t2)?,
//!     ];
//!
//!     // Filter then extract
//!     let by_alyssa = written_by(&tweets, "alyssa");
//!     let mentioned = get_mentioned_users(&by_alyssa);
//!     assert!(mentioned.contains("bob"));
//!
//!     let span = get_timespan(&tweets).expect("non-empty");
//!     assert_eq!(in_timespan(&tweets, &span).len(), 2);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`tweet`] - [`Tweet`] and its invariants
//! - [`core`] - Extraction, filtering and output
//!   - [`core::extract`] - [`Timespan`](core::Timespan), time span and mentions
//!   - [`core::filter`] - selectors, [`FilterConfig`](core::FilterConfig), [`apply_filters`](core::apply_filters)
//!   - [`core::models`] - [`OutputConfig`](core::OutputConfig)
//!   - [`core::output`] - JSON, JSONL and CSV writers
//! - [`loader`] - Reading collections from JSON, JSONL and CSV
//! - [`format`] - [`Format`](format::Format) detection and dispatch
//! - [`config`] - [`LoadConfig`](config::LoadConfig)
//! - [`cli`] - CLI argument types (feature `cli`)
//! - [`error`] - [`ValidationError`], [`TweetscopeError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod loader;
pub mod tweet;

// Re-export the main types at the crate root for convenience
pub use error::{Result, TweetscopeError, ValidationError};
pub use tweet::Tweet;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use tweetscope::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::Tweet;
    pub use crate::tweet::MAX_TEXT_LEN;

    // Error types
    pub use crate::error::{Result, TweetscopeError, ValidationError, ValidationErrorKind};

    // Extraction
    pub use crate::core::extract::{Timespan, get_mentioned_users, get_timespan, mentions};

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters, containing, in_timespan, written_by};

    // Configuration
    pub use crate::config::LoadConfig;
    pub use crate::core::models::OutputConfig;

    // Formats and I/O
    pub use crate::format::{Format, to_format_string, write_to_format};
    pub use crate::loader::{load_tweets, load_tweets_auto};
}
