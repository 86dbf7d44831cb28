//! Core functionality for tweetscope.
//!
//! This module contains:
//! - [`extract`] - Time span and mentioned-user summaries
//! - [`filter`] - Selection by author, time window and keyword
//! - [`models`] - Output configuration
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use tweetscope::core::{
//!     FilterConfig, Timespan,
//!     get_timespan, get_mentioned_users,
//!     written_by, in_timespan, containing, apply_filters,
//! };
//! ```

pub mod extract;
pub mod filter;
pub mod models;
pub mod output;

// Re-export main types for convenience
pub use extract::{Timespan, get_mentioned_users, get_timespan, mentions};
pub use filter::{FilterConfig, apply_filters, containing, in_timespan, written_by};
pub use models::OutputConfig;

// Conditionally re-export output writers
#[cfg(feature = "csv-format")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-format")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
