//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - comma-separated with a header row - requires `csv-format`
//! - [`write_json`] / [`to_json`] - pretty JSON array - requires `json-format`
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line - requires `json-format`
//!
//! With the default [`OutputConfig`](crate::core::models::OutputConfig) all
//! three produce files that [`crate::loader`] reads back.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-format", feature = "json-format"))]
//! # fn main() -> tweetscope::Result<()> {
//! use tweetscope::core::output::{write_csv, write_json, to_jsonl};
//! use tweetscope::core::models::OutputConfig;
//! use tweetscope::Tweet;
//! use chrono::Utc;
//!
//! let tweets = vec![Tweet::new(1, "alice", "Hello!", Utc::now())?];
//! let config = OutputConfig::new();
//!
//! write_csv(&tweets, "out.csv", &config)?;
//! write_json(&tweets, "out.json", &config)?;
//! let jsonl = to_jsonl(&tweets, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-format", feature = "json-format")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-format")]
mod csv_writer;
#[cfg(feature = "json-format")]
mod json_writer;
#[cfg(feature = "json-format")]
mod jsonl_writer;

#[cfg(feature = "csv-format")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-format")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-format")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

