//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::SecondsFormat;
use serde::Serialize;

use crate::Tweet;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Tweet shape for JSON and JSONL output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(crate) struct JsonTweet<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    author: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl<'a> JsonTweet<'a> {
    pub(crate) fn new(tweet: &'a Tweet, config: &OutputConfig) -> Self {
        Self {
            id: config.include_ids.then(|| tweet.id()),
            author: tweet.author(),
            text: tweet.text(),
            timestamp: config
                .include_timestamps
                .then(|| tweet.timestamp().to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

/// Writes tweets to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"id": 1, "author": "alice", "text": "Hello", "timestamp": "2024-06-15T12:00:00Z"}
/// ]
/// ```
pub fn write_json(
    tweets: &[Tweet],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(tweets, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts tweets to a pretty-printed JSON array.
///
/// Same format as [`write_json`], returned as a `String`.
pub fn to_json(tweets: &[Tweet], config: &OutputConfig) -> Result<String> {
    let json_tweets: Vec<JsonTweet<'_>> =
        tweets.iter().map(|t| JsonTweet::new(t, config)).collect();

    Ok(serde_json::to_string_pretty(&json_tweets)?)
}
