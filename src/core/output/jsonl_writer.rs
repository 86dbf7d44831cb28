//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::json_writer::JsonTweet;
use crate::Tweet;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes tweets as JSON Lines, one object per line.
///
/// ```jsonl
/// {"id":1,"author":"alice","text":"Hello","timestamp":"2024-06-15T12:00:00Z"}
/// {"id":2,"author":"bob","text":"Hi","timestamp":"2024-06-15T12:01:00Z"}
/// ```
pub fn write_jsonl(
    tweets: &[Tweet],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for tweet in tweets {
        serde_json::to_writer(&mut writer, &JsonTweet::new(tweet, config))?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts tweets to a JSONL string. Every line, including the last, ends
/// with `\n`.
pub fn to_jsonl(tweets: &[Tweet], config: &OutputConfig) -> Result<String> {
    let mut output = String::new();

    for tweet in tweets {
        output.push_str(&serde_json::to_string(&JsonTweet::new(tweet, config))?);
        output.push('\n');
    }

    Ok(output)
}
