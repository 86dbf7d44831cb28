//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::SecondsFormat;

use crate::Tweet;
use crate::core::models::OutputConfig;
use crate::error::{Result, TweetscopeError};

/// Writes tweets to a comma-separated file with a header row.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `id`, `author`, `text`, `timestamp`; `id` and `timestamp`
///   are dropped when disabled in `OutputConfig`
/// - Timestamps: RFC 3339, UTC
/// - Encoding: UTF-8
pub fn write_csv(
    tweets: &[Tweet],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, tweets, config)
}

/// Converts tweets to a CSV string, same format as [`write_csv`].
pub fn to_csv(tweets: &[Tweet], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, tweets, config)?;

    String::from_utf8(buffer)
        .map_err(|e| TweetscopeError::invalid_format("CSV", format!("non UTF-8 output: {e}")))
}

fn write_records<W: Write>(sink: W, tweets: &[Tweet], config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(sink);

    writer.write_record(build_header(config))?;
    for tweet in tweets {
        writer.write_record(build_record(tweet, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(4);

    if config.include_ids {
        header.push("id");
    }
    header.push("author");
    header.push("text");
    if config.include_timestamps {
        header.push("timestamp");
    }

    header
}

/// Build CSV record for a single tweet.
fn build_record(tweet: &Tweet, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::with_capacity(4);

    if config.include_ids {
        record.push(tweet.id().to_string());
    }
    record.push(tweet.author().to_string());
    record.push(tweet.text().to_string());
    if config.include_timestamps {
        record.push(
            tweet
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        );
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::NamedTempFile;

    fn sample() -> Vec<Tweet> {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
        vec![
            Tweet::new(1, "alice", "Hello", ts).unwrap(),
            Tweet::new(2, "bob", "Hi, there", ts).unwrap(),
        ]
    }

    #[test]
    fn test_to_csv_full() {
        let csv = to_csv(&sample(), &OutputConfig::new()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,author,text,timestamp"));
        assert_eq!(lines.next(), Some("1,alice,Hello,2024-06-15T12:30:00Z"));
        assert_eq!(lines.next(), Some("2,bob,\"Hi, there\",2024-06-15T12:30:00Z"));
    }

    #[test]
    fn test_to_csv_minimal() {
        let csv = to_csv(&sample(), &OutputConfig::minimal()).unwrap();
        assert!(csv.starts_with("author,text\n"));
        assert!(csv.contains("alice,Hello\n"));
    }

    #[test]
    fn test_write_csv() {
        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&sample(), temp_file.path(), &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, to_csv(&sample(), &OutputConfig::new()).unwrap());
    }
}
