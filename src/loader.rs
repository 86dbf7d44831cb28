//! Reading tweet collections from JSON, JSONL and CSV.
//!
//! Every record has the shape `{id, author, text, timestamp}` with the
//! timestamp in RFC 3339. Records go through [`Tweet::new`], so a loaded
//! collection only ever holds valid tweets. What happens to records that
//! fail validation is decided by [`LoadConfig`].
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-format")]
//! # fn main() -> tweetscope::Result<()> {
//! use tweetscope::config::LoadConfig;
//! use tweetscope::loader::from_jsonl_str;
//!
//! let input = r#"
//! {"id": 1, "author": "alyssa", "text": "hi @bitdiddle", "timestamp": "2024-09-28T10:00:00Z"}
//! {"id": 2, "author": "not valid", "text": "dropped", "timestamp": "2024-09-28T10:05:00Z"}
//! "#;
//!
//! // Strict by default
//! assert!(from_jsonl_str(input, &LoadConfig::new()).is_err());
//!
//! let tweets = from_jsonl_str(input, &LoadConfig::lenient())?;
//! assert_eq!(tweets.len(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-format"))]
//! # fn main() {}
//! ```

use std::fs;
use std::path::Path;

use crate::Tweet;
use crate::config::LoadConfig;
use crate::error::{Result, TweetscopeError};
use crate::format::Format;
use crate::tweet::RawTweet;

/// Loads tweets from `path`, detecting the format from its extension.
pub fn load_tweets_auto(path: impl AsRef<Path>, config: &LoadConfig) -> Result<Vec<Tweet>> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    load_tweets(path, format, config)
}

/// Loads tweets from `path` in the given format.
#[allow(unused_variables)]
pub fn load_tweets(
    path: impl AsRef<Path>,
    format: Format,
    config: &LoadConfig,
) -> Result<Vec<Tweet>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    log::debug!("read {} bytes of {} from {}", content.len(), format, path.display());

    match format {
        #[cfg(feature = "json-format")]
        Format::Json => from_json_str(&content, config),
        #[cfg(feature = "json-format")]
        Format::Jsonl => from_jsonl_str(&content, config),
        #[cfg(feature = "csv-format")]
        Format::Csv => from_csv_str(&content, config),
        #[allow(unreachable_patterns)]
        _ => Err(crate::format::feature_disabled(format)),
    }
}

/// Parses a JSON array of tweet records.
#[cfg(feature = "json-format")]
pub fn from_json_str(input: &str, config: &LoadConfig) -> Result<Vec<Tweet>> {
    let raws: Vec<RawTweet> = serde_json::from_str(input)?;
    validate_all(raws.into_iter().map(Ok), config)
}

/// Parses JSON Lines, one tweet record per line. Blank lines are ignored.
#[cfg(feature = "json-format")]
pub fn from_jsonl_str(input: &str, config: &LoadConfig) -> Result<Vec<Tweet>> {
    let raws = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_no, line)| {
            serde_json::from_str::<RawTweet>(line).map_err(|e| {
                TweetscopeError::invalid_format("JSONL", format!("line {}: {}", line_no + 1, e))
            })
        });

    validate_all(raws, config)
}

/// Parses comma-separated records with an `id,author,text,timestamp` header.
/// Column order follows the header.
#[cfg(feature = "csv-format")]
pub fn from_csv_str(input: &str, config: &LoadConfig) -> Result<Vec<Tweet>> {
    let mut reader = csv::ReaderBuilder::new().from_reader(input.as_bytes());
    let raws = reader
        .deserialize::<RawTweet>()
        .map(|record| record.map_err(TweetscopeError::from));

    validate_all(raws, config)
}

/// Runs each record through [`Tweet::new`], failing fast or skipping
/// according to `config`.
#[allow(dead_code)]
fn validate_all<I>(raws: I, config: &LoadConfig) -> Result<Vec<Tweet>>
where
    I: Iterator<Item = Result<RawTweet>>,
{
    let mut tweets = Vec::new();
    let mut skipped = 0usize;

    for (index, raw) in raws.enumerate() {
        match Tweet::try_from(raw?) {
            Ok(tweet) => tweets.push(tweet),
            Err(e) if config.skip_invalid => {
                log::warn!("skipping record #{index}: {e}");
                skipped += 1;
            }
            Err(e) => return Err(TweetscopeError::invalid_record(index, e)),
        }
    }

    log::debug!("loaded {} tweets ({} skipped)", tweets.len(), skipped);
    Ok(tweets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;

    #[cfg(feature = "json-format")]
    const JSON: &str = r#"[
        {"id": 1, "author": "userA", "text": "Hello @userB", "timestamp": "2024-09-28T10:00:00Z"},
        {"id": 2, "author": "userB", "text": "Hi!", "timestamp": "2024-09-28T12:30:00+02:00"}
    ]"#;

    #[cfg(feature = "json-format")]
    #[test]
    fn test_from_json_str() {
        let tweets = from_json_str(JSON, &LoadConfig::new()).unwrap();
        assert_eq!(tweets.len(), 2);
        assert_eq!(tweets[0].author(), "userA");
        // Offsets are normalized to UTC
        assert_eq!(tweets[1].timestamp().to_rfc3339(), "2024-09-28T10:30:00+00:00");
    }

    #[cfg(feature = "json-format")]
    #[test]
    fn test_from_json_str_strict_rejects_invalid() {
        let input = r#"[
            {"id": 1, "author": "ok", "text": "fine", "timestamp": "2024-09-28T10:00:00Z"},
            {"id": 2, "author": "", "text": "bad", "timestamp": "2024-09-28T10:00:00Z"}
        ]"#;
        let err = from_json_str(input, &LoadConfig::new()).unwrap_err();
        match err {
            TweetscopeError::InvalidRecord { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source.kind(), ValidationErrorKind::InvalidAuthor);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(feature = "json-format")]
    #[test]
    fn test_from_json_str_malformed() {
        let err = from_json_str("[{]", &LoadConfig::lenient()).unwrap_err();
        assert!(matches!(err, TweetscopeError::Json(_)));
    }

    #[cfg(feature = "json-format")]
    #[test]
    fn test_from_jsonl_str_skips_blank_lines() {
        let input = "\n{\"id\":1,\"author\":\"a\",\"text\":\"x\",\"timestamp\":\"2024-01-01T00:00:00Z\"}\n\n";
        let tweets = from_jsonl_str(input, &LoadConfig::new()).unwrap();
        assert_eq!(tweets.len(), 1);
    }

    #[cfg(feature = "json-format")]
    #[test]
    fn test_from_jsonl_str_reports_line() {
        let input = "{\"id\":1,\"author\":\"a\",\"text\":\"x\",\"timestamp\":\"2024-01-01T00:00:00Z\"}\nnot json\n";
        let err = from_jsonl_str(input, &LoadConfig::lenient()).unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("line 2"));
    }

    #[cfg(feature = "json-format")]
    #[test]
    fn test_lenient_skips_long_text() {
        let input = format!(
            "{{\"id\":1,\"author\":\"a\",\"text\":\"{}\",\"timestamp\":\"2024-01-01T00:00:00Z\"}}\n\
             {{\"id\":2,\"author\":\"b\",\"text\":\"short\",\"timestamp\":\"2024-01-01T00:00:00Z\"}}\n",
            "x".repeat(141)
        );
        let tweets = from_jsonl_str(&input, &LoadConfig::lenient()).unwrap();
        assert_eq!(tweets.len(), 1);
        assert_eq!(tweets[0].id(), 2);
    }

    #[cfg(feature = "csv-format")]
    #[test]
    fn test_from_csv_str() {
        let input = "id,author,text,timestamp\n\
                     1,alice,\"Hello, @bob\",2024-06-15T12:00:00Z\n\
                     2,bob,hi,2024-06-15T12:01:00Z\n";
        let tweets = from_csv_str(input, &LoadConfig::new()).unwrap();
        assert_eq!(tweets.len(), 2);
        assert_eq!(tweets[0].text(), "Hello, @bob");
    }

    #[cfg(feature = "csv-format")]
    #[test]
    fn test_from_csv_str_header_order() {
        let input = "timestamp,text,author,id\n2024-06-15T12:00:00Z,hey,carol,9\n";
        let tweets = from_csv_str(input, &LoadConfig::new()).unwrap();
        assert_eq!(tweets[0].id(), 9);
        assert_eq!(tweets[0].author(), "carol");
    }

    #[cfg(feature = "csv-format")]
    #[test]
    fn test_from_csv_str_bad_timestamp() {
        let input = "id,author,text,timestamp\n1,alice,hi,yesterday\n";
        let err = from_csv_str(input, &LoadConfig::lenient()).unwrap_err();
        assert!(matches!(err, TweetscopeError::Csv(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_tweets_auto("/definitely/not/here.json", &LoadConfig::new()).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_load_unknown_extension() {
        let err = load_tweets_auto("tweets.xml", &LoadConfig::new()).unwrap_err();
        assert!(err.is_invalid_format());
    }
}
