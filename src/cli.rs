//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - top-level arguments
//! - [`Command`] - the `timespan`, `mentions` and `filter` subcommands
//! - [`InputArgs`] / [`FilterArgs`] - shared argument groups
//! - [`FormatArg`] - clap-facing mirror of [`Format`](crate::format::Format)

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LoadConfig;
use crate::core::filter::FilterConfig;
use crate::error::TweetscopeError;
use crate::format::Format;

/// Summarize and filter collections of tweets.
#[derive(Parser, Debug, Clone)]
#[command(name = "tweetscope")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tweetscope timespan tweets.json
    tweetscope mentions tweets.jsonl --skip-invalid
    tweetscope filter tweets.csv --author alyssa --after 2024-01-01
    tweetscope filter tweets.json --contains rivest --contains 6.031 -o hits.jsonl")]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the smallest time interval containing every tweet
    Timespan {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the distinct usernames mentioned in the tweets (lowercased, sorted)
    Mentions {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print or write the tweets matching every given filter
    Filter {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Write results to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Output format (default: detect from --output, or plain text on stdout)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
}

impl Command {
    /// The input arguments shared by every subcommand.
    pub fn input(&self) -> &InputArgs {
        match self {
            Command::Timespan { input }
            | Command::Mentions { input }
            | Command::Filter { input, .. } => input,
        }
    }
}

/// Where and how to read tweets.
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to a JSON, JSONL or CSV file of tweets
    pub input: PathBuf,

    /// Input format (default: detect from extension)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub input_format: Option<FormatArg>,

    /// Skip records that fail validation instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,
}

impl InputArgs {
    /// Resolves the input format, falling back to extension detection.
    pub fn format(&self) -> Result<Format, TweetscopeError> {
        match self.input_format {
            Some(format) => Ok(format.into()),
            None => Format::from_path(&self.input),
        }
    }

    /// Builds the loader configuration.
    pub fn load_config(&self) -> LoadConfig {
        LoadConfig::new().with_skip_invalid(self.skip_invalid)
    }
}

/// Filter criteria. All given criteria must match.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep tweets by this author (exact, case-sensitive)
    #[arg(long, value_name = "USER")]
    pub author: Option<String>,

    /// Keep tweets at or after this date (YYYY-MM-DD or RFC 3339)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep tweets at or before this date (YYYY-MM-DD or RFC 3339)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep tweets containing this word, ignoring case (repeatable; any may match)
    #[arg(long = "contains", value_name = "WORD")]
    pub words: Vec<String>,
}

impl FilterArgs {
    /// Converts the arguments into a [`FilterConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`TweetscopeError::InvalidDate`] for an unparsable date.
    pub fn to_config(&self) -> Result<FilterConfig, TweetscopeError> {
        let mut config = FilterConfig::new();

        if let Some(ref author) = self.author {
            config = config.with_author(author.clone());
        }
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if !self.words.is_empty() {
            config = config.with_words(self.words.iter().cloned());
        }

        Ok(config)
    }
}

/// Collection format as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FormatArg {
    /// JSON array
    Json,

    /// JSON Lines
    #[value(alias = "ndjson")]
    Jsonl,

    /// Comma-separated values with a header row
    Csv,
}

impl From<FormatArg> for Format {
    fn from(format: FormatArg) -> Format {
        match format {
            FormatArg::Json => Format::Json,
            FormatArg::Jsonl => Format::Jsonl,
            FormatArg::Csv => Format::Csv,
        }
    }
}
