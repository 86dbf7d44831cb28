//! # tweetscope CLI
//!
//! Command-line interface for the tweetscope library.

use std::io::{self, Write};
use std::process;

use chrono::SecondsFormat;
use clap::Parser as ClapParser;

use tweetscope::cli::{Args, Command, FilterArgs, FormatArg, InputArgs};
use tweetscope::core::{OutputConfig, apply_filters, get_mentioned_users, get_timespan};
use tweetscope::format::{Format, to_format_string, write_to_format};
use tweetscope::loader::load_tweets;
use tweetscope::{Tweet, TweetscopeError};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// RUST_LOG wins; otherwise -v/-vv pick the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), TweetscopeError> {
    let tweets = load(args.command.input())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Timespan { .. } => match get_timespan(&tweets) {
            Some(span) => writeln!(
                out,
                "{} {}",
                span.start.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                span.end.to_rfc3339_opts(SecondsFormat::AutoSi, true)
            )?,
            None => writeln!(out, "no tweets")?,
        },
        Command::Mentions { .. } => {
            let mut users: Vec<String> = get_mentioned_users(&tweets).into_iter().collect();
            users.sort_unstable();
            log::info!("{} distinct mentioned users", users.len());
            for user in users {
                writeln!(out, "{}", user)?;
            }
        }
        Command::Filter {
            filters,
            output,
            format,
            ..
        } => run_filter(&tweets, &filters, output.as_deref(), format, &mut out)?,
    }

    Ok(())
}

fn load(input: &InputArgs) -> Result<Vec<Tweet>, TweetscopeError> {
    let format = input.format()?;
    let tweets = load_tweets(&input.input, format, &input.load_config())?;
    log::info!(
        "loaded {} tweets from {} ({})",
        tweets.len(),
        input.input.display(),
        format
    );
    Ok(tweets)
}

fn run_filter(
    tweets: &[Tweet],
    filters: &FilterArgs,
    output: Option<&std::path::Path>,
    format: Option<FormatArg>,
    out: &mut impl Write,
) -> Result<(), TweetscopeError> {
    let config = filters.to_config()?;
    let selected = apply_filters(tweets, &config);
    log::info!("{} of {} tweets matched", selected.len(), tweets.len());

    let output_config = OutputConfig::new();

    match (output, format) {
        (Some(path), format) => {
            let format = match format {
                Some(f) => Format::from(f),
                None => Format::from_path(path)?,
            };
            write_to_format(&selected, path, format, &output_config)?;
            log::info!("wrote {} tweets to {}", selected.len(), path.display());
        }
        (None, Some(format)) => {
            let rendered = to_format_string(&selected, format.into(), &output_config)?;
            out.write_all(rendered.as_bytes())?;
        }
        (None, None) => {
            for tweet in &selected {
                writeln!(out, "{}", tweet)?;
            }
        }
    }

    Ok(())
}
