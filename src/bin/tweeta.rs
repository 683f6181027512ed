//! tweeta CLI - derived fields for NDJSON files of tweets
//!
//! Reads one tweet per line (from a file or stdin) and prints summaries,
//! single fields, or aggregate counts.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use tweeta::{
    Extractor, FieldPath, JsonArrayWriter, NdjsonWriter, TextProcessor, Tweet, TweetaConfig,
};

#[derive(Parser)]
#[command(name = "tweeta")]
#[command(version, about = "Null-safe field extraction for tweets collected via Twitter APIs", long_about = None)]
struct Cli {
    /// Path to a YAML config for text normalization and language detection
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of derived fields for every tweet
    Summarize {
        /// NDJSON file of tweets (stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Named preset (Y, YM, Y-M, YMD, Y-M-D) or strftime pattern for created_at
        #[arg(short, long, default_value = "YMD")]
        date_format: String,

        /// Only keep tweets written in English
        #[arg(long)]
        english_only: bool,

        /// Drop records missing text, id, created_at or user
        #[arg(long)]
        skip_invalid: bool,

        /// Write a pretty-printed JSON array instead of NDJSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the value at a dotted path (e.g. user.screen_name) for every tweet
    Get {
        /// Dotted field path; use [n] for list indices (entities.hashtags.[0].text)
        field_path: String,

        /// NDJSON file of tweets (stdin when omitted or "-")
        input: Option<PathBuf>,
    },

    /// Count valid, deleted, retweeted, quoted, geotagged and English tweets
    Stats {
        /// NDJSON file of tweets (stdin when omitted or "-")
        input: Option<PathBuf>,
    },
}

#[derive(Debug, Default, Serialize)]
struct Stats {
    total: usize,
    valid: usize,
    deleted: usize,
    retweets: usize,
    quotes: usize,
    geotagged: usize,
    english: usize,
    with_url: usize,
    malformed: usize,
}

fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> tweeta::Result<()> {
    let config = match &cli.config {
        Some(path) => TweetaConfig::load_from_file(path)?,
        None => TweetaConfig::default(),
    };
    let processor = TextProcessor::from_config(&config);

    match cli.command {
        Commands::Summarize {
            input,
            date_format,
            english_only,
            skip_invalid,
            pretty,
        } => {
            let filter = |tweet: &Tweet| {
                (!skip_invalid || tweet.is_valid()) && (!english_only || tweet.is_en())
            };
            summarize(input.as_deref(), &processor, &date_format, filter, pretty)
        }
        Commands::Get { field_path, input } => get(input.as_deref(), &processor, &field_path),
        Commands::Stats { input } => stats(input.as_deref(), &processor),
    }
}

fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::info!("Reading tweets from {}", path.display());
            Ok(Box::new(BufReader::new(File::open(path)?)))
        }
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Feed every well-formed line to `handle`; returns the number of malformed lines.
fn for_each_tweet<F>(
    input: Option<&Path>,
    processor: &TextProcessor,
    mut handle: F,
) -> tweeta::Result<usize>
where
    F: FnMut(Tweet) -> tweeta::Result<()>,
{
    let reader = open_input(input)?;
    let mut malformed = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Tweet::from_json(&line) {
            Ok(tweet) => handle(tweet.with_processor(processor.clone()))?,
            Err(e) => {
                tracing::warn!("Skipping line {}: {}", index + 1, e);
                malformed += 1;
            }
        }
    }

    Ok(malformed)
}

fn summarize<P>(
    input: Option<&Path>,
    processor: &TextProcessor,
    date_format: &str,
    keep: P,
    pretty: bool,
) -> tweeta::Result<()>
where
    P: Fn(&Tweet) -> bool,
{
    let stdout = BufWriter::new(io::stdout().lock());

    if pretty {
        let mut writer = JsonArrayWriter::new(stdout, true)?;
        for_each_tweet(input, processor, |tweet| {
            if keep(&tweet) {
                writer.write(&tweet.summary(date_format))?;
            }
            Ok(())
        })?;
        writer.finish()?;
    } else {
        let mut writer = NdjsonWriter::new(stdout);
        let malformed = for_each_tweet(input, processor, |tweet| {
            if keep(&tweet) {
                writer.write(&tweet.summary(date_format))?;
            }
            Ok(())
        })?;
        writer.flush()?;
        tracing::info!("Wrote {} summaries ({} malformed lines)", writer.written(), malformed);
    }

    Ok(())
}

fn get(input: Option<&Path>, processor: &TextProcessor, field_path: &str) -> tweeta::Result<()> {
    let path = FieldPath::from_dotted(field_path);
    let mut stdout = BufWriter::new(io::stdout().lock());

    for_each_tweet(input, processor, |tweet| {
        writeln!(stdout, "{}", tweet.extract(&path).unwrap_or_default())?;
        Ok(())
    })?;

    stdout.flush()?;
    Ok(())
}

fn stats(input: Option<&Path>, processor: &TextProcessor) -> tweeta::Result<()> {
    let mut stats = Stats::default();

    stats.malformed = for_each_tweet(input, processor, |tweet| {
        stats.total += 1;
        stats.valid += usize::from(tweet.is_valid());
        stats.deleted += usize::from(tweet.is_deleted());
        stats.retweets += usize::from(tweet.is_retweet());
        stats.quotes += usize::from(tweet.is_quote());
        stats.geotagged += usize::from(tweet.is_geotagged());
        stats.english += usize::from(tweet.is_en());
        stats.with_url += usize::from(tweet.has_url());
        Ok(())
    })?;

    let json = serde_json::to_string_pretty(&stats)
        .map_err(tweeta::SerializationError::from)?;
    println!("{}", json);
    Ok(())
}
