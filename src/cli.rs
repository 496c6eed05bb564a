//! Command-line interface definitions for the catalog aggregator.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The two API keys can be provided via flags or environment variables.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the catalog aggregator.
///
/// # Examples
///
/// ```sh
/// # One-off refresh, writing resources.json in the current directory
/// tech_edu_catalog
///
/// # Custom output path and per-source result cap
/// tech_edu_catalog -o ./site/resources.json --max-results 5
///
/// # Run once now, then refresh monthly
/// tech_edu_catalog --schedule
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the generated catalog JSON file
    #[arg(short, long, default_value = "resources.json")]
    pub output_file: PathBuf,

    /// Path of the log file (log lines also go to the console)
    #[arg(short, long, default_value = "scraper.log")]
    pub log_file: PathBuf,

    /// Maximum results per source per category
    #[arg(long, default_value_t = 10)]
    pub max_results: usize,

    /// Seconds to wait between source invocations
    #[arg(long, default_value_t = 1)]
    pub request_delay_secs: u64,

    /// YouTube Data API v3 key; without it the YouTube source is skipped
    #[arg(long, env = "YOUTUBE_API_KEY")]
    pub youtube_api_key: Option<String>,

    /// Anthropic API key for description cleaning; without it descriptions
    /// fall back to truncated source text
    #[arg(long, env = "ANTHROPIC_API_KEY")]
    pub anthropic_api_key: Option<String>,

    /// Run the pipeline once immediately, then block refreshing monthly
    #[arg(long)]
    pub schedule: bool,
}
