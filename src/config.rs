//! Run configuration.
//!
//! The [`Config`] struct is built once from the parsed CLI at process start
//! and passed by reference into the pipeline. It is immutable for the
//! lifetime of the process; nothing reads the environment after startup.

use crate::cli::Cli;
use std::path::PathBuf;
use std::time::Duration;

/// The fixed, ordered category set partitioning the catalog.
///
/// Adapters are invoked once per category, in this order. Labels are part of
/// the output contract and stay stable across releases.
pub const CATEGORIES: [&str; 5] = [
    "Python Programming",
    "Data Science AI",
    "Web Development",
    "IT Cybersecurity",
    "Project Management Agile",
];

/// Per-call HTTP timeout for source fetches and normalizer calls.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Immutable run configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Categories in iteration order.
    pub categories: Vec<String>,
    /// Where the catalog JSON is published.
    pub output_file: PathBuf,
    /// Where log lines are appended.
    pub log_file: PathBuf,
    /// Cap on results per source per category.
    pub max_results_per_source: usize,
    /// Polite delay inserted between source invocations.
    pub polite_delay: Duration,
    /// YouTube Data API key; `None` degrades the YouTube source.
    pub youtube_api_key: Option<String>,
    /// Anthropic API key; `None` degrades description cleaning to the
    /// truncation fallback.
    pub anthropic_api_key: Option<String>,
}

impl Config {
    /// Build the run configuration from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Config {
            categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
            output_file: cli.output_file.clone(),
            log_file: cli.log_file.clone(),
            max_results_per_source: cli.max_results,
            polite_delay: Duration::from_secs(cli.request_delay_secs),
            youtube_api_key: cli.youtube_api_key.clone(),
            anthropic_api_key: cli.anthropic_api_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from(&["tech_edu_catalog", "--max-results", "3"]);
        let config = Config::from_cli(&cli);

        assert_eq!(config.categories.len(), CATEGORIES.len());
        assert_eq!(config.categories[0], "Python Programming");
        assert_eq!(config.max_results_per_source, 3);
        assert_eq!(config.polite_delay, Duration::from_secs(1));
    }
}
