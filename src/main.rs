//! # Tech Edu Catalog
//!
//! An aggregation pipeline that collects free tech-education courses from
//! official APIs and open catalogs, cleans their descriptions through an
//! LLM, deduplicates them across sources, and publishes one JSON catalog
//! for a downstream site generator.
//!
//! ## Features
//!
//! - Nine course sources (YouTube, MIT OpenCourseWare, freeCodeCamp,
//!   Microsoft Learn, AWS Skill Builder, Coursera, Stanford Online,
//!   IBM SkillsBuild, and Google learning portals)
//! - Curated fallback tables per source, so a broken listing page still
//!   yields known-good entries
//! - Description cleaning via the Anthropic Messages API with a
//!   deterministic local fallback
//! - Cross-source deduplication by URL, first seen wins
//! - One-shot runs or a monthly refresh schedule
//!
//! ## Usage
//!
//! ```sh
//! tech_edu_catalog                      # refresh once, write resources.json
//! tech_edu_catalog --schedule           # refresh now, then monthly
//! ```
//!
//! ## Architecture
//!
//! The pipeline runs sequentially by design:
//! 1. **Fetch**: each source adapter produces raw candidates per category,
//!    with a polite delay between invocations
//! 2. **Normalize**: each candidate's description is cleaned
//! 3. **Deduplicate**: one linear pass over the accumulated resources
//! 4. **Publish**: the catalog is staged and renamed into place

use clap::Parser;
use std::error::Error;
use tracing::{error, info};

mod aggregator;
mod cli;
mod config;
mod logging;
mod models;
mod normalizer;
mod outputs;
mod scheduler;
mod sources;
mod utils;

use cli::Cli;
use config::Config;
use scheduler::Orchestrator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();
    let config = Config::from_cli(&args);

    // Guard must live until exit so buffered log lines reach the file.
    let _log_guard = logging::init(&config.log_file)?;

    let start_time = std::time::Instant::now();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        output = %config.output_file.display(),
        schedule = args.schedule,
        "catalog_refresh starting up"
    );
    if config.youtube_api_key.is_none() {
        info!("YOUTUBE_API_KEY not set; the YouTube source will be skipped");
    }
    if config.anthropic_api_key.is_none() {
        info!("ANTHROPIC_API_KEY not set; descriptions will use the truncation fallback");
    }

    let mut orchestrator = Orchestrator::new(config)?;

    match orchestrator.run_once().await {
        Ok(catalog) => {
            info!(
                total = catalog.total,
                elapsed_secs = start_time.elapsed().as_secs(),
                "Refresh complete"
            );
        }
        Err(e) => {
            error!(error = %e, "Refresh failed");
            if !args.schedule {
                return Err(e);
            }
        }
    }

    if args.schedule {
        orchestrator.run_on_schedule().await?;
    }

    Ok(())
}
