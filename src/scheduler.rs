//! Refresh orchestration.
//!
//! The [`Orchestrator`] owns the pipeline collaborators (HTTP client,
//! sources, description cleaner) and walks each refresh through the run
//! state machine:
//!
//! ```text
//! Idle → Running → Completed → Idle
//!               └→ Failed
//! ```
//!
//! Source failures never reach this layer; they are contained inside the
//! adapters. Only a catalog write failure moves a run to `Failed`.
//!
//! In scheduled mode the orchestrator blocks on a cron expression evaluated
//! against a tokio timer. The trigger carries no memory of previous runs: a
//! failed run is logged and the next tick starts a fresh one.

use crate::aggregator::aggregate;
use crate::config::{Config, HTTP_TIMEOUT};
use crate::models::Catalog;
use crate::normalizer::DescriptionCleaner;
use crate::outputs::json::write_catalog;
use crate::sources::{default_sources, CourseSource, SourceContext};
use chrono::Utc;
use cron::Schedule;
use reqwest::Client;
use std::error::Error;
use std::str::FromStr;
use tokio::time::sleep;
use tracing::{error, info, instrument};

/// Fires at 06:00 on the 1st of each month (sec min hour dom month dow).
pub const MONTHLY_SCHEDULE: &str = "0 0 6 1 * *";

/// Lifecycle of one refresh run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Failed,
}

/// Drives full refresh runs, manually or on the recurring trigger.
pub struct Orchestrator {
    config: Config,
    http: Client,
    sources: Vec<Box<dyn CourseSource>>,
    cleaner: DescriptionCleaner,
    state: RunState,
}

impl Orchestrator {
    /// Build an orchestrator over the default source set.
    pub fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        Self::with_sources(config, default_sources())
    }

    /// Build an orchestrator over an explicit source set.
    ///
    /// Keeps the pipeline callable standalone, without the live adapters.
    pub fn with_sources(
        config: Config,
        sources: Vec<Box<dyn CourseSource>>,
    ) -> Result<Self, Box<dyn Error>> {
        let http = Client::builder().timeout(HTTP_TIMEOUT).build()?;
        let cleaner = DescriptionCleaner::new(http.clone(), config.anthropic_api_key.clone());
        Ok(Orchestrator {
            config,
            http,
            sources,
            cleaner,
            state: RunState::Idle,
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Execute one full refresh: aggregate, then publish.
    ///
    /// Returns the published catalog, or the write error that moved the run
    /// to `Failed`. In the error case the previously published catalog is
    /// left in place.
    #[instrument(level = "info", skip_all)]
    pub async fn run_once(&mut self) -> Result<Catalog, Box<dyn Error>> {
        self.transition(RunState::Running);

        let ctx = SourceContext {
            http: &self.http,
            config: &self.config,
        };
        let catalog = aggregate(&ctx, &self.sources, &self.cleaner).await;

        match write_catalog(&catalog, &self.config.output_file).await {
            Ok(()) => {
                self.transition(RunState::Completed);
                self.transition(RunState::Idle);
                Ok(catalog)
            }
            Err(e) => {
                self.transition(RunState::Failed);
                Err(e)
            }
        }
    }

    /// Block forever, starting a fresh run at each monthly tick.
    pub async fn run_on_schedule(&mut self) -> Result<(), Box<dyn Error>> {
        let schedule = Schedule::from_str(MONTHLY_SCHEDULE)?;
        info!(cron = MONTHLY_SCHEDULE, "Scheduler started; refreshing monthly");

        loop {
            let now = Utc::now();
            let Some(next_fire) = schedule.after(&now).next() else {
                break Ok(());
            };
            let wait = (next_fire - now).to_std().unwrap_or_default();
            info!(next = %next_fire, "Sleeping until next scheduled refresh");
            sleep(wait).await;

            match self.run_once().await {
                Ok(catalog) => {
                    info!(total = catalog.total, "Scheduled refresh completed");
                }
                Err(e) => {
                    error!(error = %e, "Scheduled refresh failed; next tick will retry");
                }
            }
        }
    }

    fn transition(&mut self, next: RunState) {
        info!(from = ?self.state, to = ?next, "Run state transition");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawCandidate;
    use crate::sources::SourceError;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::time::Duration;

    struct OneCourse;

    #[async_trait]
    impl CourseSource for OneCourse {
        fn name(&self) -> &'static str {
            "one_course"
        }

        async fn live_fetch(
            &self,
            _ctx: &SourceContext<'_>,
            category: &str,
        ) -> Result<Vec<RawCandidate>, SourceError> {
            Ok(vec![RawCandidate {
                title: "Only Course".to_string(),
                url: "https://live.test/only".to_string(),
                raw_description: "The only course.".to_string(),
                platform: "Test".to_string(),
                category: category.to_string(),
                level: None,
            }])
        }
    }

    fn test_config(output_file: PathBuf) -> Config {
        Config {
            categories: vec!["Web Development".to_string()],
            output_file,
            log_file: PathBuf::from("scraper.log"),
            max_results_per_source: 10,
            polite_delay: Duration::ZERO,
            youtube_api_key: None,
            anthropic_api_key: None,
        }
    }

    #[test]
    fn test_monthly_schedule_parses_and_fires_on_the_first() {
        let schedule = Schedule::from_str(MONTHLY_SCHEDULE).unwrap();
        let now = Utc::now();

        let next = schedule.after(&now).next().unwrap();
        assert!(next > now);
        assert_eq!(chrono::Datelike::day(&next), 1);
        assert_eq!(chrono::Timelike::hour(&next), 6);
    }

    #[tokio::test]
    async fn test_run_once_completes_and_returns_to_idle() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("resources.json");
        let mut orchestrator =
            Orchestrator::with_sources(test_config(output.clone()), vec![Box::new(OneCourse)])
                .unwrap();
        assert_eq!(orchestrator.state(), RunState::Idle);

        let catalog = orchestrator.run_once().await.unwrap();

        assert_eq!(orchestrator.state(), RunState::Idle);
        assert_eq!(catalog.total, 1);
        assert!(output.exists());
    }

    #[tokio::test]
    async fn test_run_once_write_failure_moves_to_failed() {
        let dir = tempfile::tempdir().unwrap();
        // the output path is an existing directory, so the final rename fails
        let mut orchestrator = Orchestrator::with_sources(
            test_config(dir.path().to_path_buf()),
            vec![Box::new(OneCourse)],
        )
        .unwrap();

        let result = orchestrator.run_once().await;

        assert!(result.is_err());
        assert_eq!(orchestrator.state(), RunState::Failed);
    }
}
