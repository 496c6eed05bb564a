//! The aggregation pipeline.
//!
//! Runs every source over every category in a fixed order, normalizes each
//! candidate into a [`Resource`], then removes duplicate URLs in a single
//! linear pass. Execution is deliberately sequential: one source at a time,
//! with a polite delay between invocations, to stay within third-party rate
//! limits.
//!
//! Duplicate resolution is first-seen-wins, where "first" is defined by the
//! (category order, source order, within-source order) iteration sequence.
//! No cross-run state is consulted; every run deduplicates from scratch.

use crate::models::{Catalog, Resource};
use crate::normalizer::DescriptionCleaner;
use crate::sources::{CourseSource, SourceContext};
use crate::utils::run_date;
use itertools::Itertools;
use tokio::time::sleep;
use tracing::{error, info, instrument};

/// Run the full aggregation: all sources × all categories → fresh catalog.
///
/// Source failures are logged and never escalate; the returned catalog is
/// complete (possibly thinner for affected sources) regardless of how many
/// live queries failed.
#[instrument(level = "info", skip_all)]
pub async fn aggregate(
    ctx: &SourceContext<'_>,
    sources: &[Box<dyn CourseSource>],
    cleaner: &DescriptionCleaner,
) -> Catalog {
    let retrieved = run_date();
    let mut collected: Vec<Resource> = Vec::new();

    for category in &ctx.config.categories {
        info!(%category, "Aggregating category");
        for source in sources {
            let pull = source.pull(ctx, category).await;
            if let Some(reason) = &pull.failure {
                error!(
                    source = source.name(),
                    %category,
                    %reason,
                    "Live fetch failed; curated entries only"
                );
            }

            let pulled = pull.candidates.len();
            for candidate in pull.candidates {
                let description = cleaner
                    .clean(&candidate.title, &candidate.raw_description, category)
                    .await;
                collected.push(Resource::from_candidate(candidate, description, &retrieved));
            }
            info!(source = source.name(), %category, count = pulled, "Source pull complete");

            sleep(ctx.config.polite_delay).await;
        }
    }

    let before = collected.len();
    let resources = dedupe_by_url(collected);
    info!(before, after = resources.len(), "Deduplicated resources by URL");

    Catalog::new(retrieved, ctx.config.categories.clone(), resources)
}

/// Single linear dedup pass keeping the first occurrence of each URL.
pub fn dedupe_by_url(resources: Vec<Resource>) -> Vec<Resource> {
    resources
        .into_iter()
        .unique_by(|r| r.url.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::RawCandidate;
    use crate::sources::curated::CandidateTemplate;
    use crate::sources::SourceError;
    use async_trait::async_trait;
    use reqwest::Client;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::time::Duration;

    fn test_config(categories: &[&str]) -> Config {
        Config {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            output_file: PathBuf::from("resources.json"),
            log_file: PathBuf::from("scraper.log"),
            max_results_per_source: 10,
            polite_delay: Duration::ZERO,
            youtube_api_key: None,
            anthropic_api_key: None,
        }
    }

    struct FixedSource {
        name: &'static str,
        entries: Vec<(&'static str, &'static str)>,
        fail_live: bool,
        fallback: &'static [CandidateTemplate],
    }

    #[async_trait]
    impl CourseSource for FixedSource {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn live_fetch(
            &self,
            _ctx: &SourceContext<'_>,
            category: &str,
        ) -> Result<Vec<RawCandidate>, SourceError> {
            if self.fail_live {
                return Err(SourceError::Payload("simulated live failure".to_string()));
            }
            Ok(self
                .entries
                .iter()
                .map(|(title, url)| RawCandidate {
                    title: title.to_string(),
                    url: url.to_string(),
                    raw_description: format!("raw text for {title}"),
                    platform: "Fixed".to_string(),
                    category: category.to_string(),
                    level: None,
                })
                .collect())
        }

        fn curated(&self, _category: &str) -> &'static [CandidateTemplate] {
            self.fallback
        }
    }

    fn resource(url: &str, title: &str) -> Resource {
        Resource {
            title: title.to_string(),
            url: url.to_string(),
            description: "d".to_string(),
            platform: "p".to_string(),
            category: "Web Development".to_string(),
            level: "All Levels".to_string(),
            free: true,
            retrieved: "2026-08-01".to_string(),
        }
    }

    #[test]
    fn test_dedupe_first_seen_wins() {
        let deduped = dedupe_by_url(vec![
            resource("https://example.com/c1", "A"),
            resource("https://example.com/c2", "other"),
            resource("https://example.com/c1", "B"),
        ]);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title, "A");
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let input = vec![
            resource("https://example.com/a", "1"),
            resource("https://example.com/a", "2"),
            resource("https://example.com/b", "3"),
        ];
        let once = dedupe_by_url(input);
        let twice = dedupe_by_url(once.clone());

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_two_sources_same_url_keeps_earlier_source() {
        let config = test_config(&["Web Development"]);
        let http = Client::new();
        let ctx = SourceContext {
            http: &http,
            config: &config,
        };
        let cleaner = DescriptionCleaner::new(http.clone(), None);
        let sources: Vec<Box<dyn CourseSource>> = vec![
            Box::new(FixedSource {
                name: "one",
                entries: vec![("A", "https://example.com/c1")],
                fail_live: false,
                fallback: &[],
            }),
            Box::new(FixedSource {
                name: "two",
                entries: vec![("B", "https://example.com/c1")],
                fail_live: false,
                fallback: &[],
            }),
        ];

        let catalog = aggregate(&ctx, &sources, &cleaner).await;

        assert_eq!(catalog.total, 1);
        assert_eq!(catalog.resources[0].url, "https://example.com/c1");
        assert_eq!(catalog.resources[0].title, "A");
    }

    #[tokio::test]
    async fn test_failing_source_does_not_halt_the_run() {
        const FALLBACK: &[CandidateTemplate] = &[CandidateTemplate {
            title: "Curated Survivor",
            url: "https://curated.test/survivor",
            description: "Still listed.",
            platform: "Fixed",
            level: None,
        }];

        let config = test_config(&["Web Development"]);
        let http = Client::new();
        let ctx = SourceContext {
            http: &http,
            config: &config,
        };
        let cleaner = DescriptionCleaner::new(http.clone(), None);
        let sources: Vec<Box<dyn CourseSource>> = vec![
            Box::new(FixedSource {
                name: "broken",
                entries: vec![],
                fail_live: true,
                fallback: FALLBACK,
            }),
            Box::new(FixedSource {
                name: "healthy",
                entries: vec![("Healthy Course", "https://live.test/healthy")],
                fail_live: false,
                fallback: &[],
            }),
        ];

        let catalog = aggregate(&ctx, &sources, &cleaner).await;

        let urls: HashSet<&str> = catalog.resources.iter().map(|r| r.url.as_str()).collect();
        assert!(urls.contains("https://curated.test/survivor"));
        assert!(urls.contains("https://live.test/healthy"));
        assert_eq!(catalog.total, 2);
    }

    #[tokio::test]
    async fn test_catalog_invariants_hold() {
        let config = test_config(&["Web Development", "IT Cybersecurity"]);
        let http = Client::new();
        let ctx = SourceContext {
            http: &http,
            config: &config,
        };
        let cleaner = DescriptionCleaner::new(http.clone(), None);
        let sources: Vec<Box<dyn CourseSource>> = vec![Box::new(FixedSource {
            name: "one",
            entries: vec![
                ("A", "https://example.com/a"),
                ("B", "https://example.com/b"),
            ],
            fail_live: false,
            fallback: &[],
        })];

        let catalog = aggregate(&ctx, &sources, &cleaner).await;

        assert_eq!(catalog.total, catalog.resources.len());
        let mut seen = HashSet::new();
        for r in &catalog.resources {
            assert!(catalog.categories.contains(&r.category));
            assert!(seen.insert(r.url.clone()), "duplicate url {}", r.url);
            assert!(!r.description.is_empty());
            assert_eq!(r.retrieved, catalog.generated);
        }
    }
}
