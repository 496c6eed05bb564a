//! Course source adapters for fetching free-course listings.
//!
//! Each adapter covers one provider and follows the same contract: given a
//! category, produce raw course candidates. A failure inside an adapter
//! never propagates past its boundary; the aggregator receives whatever was
//! salvaged plus a structured failure reason to log.
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | YouTube | [`youtube`] | Data API v3 | Requires API key; playlist search |
//! | MIT OpenCourseWare | [`mit_ocw`] | HTML scraping | Public search page |
//! | freeCodeCamp | [`freecodecamp`] | HTML scraping | Per-category certification |
//! | Microsoft Learn | [`microsoft_learn`] | Public catalog API | Learning paths |
//! | AWS Skill Builder | [`aws`] | HTML scraping | Public catalog |
//! | Coursera | [`coursera`] | Public catalog API | courses.v1 |
//! | Stanford Online | [`stanford`] | HTML scraping | Free-courses listing |
//! | IBM SkillsBuild | [`ibm`] | HTML scraping | Adult-learners listing |
//! | Google | [`google`] | HTML scraping | Grow with Google + Skillshop |
//!
//! # Common Patterns
//!
//! - A bounded-timeout live query with no automatic retry
//! - A curated fallback table keyed by category ([`curated`]), appended only
//!   for URLs the live query did not produce
//! - Permissive markup selection: several candidate selectors tried in
//!   priority order, candidate skipped when no title element matches
//! - Optional keyword-relevance filtering on combined card text

pub mod aws;
pub mod coursera;
pub mod curated;
pub mod freecodecamp;
pub mod google;
pub mod ibm;
pub mod microsoft_learn;
pub mod mit_ocw;
pub mod stanford;
pub mod youtube;

use crate::config::Config;
use crate::models::RawCandidate;
use async_trait::async_trait;
use self::curated::CandidateTemplate;
use itertools::Itertools;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Selector};
use std::collections::HashSet;
use thiserror::Error;

/// Identifying User-Agent sent with scraping requests.
pub const USER_AGENT: &str = "TechEduScraper/1.0 (educational, non-commercial)";

/// Shared state handed to every adapter call.
pub struct SourceContext<'a> {
    /// HTTP client with the per-call timeout already applied.
    pub http: &'a Client,
    /// Immutable run configuration.
    pub config: &'a Config,
}

/// Structured reason a live query failed.
///
/// Carried back to the aggregator for logging; never escalated into a run
/// failure.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("missing API key ({0}); live query skipped")]
    MissingApiKey(&'static str),
    #[error("unexpected payload: {0}")]
    Payload(String),
}

/// Outcome of one adapter invocation.
///
/// `candidates` is what the catalog gets; `failure` is what the log gets.
/// Both can be present at once: a failed live query still yields the
/// adapter's curated entries.
pub struct SourcePull {
    pub candidates: Vec<RawCandidate>,
    pub failure: Option<SourceError>,
}

/// A provider-specific course source.
///
/// Implementors supply the live query and (optionally) a curated fallback
/// table; the provided [`pull`](CourseSource::pull) method combines the two
/// and guarantees the never-raise contract.
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// Short identifier used in log lines.
    fn name(&self) -> &'static str;

    /// Query the provider for candidates in one category.
    ///
    /// May fail; callers go through [`pull`](CourseSource::pull), which
    /// contains the failure.
    async fn live_fetch(
        &self,
        ctx: &SourceContext<'_>,
        category: &str,
    ) -> Result<Vec<RawCandidate>, SourceError>;

    /// Curated fallback entries for a category. Empty by default.
    fn curated(&self, category: &str) -> &'static [CandidateTemplate] {
        let _ = category;
        &[]
    }

    /// Run the live query and merge in curated fallback entries.
    ///
    /// Live results are deduplicated by URL locally, then curated entries
    /// are appended only for URLs the live query did not already produce.
    /// Never returns an error.
    async fn pull(&self, ctx: &SourceContext<'_>, category: &str) -> SourcePull {
        let (candidates, failure) = match self.live_fetch(ctx, category).await {
            Ok(candidates) => (candidates, None),
            Err(e) => (Vec::new(), Some(e)),
        };

        let mut candidates: Vec<RawCandidate> = candidates
            .into_iter()
            .unique_by(|c| c.url.clone())
            .collect();

        let mut seen: HashSet<String> = candidates.iter().map(|c| c.url.clone()).collect();
        for template in self.curated(category) {
            if seen.insert(template.url.to_string()) {
                candidates.push(template.to_candidate(category));
            }
        }

        SourcePull {
            candidates,
            failure,
        }
    }
}

/// All configured sources, in invocation order.
///
/// The order is part of the dedup tie-break contract: together with category
/// order and within-adapter order it defines which duplicate of a URL wins.
pub fn default_sources() -> Vec<Box<dyn CourseSource>> {
    vec![
        Box::new(youtube::YouTube),
        Box::new(mit_ocw::MitOcw),
        Box::new(freecodecamp::FreeCodeCamp),
        Box::new(microsoft_learn::MicrosoftLearn),
        Box::new(aws::AwsSkillBuilder),
        Box::new(coursera::Coursera),
        Box::new(stanford::StanfordOnline),
        Box::new(ibm::IbmSkillsBuild),
        Box::new(google::Google),
    ]
}

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Parse a list of CSS selectors, panicking on invalid literals.
///
/// Only called on compile-time selector strings.
pub(crate) fn selectors(css: &[&str]) -> Vec<Selector> {
    css.iter().map(|s| Selector::parse(s).unwrap()).collect()
}

/// Collapsed, trimmed text content of an element.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first element matching any selector, tried in priority order.
pub(crate) fn first_text(card: ElementRef<'_>, selectors: &[Selector]) -> Option<String> {
    for selector in selectors {
        if let Some(element) = card.select(selector).next() {
            let text = element_text(element);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// `href` of the first anchor inside a card, if any.
pub(crate) fn card_href(card: ElementRef<'_>) -> Option<String> {
    card.select(&ANCHOR)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|h| h.to_string())
}

/// Resolve a possibly-relative href against a base URL.
pub(crate) fn absolutize(base: &url::Url, href: &str) -> Option<String> {
    base.join(href).ok().map(|u| u.to_string())
}

/// Case-insensitive substring match of one required term.
pub(crate) fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    haystack.to_lowercase().contains(&keyword.to_lowercase())
}

/// Case-insensitive substring match of any of several required terms.
pub(crate) fn matches_any_keyword(haystack: &str, keywords: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    keywords.iter().any(|kw| haystack.contains(&kw.to_lowercase()))
}
