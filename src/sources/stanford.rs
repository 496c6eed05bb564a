//! Stanford Online source.
//!
//! Scrapes the free-courses listing. Stanford's listing mixes subjects, so
//! candidates are kept only when the per-category keyword appears in the
//! title or anywhere in the card text.

use super::{
    absolutize, card_href, contains_keyword, element_text, first_text, selectors, CourseSource,
    SourceContext, SourceError, USER_AGENT,
};
use crate::models::RawCandidate;
use crate::sources::curated::{self, CandidateTemplate};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{info, instrument};
use url::Url;

const LISTING_URL: &str = "https://online.stanford.edu/free-courses";

static BASE: Lazy<Url> = Lazy::new(|| Url::parse("https://online.stanford.edu").unwrap());
static CARDS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.course-card, article.course, div.views-row").unwrap());
static TITLE: Lazy<Vec<Selector>> =
    Lazy::new(|| selectors(&["h3", "h2", ".course-title", ".field-content a"]));
static DESC: Lazy<Vec<Selector>> =
    Lazy::new(|| selectors(&["p", ".course-description", ".field-body"]));

fn keyword(category: &str) -> String {
    match category {
        "Python Programming" => "programming".to_string(),
        "Data Science AI" => "artificial intelligence".to_string(),
        "Web Development" => "computer science".to_string(),
        "IT Cybersecurity" => "cybersecurity".to_string(),
        "Project Management Agile" => "management".to_string(),
        other => other.to_lowercase(),
    }
}

pub struct StanfordOnline;

#[async_trait]
impl CourseSource for StanfordOnline {
    fn name(&self) -> &'static str {
        "stanford"
    }

    #[instrument(level = "info", skip_all, fields(%category))]
    async fn live_fetch(
        &self,
        ctx: &SourceContext<'_>,
        category: &str,
    ) -> Result<Vec<RawCandidate>, SourceError> {
        let body = ctx
            .http
            .get(LISTING_URL)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let candidates = parse_listing_page(
            &body,
            &keyword(category),
            category,
            ctx.config.max_results_per_source,
        );
        info!(count = candidates.len(), "Indexed Stanford Online courses");
        Ok(candidates)
    }

    fn curated(&self, category: &str) -> &'static [CandidateTemplate] {
        curated::stanford(category)
    }
}

/// Extract relevant course candidates from the free-courses listing.
fn parse_listing_page(html: &str, keyword: &str, category: &str, max: usize) -> Vec<RawCandidate> {
    let document = Html::parse_document(html);
    let mut candidates = Vec::new();

    for card in document.select(&CARDS) {
        if candidates.len() >= max {
            break;
        }
        let Some(title) = first_text(card, &TITLE) else {
            continue;
        };
        if !contains_keyword(&title, keyword) && !contains_keyword(&element_text(card), keyword) {
            continue;
        }
        let url = card_href(card)
            .and_then(|href| absolutize(&BASE, &href))
            .unwrap_or_else(|| LISTING_URL.to_string());
        let raw_description = first_text(card, &DESC).unwrap_or_default();

        candidates.push(RawCandidate {
            title,
            url,
            raw_description,
            platform: "Stanford Online".to_string(),
            category: category.to_string(),
            level: None,
        });
    }
    candidates
}
