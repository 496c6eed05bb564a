//! AWS Skill Builder source.
//!
//! Scrapes the public digital-course catalog for a per-category search term.

use super::{
    absolutize, card_href, first_text, selectors, CourseSource, SourceContext, SourceError,
    USER_AGENT,
};
use crate::models::RawCandidate;
use crate::sources::curated::{self, CandidateTemplate};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{info, instrument};
use url::Url;

const CATALOG_URL: &str = "https://explore.skillbuilder.aws/learn/catalog";

static BASE: Lazy<Url> = Lazy::new(|| Url::parse("https://explore.skillbuilder.aws").unwrap());
static CARDS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.catalog-item, div.course-card, article").unwrap());
static TITLE: Lazy<Vec<Selector>> = Lazy::new(|| selectors(&["h3", "h2", ".title"]));
static DESC: Lazy<Vec<Selector>> = Lazy::new(|| selectors(&["p", ".description"]));

fn keyword(category: &str) -> String {
    match category {
        "Python Programming" => "python developer".to_string(),
        "Data Science AI" => "machine learning".to_string(),
        "Web Development" => "cloud web".to_string(),
        "IT Cybersecurity" => "security".to_string(),
        "Project Management Agile" => "cloud practitioner".to_string(),
        other => other.to_lowercase(),
    }
}

pub struct AwsSkillBuilder;

#[async_trait]
impl CourseSource for AwsSkillBuilder {
    fn name(&self) -> &'static str {
        "aws"
    }

    #[instrument(level = "info", skip_all, fields(%category))]
    async fn live_fetch(
        &self,
        ctx: &SourceContext<'_>,
        category: &str,
    ) -> Result<Vec<RawCandidate>, SourceError> {
        let q = keyword(category);
        let body = ctx
            .http
            .get(CATALOG_URL)
            .query(&[("searchText", q.as_str()), ("format", "Digital")])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let candidates = parse_catalog_page(&body, category, ctx.config.max_results_per_source);
        info!(count = candidates.len(), "Indexed AWS Skill Builder courses");
        Ok(candidates)
    }

    fn curated(&self, category: &str) -> &'static [CandidateTemplate] {
        curated::aws(category)
    }
}

/// Extract course candidates from a catalog page.
///
/// Cards without a title are skipped; a missing link falls back to the
/// catalog URL itself.
fn parse_catalog_page(html: &str, category: &str, max: usize) -> Vec<RawCandidate> {
    let document = Html::parse_document(html);
    let mut candidates = Vec::new();

    for card in document.select(&CARDS).take(max) {
        let Some(title) = first_text(card, &TITLE) else {
            continue;
        };
        let url = card_href(card)
            .and_then(|href| absolutize(&BASE, &href))
            .unwrap_or_else(|| CATALOG_URL.to_string());
        let raw_description = first_text(card, &DESC).unwrap_or_default();

        candidates.push(RawCandidate {
            title,
            url,
            raw_description,
            platform: "AWS Skill Builder".to_string(),
            category: category.to_string(),
            level: None,
        });
    }
    candidates
}
