//! IBM SkillsBuild source.
//!
//! Scrapes the adult-learners listing; cards are kept only when the
//! per-category keyword appears somewhere in the card text.

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

const LISTING_URL: &str = "https://skillsbuild.org/adult-learners";

static BASE: Lazy<Url> = Lazy::new(|| Url::parse("https://skillsbuild.org").unwrap());
static CARDS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.course-card, article, div.bx--tile").unwrap());
static TITLE: Lazy<Vec<Selector>> = Lazy::new(|| selectors(&["h3", "h2", ".title"]));
static DESC: Lazy<Vec<Selector>> = Lazy::new(|| selectors(&["p"]));

fn keyword(category: &str) -> String {
    match category {
        "Python Programming" => "python".to_string(),
        "Data Science AI" => "data science".to_string(),
        "Web Development" => "web development".to_string(),
        "IT Cybersecurity" => "cybersecurity".to_string(),
        "Project Management Agile" => "project management".to_string(),
        other => other.to_lowercase(),
    }
}

pub struct IbmSkillsBuild;

#[async_trait]
impl CourseSource for IbmSkillsBuild {
    fn name(&self) -> &'static str {
        "ibm"
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
        info!(count = candidates.len(), "Indexed IBM SkillsBuild courses");
        Ok(candidates)
    }

    fn curated(&self, category: &str) -> &'static [CandidateTemplate] {
        curated::ibm(category)
    }
}

fn parse_listing_page(html: &str, keyword: &str, category: &str, max: usize) -> Vec<RawCandidate> {
    let document = Html::parse_document(html);
    let mut candidates = Vec::new();

    for card in document.select(&CARDS).take(max) {
        if !contains_keyword(&element_text(card), keyword) {
            continue;
        }
        let Some(title) = first_text(card, &TITLE) else {
            continue;
        };
        let url = card_href(card)
            .and_then(|href| absolutize(&BASE, &href))
            .unwrap_or_else(|| LISTING_URL.to_string());
        let raw_description = first_text(card, &DESC).unwrap_or_default();

        candidates.push(RawCandidate {
            title,
            url,
            raw_description,
            platform: "IBM SkillsBuild".to_string(),
            category: category.to_string(),
            level: None,
        });
    }
    candidates
}
