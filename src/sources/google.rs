//! Google learning portals source.
//!
//! Google has no single open API for its learning resources, so this adapter
//! pulls from two public listings under one roof: Grow with Google career
//! certificates and Google Skillshop. A failure on one listing degrades to
//! the other instead of failing the whole pull; candidates are kept when any
//! word of the category label appears in the card text.

use super::{
    absolutize, card_href, first_text, matches_any_keyword, element_text, selectors, CourseSource,
    SourceContext, SourceError, USER_AGENT,
};
use crate::models::RawCandidate;
use crate::sources::curated::{self, CandidateTemplate};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{info, instrument, warn};
use url::Url;

const LISTINGS: [(&str, &str); 2] = [
    ("https://grow.google/certificates/", "Google Career Certificates"),
    ("https://skillshop.withgoogle.com/", "Google Skillshop"),
];

static CARDS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.card, article, div.course-item, li.course").unwrap());
static TITLE: Lazy<Vec<Selector>> = Lazy::new(|| selectors(&["h3", "h2", ".title", "strong"]));
static DESC: Lazy<Vec<Selector>> = Lazy::new(|| selectors(&["p"]));

pub struct Google;

#[async_trait]
impl CourseSource for Google {
    fn name(&self) -> &'static str {
        "google"
    }

    #[instrument(level = "info", skip_all, fields(%category))]
    async fn live_fetch(
        &self,
        ctx: &SourceContext<'_>,
        category: &str,
    ) -> Result<Vec<RawCandidate>, SourceError> {
        let keywords: Vec<&str> = category.split_whitespace().collect();
        let mut candidates = Vec::new();

        for (listing_url, platform) in LISTINGS {
            let body = match fetch_listing(ctx, listing_url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(%listing_url, %platform, error = %e, "Listing fetch failed; continuing");
                    continue;
                }
            };
            candidates.extend(parse_listing_page(
                &body,
                listing_url,
                platform,
                &keywords,
                category,
                ctx.config.max_results_per_source,
            ));
        }

        info!(count = candidates.len(), "Indexed Google learning resources");
        Ok(candidates)
    }

    fn curated(&self, category: &str) -> &'static [CandidateTemplate] {
        curated::google(category)
    }
}

async fn fetch_listing(ctx: &SourceContext<'_>, url: &str) -> Result<String, SourceError> {
    Ok(ctx
        .http
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?)
}

fn parse_listing_page(
    html: &str,
    listing_url: &str,
    platform: &str,
    keywords: &[&str],
    category: &str,
    max: usize,
) -> Vec<RawCandidate> {
    let Ok(base) = Url::parse(listing_url) else {
        return Vec::new();
    };
    let document = Html::parse_document(html);
    let mut candidates = Vec::new();

    for card in document.select(&CARDS).take(max) {
        if !matches_any_keyword(&element_text(card), keywords) {
            continue;
        }
        let Some(title) = first_text(card, &TITLE) else {
            continue;
        };
        let url = card_href(card)
            .and_then(|href| absolutize(&base, &href))
            .unwrap_or_else(|| listing_url.to_string());
        let raw_description = first_text(card, &DESC).unwrap_or_default();

        candidates.push(RawCandidate {
            title,
            url,
            raw_description,
            platform: platform.to_string(),
            category: category.to_string(),
            level: None,
        });
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_page_multi_keyword() {
        let page = r#"
            <html><body>
              <div class="card">
                <h3>Project Management Certificate</h3>
                <a href="/certificates/project-management/">enroll</a>
                <p>Plan and run projects.</p>
              </div>
              <div class="card">
                <h3>Digital Marketing</h3>
                <a href="/certificates/digital-marketing/">enroll</a>
                <p>Reach customers online.</p>
              </div>
            </body></html>"#;

        let candidates = parse_listing_page(
            page,
            "https://grow.google/certificates/",
            "Google Career Certificates",
            &["project", "management", "agile"],
            "Project Management Agile",
            10,
        );

        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].url,
            "https://grow.google/certificates/project-management/"
        );
        assert_eq!(candidates[0].platform, "Google Career Certificates");
    }

    #[test]
    fn test_parse_listing_page_resolves_against_own_base() {
        let page = r#"
            <html><body>
              <div class="card"><h3>Google Ads Search</h3><a href="/exams/ads">go</a></div>
            </body></html>"#;

        let candidates = parse_listing_page(
            page,
            "https://skillshop.withgoogle.com/",
            "Google Skillshop",
            &["ads"],
            "Web Development",
            10,
        );
        assert_eq!(
            candidates[0].url,
            "https://skillshop.withgoogle.com/exams/ads"
        );
    }
}
