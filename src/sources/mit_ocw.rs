//! MIT OpenCourseWare source.
//!
//! Scrapes the public search page for course cards matching a per-category
//! keyword. Markup on the search page varies between course types, so title
//! and description selectors are tried in priority order.

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

const SEARCH_URL: &str = "https://ocw.mit.edu/search/";

static BASE: Lazy<Url> = Lazy::new(|| Url::parse("https://ocw.mit.edu").unwrap());
static CARDS: Lazy<Selector> = Lazy::new(|| Selector::parse("div.course-card").unwrap());
static TITLE: Lazy<Vec<Selector>> = Lazy::new(|| selectors(&["h3", "h2", ".course-title"]));
static DESC: Lazy<Vec<Selector>> = Lazy::new(|| selectors(&["p", ".course-description"]));

fn keyword(category: &str) -> String {
    match category {
        "Python Programming" => "python".to_string(),
        "Data Science AI" => "machine learning".to_string(),
        "Web Development" => "web".to_string(),
        "IT Cybersecurity" => "security".to_string(),
        "Project Management Agile" => "management".to_string(),
        other => other.to_lowercase(),
    }
}

pub struct MitOcw;

#[async_trait]
impl CourseSource for MitOcw {
    fn name(&self) -> &'static str {
        "mit_ocw"
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
            .get(SEARCH_URL)
            .query(&[("q", q.as_str()), ("f_format", "Online Textbook")])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let candidates = parse_search_page(&body, category, ctx.config.max_results_per_source);
        info!(count = candidates.len(), "Indexed MIT OCW courses");
        Ok(candidates)
    }

    fn curated(&self, category: &str) -> &'static [CandidateTemplate] {
        curated::mit_ocw(category)
    }
}

/// Extract course candidates from a search results page.
///
/// Cards without a title or link are skipped entirely.
fn parse_search_page(html: &str, category: &str, max: usize) -> Vec<RawCandidate> {
    let document = Html::parse_document(html);
    let mut candidates = Vec::new();

    for card in document.select(&CARDS).take(max) {
        let Some(title) = first_text(card, &TITLE) else {
            continue;
        };
        let Some(href) = card_href(card) else {
            continue;
        };
        let Some(url) = absolutize(&BASE, &href) else {
            continue;
        };
        let raw_description = first_text(card, &DESC).unwrap_or_default();

        candidates.push(RawCandidate {
            title,
            url,
            raw_description,
            platform: "MIT OpenCourseWare".to_string(),
            category: category.to_string(),
            level: None,
        });
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="course-card">
            <h3>6.0001 Introduction to Computer Science</h3>
            <a href="/courses/6-0001-fall-2016/">view</a>
            <p>Python-based introduction to computation.</p>
          </div>
          <div class="course-card">
            <a href="/courses/untitled/">no title here</a>
          </div>
          <div class="course-card">
            <h2>Untracked Course</h2>
          </div>
        </body></html>"#;

    #[test]
    fn test_parse_search_page() {
        let candidates = parse_search_page(PAGE, "Python Programming", 10);

        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].url,
            "https://ocw.mit.edu/courses/6-0001-fall-2016/"
        );
        assert_eq!(candidates[0].platform, "MIT OpenCourseWare");
        assert_eq!(
            candidates[0].raw_description,
            "Python-based introduction to computation."
        );
    }

    #[test]
    fn test_parse_search_page_caps_results() {
        let mut page = String::from("<html><body>");
        for i in 0..15 {
            page.push_str(&format!(
                r#"<div class="course-card"><h3>Course {i}</h3><a href="/courses/{i}/">x</a></div>"#
            ));
        }
        page.push_str("</body></html>");

        let candidates = parse_search_page(&page, "Web Development", 10);
        assert_eq!(candidates.len(), 10);
    }

    #[test]
    fn test_curated_table_wired() {
        assert!(!MitOcw.curated("Python Programming").is_empty());
    }
}
