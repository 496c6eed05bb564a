//! Coursera public catalog API source.
//!
//! Uses the `courses.v1` endpoint; course URLs are rebuilt from the slug.

use super::{CourseSource, SourceContext, SourceError};
use crate::models::RawCandidate;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, instrument};

const CATALOG_URL: &str = "https://api.coursera.org/api/courses.v1";

fn keyword(category: &str) -> String {
    match category {
        "Python Programming" => "python programming".to_string(),
        "Data Science AI" => "data science machine learning".to_string(),
        "Web Development" => "web development html css".to_string(),
        "IT Cybersecurity" => "cybersecurity".to_string(),
        "Project Management Agile" => "project management agile".to_string(),
        other => other.to_lowercase(),
    }
}

pub struct Coursera;

#[async_trait]
impl CourseSource for Coursera {
    fn name(&self) -> &'static str {
        "coursera"
    }

    #[instrument(level = "info", skip_all, fields(%category))]
    async fn live_fetch(
        &self,
        ctx: &SourceContext<'_>,
        category: &str,
    ) -> Result<Vec<RawCandidate>, SourceError> {
        let query = keyword(category);
        let limit = ctx.config.max_results_per_source.to_string();

        let response = ctx
            .http
            .get(CATALOG_URL)
            .query(&[
                ("q", "search"),
                ("query", query.as_str()),
                ("limit", limit.as_str()),
                ("fields", "name,slug,description,domainTypes"),
                ("includes", "v2Fields"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: Value = response.json().await?;
        let candidates = parse_catalog_response(&data, category)?;
        info!(count = candidates.len(), "Indexed Coursera courses");
        Ok(candidates)
    }
}

/// Extract course candidates from a `courses.v1` response body.
///
/// Entries without a name or slug are skipped; the slug is the URL identity.
fn parse_catalog_response(data: &Value, category: &str) -> Result<Vec<RawCandidate>, SourceError> {
    let elements = data
        .get("elements")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            SourceError::Payload("elements missing from courses.v1 response".to_string())
        })?;

    let mut candidates = Vec::new();
    for item in elements {
        let Some(title) = item.get("name").and_then(Value::as_str).filter(|t| !t.is_empty())
        else {
            continue;
        };
        let Some(slug) = item.get("slug").and_then(Value::as_str).filter(|s| !s.is_empty())
        else {
            continue;
        };
        let raw_description = item
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();

        candidates.push(RawCandidate {
            title: title.to_string(),
            url: format!("https://www.coursera.org/learn/{slug}"),
            raw_description: raw_description.to_string(),
            platform: "Coursera".to_string(),
            category: category.to_string(),
            level: None,
        });
    }
    Ok(candidates)
}
