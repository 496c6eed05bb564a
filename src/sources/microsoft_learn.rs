//! Microsoft Learn catalog API source.
//!
//! Queries the public catalog endpoint for learning paths matching a
//! per-category search term. This is the only source that reports a
//! difficulty level, which is carried through to the resource.

use super::{CourseSource, SourceContext, SourceError};
use crate::models::RawCandidate;
use crate::utils::upcase;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, instrument};

const CATALOG_URL: &str = "https://learn.microsoft.com/api/catalog/";
const SITE_BASE: &str = "https://learn.microsoft.com";

fn keyword(category: &str) -> String {
    match category {
        "Python Programming" => "python".to_string(),
        "Data Science AI" => "azure ai machine learning".to_string(),
        "Web Development" => "web development".to_string(),
        "IT Cybersecurity" => "security".to_string(),
        "Project Management Agile" => "devops agile".to_string(),
        other => other.to_lowercase(),
    }
}

pub struct MicrosoftLearn;

#[async_trait]
impl CourseSource for MicrosoftLearn {
    fn name(&self) -> &'static str {
        "microsoft_learn"
    }

    #[instrument(level = "info", skip_all, fields(%category))]
    async fn live_fetch(
        &self,
        ctx: &SourceContext<'_>,
        category: &str,
    ) -> Result<Vec<RawCandidate>, SourceError> {
        let term = keyword(category);
        let top = ctx.config.max_results_per_source.to_string();

        let response = ctx
            .http
            .get(CATALOG_URL)
            .query(&[
                ("term", term.as_str()),
                ("locale", "en-us"),
                ("type", "learningPath"),
                ("$top", top.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: Value = response.json().await?;
        let candidates =
            parse_catalog_response(&data, category, ctx.config.max_results_per_source)?;
        info!(count = candidates.len(), "Indexed Microsoft Learn paths");
        Ok(candidates)
    }
}

/// Extract learning-path candidates from a catalog response body.
fn parse_catalog_response(
    data: &Value,
    category: &str,
    max: usize,
) -> Result<Vec<RawCandidate>, SourceError> {
    let paths = data
        .get("learningPaths")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            SourceError::Payload("learningPaths missing from catalog response".to_string())
        })?;

    let mut candidates = Vec::new();
    for item in paths.iter().take(max) {
        let Some(title) = item.get("title").and_then(Value::as_str).filter(|t| !t.is_empty())
        else {
            continue;
        };
        let raw_description = item
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let item_url = item
            .get("url")
            .and_then(Value::as_str)
            .unwrap_or(SITE_BASE);
        let url = if item_url.starts_with("http") {
            item_url.to_string()
        } else {
            format!("{SITE_BASE}{item_url}")
        };
        let level = item
            .get("levels")
            .and_then(Value::as_array)
            .and_then(|levels| levels.first())
            .and_then(Value::as_str)
            .map(upcase);

        candidates.push(RawCandidate {
            title: title.to_string(),
            url,
            raw_description: raw_description.to_string(),
            platform: "Microsoft Learn".to_string(),
            category: category.to_string(),
            level,
        });
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_catalog_response() {
        let data = json!({
            "learningPaths": [
                {
                    "title": "Secure your cloud applications",
                    "summary": "Learn Azure security.",
                    "url": "/training/paths/secure-cloud-apps/",
                    "levels": ["beginner"]
                },
                {
                    "title": "",
                    "summary": "nameless",
                    "url": "/training/paths/x/"
                }
            ]
        });

        let candidates = parse_catalog_response(&data, "IT Cybersecurity", 10).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].url,
            "https://learn.microsoft.com/training/paths/secure-cloud-apps/"
        );
        assert_eq!(candidates[0].level.as_deref(), Some("Beginner"));
    }

    #[test]
    fn test_parse_catalog_respects_cap() {
        let paths: Vec<Value> = (0..20)
            .map(|i| {
                json!({
                    "title": format!("Path {i}"),
                    "url": format!("/training/paths/{i}/")
                })
            })
            .collect();
        let data = json!({ "learningPaths": paths });

        let candidates = parse_catalog_response(&data, "Web Development", 10).unwrap();
        assert_eq!(candidates.len(), 10);
    }

    #[test]
    fn test_keyword_fallback_for_unknown_category() {
        assert_eq!(keyword("Quantum Computing"), "quantum computing");
    }
}
