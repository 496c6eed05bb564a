//! YouTube Data API v3 source.
//!
//! Searches for free course playlists via the official search endpoint.
//! Requires an API key; without one the live query is skipped and the
//! adapter contributes nothing (YouTube carries no curated table since
//! playlist availability churns too fast to hand-maintain).

use super::{CourseSource, SourceContext, SourceError};
use crate::models::RawCandidate;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, instrument};

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

pub struct YouTube;

#[async_trait]
impl CourseSource for YouTube {
    fn name(&self) -> &'static str {
        "youtube"
    }

    #[instrument(level = "info", skip_all, fields(%category))]
    async fn live_fetch(
        &self,
        ctx: &SourceContext<'_>,
        category: &str,
    ) -> Result<Vec<RawCandidate>, SourceError> {
        let api_key = ctx
            .config
            .youtube_api_key
            .as_deref()
            .ok_or(SourceError::MissingApiKey("YOUTUBE_API_KEY"))?;

        let query = format!("free {category} tutorial course");
        let max_results = ctx.config.max_results_per_source.to_string();
        debug!(%query, "Searching YouTube playlists");

        let response = ctx
            .http
            .get(SEARCH_URL)
            .query(&[
                ("part", "snippet"),
                ("q", query.as_str()),
                ("type", "playlist"),
                ("maxResults", max_results.as_str()),
                ("relevanceLanguage", "en"),
                ("key", api_key),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: Value = response.json().await?;
        let candidates = parse_search_response(&data, category)?;
        info!(count = candidates.len(), "Indexed YouTube playlists");
        Ok(candidates)
    }
}

/// Extract playlist candidates from a search response body.
///
/// Items without a playlist id or a title are skipped.
fn parse_search_response(data: &Value, category: &str) -> Result<Vec<RawCandidate>, SourceError> {
    let items = data
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::Payload("items missing from search response".to_string()))?;

    let mut candidates = Vec::new();
    for item in items {
        let Some(playlist_id) = item.pointer("/id/playlistId").and_then(Value::as_str) else {
            continue;
        };
        if playlist_id.is_empty() {
            continue;
        }
        let Some(title) = item.pointer("/snippet/title").and_then(Value::as_str) else {
            continue;
        };
        let raw_description = item
            .pointer("/snippet/description")
            .and_then(Value::as_str)
            .unwrap_or_default();

        candidates.push(RawCandidate {
            title: title.to_string(),
            url: format!("https://www.youtube.com/playlist?list={playlist_id}"),
            raw_description: raw_description.to_string(),
            platform: "YouTube".to_string(),
            category: category.to_string(),
            level: None,
        });
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_search_response() {
        let data = json!({
            "items": [
                {
                    "id": { "playlistId": "PLabc123" },
                    "snippet": { "title": "Python Full Course", "description": "Zero to hero" }
                },
                {
                    "id": { "videoId": "xyz" },
                    "snippet": { "title": "Not a playlist" }
                },
                {
                    "id": { "playlistId": "" },
                    "snippet": { "title": "Empty id" }
                }
            ]
        });

        let candidates = parse_search_response(&data, "Python Programming").unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].url,
            "https://www.youtube.com/playlist?list=PLabc123"
        );
        assert_eq!(candidates[0].platform, "YouTube");
        assert_eq!(candidates[0].raw_description, "Zero to hero");
    }

    #[test]
    fn test_parse_search_response_rejects_missing_items() {
        let data = json!({ "error": { "code": 403 } });
        let result = parse_search_response(&data, "Python Programming");
        assert!(matches!(result, Err(SourceError::Payload(_))));
    }
}
