//! Description normalization through the Anthropic Messages API.
//!
//! Raw source descriptions range from marketing copy to empty strings. The
//! [`DescriptionCleaner`] turns a title/description pair into a short,
//! consistent two-sentence summary via the Messages API, and degrades to a
//! deterministic local fallback when the API is unavailable.
//!
//! # Failure policy
//!
//! `clean` never returns an error. Any failure (missing key, timeout, HTTP
//! status, malformed response) falls back to the raw description truncated
//! to [`FALLBACK_BUDGET`] characters, or [`PLACEHOLDER`] when the raw text is
//! empty. The fallback is pure: no retry, no partial output.

use crate::utils::truncate_chars;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;
use tracing::{debug, instrument, warn};

/// Messages API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";
/// API version header value required by the Messages API.
const API_VERSION: &str = "2023-06-01";
/// Model used for summary generation.
const MODEL: &str = "claude-sonnet-4-6";
/// Token cap for the generated summary.
const MAX_TOKENS: u32 = 150;
/// Character budget for the truncation fallback.
pub const FALLBACK_BUDGET: usize = 200;
/// Description used when the source provided no text at all.
pub const PLACEHOLDER: &str = "No description available.";

/// Client for cleaning course descriptions.
///
/// Holds a shared HTTP client and the optional API key. Without a key the
/// live call is skipped entirely and every description takes the fallback
/// path.
pub struct DescriptionCleaner {
    http: Client,
    api_key: Option<String>,
}

impl DescriptionCleaner {
    pub fn new(http: Client, api_key: Option<String>) -> Self {
        DescriptionCleaner { http, api_key }
    }

    /// Produce a clean, concise description for a course.
    ///
    /// Delegates to the Messages API when a key is configured; otherwise, or
    /// on any API failure, returns [`fallback_description`] of the raw text.
    /// The returned string is never empty.
    #[instrument(level = "debug", skip_all, fields(%title))]
    pub async fn clean(&self, title: &str, raw_description: &str, category: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("No Anthropic API key configured; using fallback description");
            return fallback_description(raw_description);
        };

        match self.summarize(api_key, title, raw_description, category).await {
            Ok(summary) if !summary.trim().is_empty() => summary.trim().to_string(),
            Ok(_) => {
                warn!(%title, "Messages API returned an empty summary; using fallback");
                fallback_description(raw_description)
            }
            Err(e) => {
                warn!(%title, error = %e, "Messages API call failed; using fallback");
                fallback_description(raw_description)
            }
        }
    }

    async fn summarize(
        &self,
        api_key: &str,
        title: &str,
        raw_description: &str,
        category: &str,
    ) -> Result<String, Box<dyn Error>> {
        let prompt = format!(
            "You are helping catalog free tech education resources. \
             Given the course title and raw description below, write a clean, \
             engaging 2-sentence summary (max 50 words) suitable for a resource \
             directory. Focus on what the learner will gain. Be concise and clear.\n\n\
             Category: {category}\n\
             Title: {title}\n\
             Raw Description: {raw_description}\n\n\
             Return only the 2-sentence summary, nothing else."
        );

        let payload = json!({
            "model": MODEL,
            "max_tokens": MAX_TOKENS,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        let text = body
            .get("content")
            .and_then(Value::as_array)
            .and_then(|blocks| blocks.first())
            .and_then(|block| block.get("text"))
            .and_then(Value::as_str)
            .ok_or("no text block in Messages API response")?;

        Ok(text.to_string())
    }
}

/// Deterministic local fallback for a raw description.
///
/// Truncates to [`FALLBACK_BUDGET`] characters, or substitutes
/// [`PLACEHOLDER`] when the raw text is empty or whitespace.
pub fn fallback_description(raw_description: &str) -> String {
    if raw_description.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        truncate_chars(raw_description, FALLBACK_BUDGET)
    }
}
