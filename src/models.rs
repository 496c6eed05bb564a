//! Data models for course candidates and the persisted catalog.
//!
//! This module defines the core data structures used throughout the pipeline:
//! - [`RawCandidate`]: unvalidated course data as produced by a source adapter
//! - [`Resource`]: a normalized, persisted catalog entry
//! - [`Catalog`]: the complete output artifact for one run
//!
//! A `RawCandidate` is ephemeral and owned by the adapter call that produced
//! it. It becomes a `Resource` once the description has been cleaned and the
//! defaults (level, free flag, retrieval date) have been applied.

use serde::{Deserialize, Serialize};

/// Level assigned to a resource when the source does not report one.
pub const DEFAULT_LEVEL: &str = "All Levels";

/// An unvalidated course entry as produced by a source adapter.
///
/// Candidates are scoped to exactly one category and are never persisted;
/// they exist only between the adapter call and the resource build step.
#[derive(Debug, Clone)]
pub struct RawCandidate {
    /// Course title as reported by the source.
    pub title: String,
    /// Canonical course URL. Used as the identity key during deduplication.
    pub url: String,
    /// Unprocessed description text from the source. May be empty.
    pub raw_description: String,
    /// Human-readable platform name (e.g. "YouTube", "MIT OpenCourseWare").
    pub platform: String,
    /// The category this candidate was fetched for.
    pub category: String,
    /// Difficulty level, when the source reports one.
    pub level: Option<String>,
}

/// A normalized course entry as persisted in the catalog.
///
/// Field order matters: it matches the JSON shape consumed by the downstream
/// site generator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Resource {
    /// Course title.
    pub title: String,
    /// Canonical course URL, globally unique within one catalog.
    pub url: String,
    /// Cleaned description, never empty.
    pub description: String,
    /// Platform name.
    pub platform: String,
    /// One of the configured categories.
    pub category: String,
    /// "Beginner", "Intermediate", "Advanced", or "All Levels".
    pub level: String,
    /// Whether the course is free. All current sources list free content only.
    pub free: bool,
    /// ISO date (`YYYY-MM-DD`) of the run that retrieved this entry.
    pub retrieved: String,
}

impl Resource {
    /// Assemble a [`Resource`] from an adapter candidate plus the cleaned
    /// description produced by the normalizer.
    ///
    /// Defaults `level` to [`DEFAULT_LEVEL`] and `free` to `true`. Every
    /// resource built within one run receives the same `retrieved` date.
    pub fn from_candidate(candidate: RawCandidate, description: String, retrieved: &str) -> Self {
        Resource {
            title: candidate.title,
            url: candidate.url,
            description,
            platform: candidate.platform,
            category: candidate.category,
            level: candidate.level.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            free: true,
            retrieved: retrieved.to_string(),
        }
    }
}

/// The complete catalog produced by one run.
///
/// Created fresh each run; there is no incremental merge with a prior
/// catalog. Serialized key order (`generated`, `total`, `categories`,
/// `resources`) is part of the output contract.
#[derive(Debug, Deserialize, Serialize)]
pub struct Catalog {
    /// ISO date of the run that generated this catalog.
    pub generated: String,
    /// Number of resources. Always equal to `resources.len()`.
    pub total: usize,
    /// The configured categories, in iteration order.
    pub categories: Vec<String>,
    /// Deduplicated resources in first-seen order.
    pub resources: Vec<Resource>,
}

impl Catalog {
    /// Build a catalog from an already-deduplicated resource list.
    pub fn new(generated: String, categories: Vec<String>, resources: Vec<Resource>) -> Self {
        Catalog {
            generated,
            total: resources.len(),
            categories,
            resources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(url: &str) -> RawCandidate {
        RawCandidate {
            title: "Intro to Python".to_string(),
            url: url.to_string(),
            raw_description: "Learn Python from scratch".to_string(),
            platform: "YouTube".to_string(),
            category: "Python Programming".to_string(),
            level: None,
        }
    }

    #[test]
    fn test_resource_defaults() {
        let resource = Resource::from_candidate(
            candidate("https://example.com/python"),
            "A clean description.".to_string(),
            "2026-08-01",
        );

        assert_eq!(resource.level, "All Levels");
        assert!(resource.free);
        assert_eq!(resource.retrieved, "2026-08-01");
        assert_eq!(resource.url, "https://example.com/python");
    }

    #[test]
    fn test_resource_level_override() {
        let mut c = candidate("https://example.com/python");
        c.level = Some("Beginner".to_string());
        let resource = Resource::from_candidate(c, "Desc.".to_string(), "2026-08-01");

        assert_eq!(resource.level, "Beginner");
    }

    #[test]
    fn test_catalog_total_matches_resources() {
        let resources = vec![
            Resource::from_candidate(candidate("https://a.test/1"), "One.".into(), "2026-08-01"),
            Resource::from_candidate(candidate("https://a.test/2"), "Two.".into(), "2026-08-01"),
        ];
        let catalog = Catalog::new(
            "2026-08-01".to_string(),
            vec!["Python Programming".to_string()],
            resources,
        );

        assert_eq!(catalog.total, 2);
        assert_eq!(catalog.total, catalog.resources.len());
    }

    #[test]
    fn test_catalog_serialized_key_order() {
        let catalog = Catalog::new("2026-08-01".to_string(), vec![], vec![]);
        let json = serde_json::to_string(&catalog).unwrap();

        let generated = json.find("\"generated\"").unwrap();
        let total = json.find("\"total\"").unwrap();
        let categories = json.find("\"categories\"").unwrap();
        let resources = json.find("\"resources\"").unwrap();
        assert!(generated < total && total < categories && categories < resources);
    }

    #[test]
    fn test_resource_round_trip() {
        let resource = Resource::from_candidate(
            candidate("https://example.com/course"),
            "Short summary.".to_string(),
            "2026-08-01",
        );
        let json = serde_json::to_string(&resource).unwrap();
        let back: Resource = serde_json::from_str(&json).unwrap();

        assert_eq!(back, resource);
        assert!(json.contains("\"free\":true"));
    }
}
