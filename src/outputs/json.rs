//! Catalog JSON output.
//!
//! The catalog is the data contract with the downstream site generator:
//! a UTF-8 JSON object with `generated`, `total`, `categories`, and
//! `resources` keys, fully overwriting the previous file on success.
//!
//! A write failure here is fatal to the run. The catalog is staged to a
//! sibling temp file and renamed into place, so a failed run leaves the
//! previously published catalog untouched.

use crate::models::Catalog;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize and publish the catalog at `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_catalog(catalog: &Catalog, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(catalog)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let staged = path.with_extension("json.tmp");
    fs::write(&staged, &json).await?;
    fs::rename(&staged, path).await?;

    info!(bytes = json.len(), total = catalog.total, "Wrote catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, Resource};

    fn sample_catalog() -> Catalog {
        Catalog::new(
            "2026-08-01".to_string(),
            vec!["Web Development".to_string()],
            vec![Resource {
                title: "Responsive Web Design".to_string(),
                url: "https://www.freecodecamp.org/learn/2022/responsive-web-design/".to_string(),
                description: "Learn HTML and CSS.".to_string(),
                platform: "freeCodeCamp".to_string(),
                category: "Web Development".to_string(),
                level: "Beginner".to_string(),
                free: true,
                retrieved: "2026-08-01".to_string(),
            }],
        )
    }

    #[tokio::test]
    async fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.json");

        write_catalog(&sample_catalog(), &path).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let back: Catalog = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.total, 1);
        assert_eq!(back.resources[0].platform, "freeCodeCamp");
        // staging file must be gone after publication
        assert!(!dir.path().join("resources.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/resources.json");

        write_catalog(&sample_catalog(), &path).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_write_overwrites_previous_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.json");

        write_catalog(&sample_catalog(), &path).await.unwrap();
        let mut second = sample_catalog();
        second.resources.clear();
        second.total = 0;
        write_catalog(&second, &path).await.unwrap();

        let back: Catalog = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.total, 0);
    }
}
