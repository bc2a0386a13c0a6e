//! JSON article store.
//!
//! Articles are persisted as a pretty-printed JSON array (2-space indent,
//! non-ASCII left unescaped) so the files stay readable and diffable.
//!
//! # Output Structure
//!
//! ```text
//! data_dir/
//! ├── veridica.json        # one file per scraped source
//! ├── good_articles.json   # verified corpus for `analyze`
//! └── bad_articles.json    # disinformation corpus for `analyze`
//! ```

use crate::models::ArticleRecord;
use std::error::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument, warn};

pub const GOOD_CORPUS: &str = "good_articles.json";
pub const BAD_CORPUS: &str = "bad_articles.json";

/// Store file for a scraped source.
pub fn source_path(data_dir: &str, source: &str) -> PathBuf {
    Path::new(data_dir).join(format!("{source}.json"))
}

pub fn corpus_path(data_dir: &str, file: &str) -> PathBuf {
    Path::new(data_dir).join(file)
}

/// Load an article array from `path`.
///
/// A missing file or malformed JSON is logged and yields an empty list.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_articles(path: &Path) -> Vec<ArticleRecord> {
    let contents = match fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Article store not found");
            return Vec::new();
        }
        Err(e) => {
            error!(error = %e, "Failed to read article store");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<ArticleRecord>>(&contents) {
        Ok(articles) => {
            info!(count = articles.len(), "Loaded articles");
            articles
        }
        Err(e) => {
            error!(error = %e, "Malformed article store");
            Vec::new()
        }
    }
}

/// Write `articles` to `path`, creating parent directories as needed.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = articles.len()))]
pub async fn save_articles(path: &Path, articles: &[ArticleRecord]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create store dir");
            return Err(e.into());
        }
    }

    let json = serde_json::to_string_pretty(articles)?;
    fs::write(path, json).await?;
    info!("Saved articles");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> Vec<ArticleRecord> {
        vec![
            ArticleRecord {
                title: "Vaccinurile sunt sigure și eficiente".to_string(),
                link: "https://www.veridica.ro/stiri/vaccinuri".to_string(),
                description: "Studiu confirmă siguranța vaccinurilor".to_string(),
                image_url: "https://cdn.veridica.ro/v.jpg".to_string(),
                source: "veridica".to_string(),
                author: Some("Ana Pop".to_string()),
                date: Some("12.03.2024".to_string()),
                scraped_at: Some(Utc.with_ymd_and_hms(2024, 3, 12, 10, 0, 0).unwrap()),
            },
            ArticleRecord {
                title: "Fără autor".to_string(),
                ..Default::default()
            },
        ]
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("veridica.json");

        save_articles(&path, &sample()).await.unwrap();
        let loaded = load_articles(&path).await;

        assert_eq!(loaded, sample());
    }

    #[tokio::test]
    async fn test_saved_format_is_pretty_and_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("veridica.json");

        save_articles(&path, &sample()).await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();

        assert!(raw.starts_with("[\n  {\n    \"title\""));
        assert!(raw.contains("și eficiente"));
        assert!(!raw.contains("\\u"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_articles(&dir.path().join("missing.json")).await.is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{\"title\": ").unwrap();
        assert!(load_articles(&path).await.is_empty());
    }

    #[tokio::test]
    async fn test_load_tolerates_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.json");
        std::fs::write(&path, r#"[{"title": "T", "link": "L", "description": "D"}]"#).unwrap();
        let loaded = load_articles(&path).await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].image_url, "");
    }

    #[test]
    fn test_paths() {
        assert_eq!(source_path("data", "veridica"), Path::new("data/veridica.json"));
        assert_eq!(corpus_path("data", GOOD_CORPUS), Path::new("data/good_articles.json"));
    }
}
