//! Feed loader - reads the pre-fetched blog feed from the data directory

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use super::ContentItem;
use crate::error::PortalError;

/// Base name of the feed data file
const FEED_NAME: &str = "blog-posts";

const FEED_EXTENSIONS: [&str; 3] = ["json", "yml", "yaml"];

/// Loads the blog feed for a locale
pub struct FeedLoader {
    data_dir: PathBuf,
}

impl FeedLoader {
    /// Create a new feed loader
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Load the feed for `lang`, newest first.
    ///
    /// Looks for `<data_dir>/<lang>/blog-posts.*` first, then
    /// `<data_dir>/blog-posts.*`. A missing feed is an empty feed.
    pub fn load(&self, lang: &str) -> Result<Vec<ContentItem>> {
        let path = match self.find_feed(lang) {
            Some(path) => path,
            None => {
                tracing::debug!("No feed found in {:?} for {}", self.data_dir, lang);
                return Ok(Vec::new());
            }
        };

        let mut items = load_feed_file(&path)?;
        tracing::debug!("Loaded {} feed items from {:?}", items.len(), path);

        // Stable, so equal dates keep the data layer's order
        items.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(items)
    }

    fn find_feed(&self, lang: &str) -> Option<PathBuf> {
        let candidates: Vec<PathBuf> = [self.data_dir.join(lang), self.data_dir.clone()]
            .iter()
            .flat_map(|dir| {
                FEED_EXTENSIONS
                    .iter()
                    .map(move |ext| dir.join(format!("{}.{}", FEED_NAME, ext)))
            })
            .collect();

        candidates.into_iter().find(|path| path.is_file())
    }
}

/// Parse a feed file, picking the format from its extension
fn load_feed_file(path: &Path) -> Result<Vec<ContentItem>> {
    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str());

    let parsed: std::result::Result<Vec<ContentItem>, String> = match ext {
        Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
        Some("yml") | Some("yaml") => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        _ => return Err(PortalError::UnsupportedFormat(path.to_path_buf()).into()),
    };

    parsed.map_err(|message| {
        PortalError::FeedParse {
            path: path.to_path_buf(),
            message,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FEED: &str = r#"[
        {"title": "Older", "date": "2023-03-01", "category_id": "general", "category": "General", "link": "/blog/older"},
        {"title": "Newest", "date": "2024-05-20", "category_id": "security", "category": "Security", "link": "/blog/newest"},
        {"title": "Middle", "date": "2023-11-11", "category_id": "features", "category": "Features", "link": "/blog/middle"}
    ]"#;

    #[test]
    fn test_load_sorts_newest_first() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blog-posts.json"), FEED).unwrap();

        let items = FeedLoader::new(dir.path()).load("en").unwrap();
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Older"]);
    }

    #[test]
    fn test_localized_feed_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blog-posts.json"), FEED).unwrap();
        fs::create_dir_all(dir.path().join("ja")).unwrap();
        fs::write(
            dir.path().join("ja").join("blog-posts.yml"),
            "- title: Japanese\n  date: 2024-02-02\n  category_id: general\n  category: General\n  link: /ja/blog/post\n",
        )
        .unwrap();

        let items = FeedLoader::new(dir.path()).load("ja").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Japanese");

        // other locales fall back to the shared feed
        let items = FeedLoader::new(dir.path()).load("ko").unwrap();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_empty_locale_dir_uses_shared_feed() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("en")).unwrap();
        fs::write(
            dir.path().join("blog-posts.yaml"),
            "- title: Shared\n  date: 2024-01-01\n  category_id: general\n  link: /blog/shared\n",
        )
        .unwrap();

        let loader = FeedLoader::new(dir.path());
        assert_eq!(
            loader.find_feed("en"),
            Some(dir.path().join("blog-posts.yaml"))
        );
        assert_eq!(loader.load("en").unwrap()[0].title, "Shared");
    }

    #[test]
    fn test_missing_feed_is_empty() {
        let dir = TempDir::new().unwrap();
        let items = FeedLoader::new(dir.path().join("nope")).load("en").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_malformed_feed_errors() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blog-posts.json"), "[{\"title\": 1}]").unwrap();

        let err = FeedLoader::new(dir.path()).load("en").unwrap_err();
        assert!(err.to_string().contains("Failed to parse feed"));
    }
}
