//! Feed item and category models

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a blog category (e.g. `release_notes`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for CategoryKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One published blog post as supplied by the data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Post title
    pub title: String,

    /// Short summary shown on cards
    #[serde(default)]
    pub description: String,

    /// Publication date
    pub date: NaiveDate,

    /// Category key used for filtering
    #[serde(rename = "category_id")]
    pub category_key: CategoryKey,

    /// Category display label
    #[serde(rename = "category", default)]
    pub category_label: String,

    /// Where "Read More" points to
    pub link: String,
}

impl ContentItem {
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        category_key: impl Into<CategoryKey>,
        link: impl Into<String>,
    ) -> Self {
        let category_key = category_key.into();
        Self {
            title: title.into(),
            description: String::new(),
            date,
            category_label: category_key.as_str().to_string(),
            category_key,
            link: link.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category_label(mut self, label: impl Into<String>) -> Self {
        self.category_label = label.into();
        self
    }
}

/// Anything that can be filtered by category
pub trait Categorized {
    fn category_key(&self) -> &CategoryKey;
}

impl Categorized for ContentItem {
    fn category_key(&self) -> &CategoryKey {
        &self.category_key
    }
}

/// The fixed, ordered set of known categories with their display labels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUniverse {
    labels: IndexMap<CategoryKey, String>,
}

impl CategoryUniverse {
    pub fn new<K, L, I>(entries: I) -> Self
    where
        K: Into<CategoryKey>,
        L: Into<String>,
        I: IntoIterator<Item = (K, L)>,
    {
        Self {
            labels: entries
                .into_iter()
                .map(|(k, l)| (k.into(), l.into()))
                .collect(),
        }
    }

    pub fn contains(&self, key: &CategoryKey) -> bool {
        self.labels.contains_key(key)
    }

    pub fn label(&self, key: &CategoryKey) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Keys in display order
    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.labels.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryKey, &str)> {
        self.labels.iter().map(|(k, l)| (k, l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
