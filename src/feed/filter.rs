//! Category filter state for the blog index

use serde::Serialize;
use std::collections::HashSet;

use crate::content::{Categorized, CategoryKey, CategoryUniverse};

/// Set of active categories, always a subset of its universe
#[derive(Debug, Clone)]
pub struct CategoryFilterSet {
    universe: CategoryUniverse,
    active: HashSet<CategoryKey>,
}

/// One checkbox of the category filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOption {
    pub key: String,
    pub label: String,
    pub checked: bool,
}

impl CategoryFilterSet {
    /// Create a filter with every category of `universe` active
    pub fn new(universe: CategoryUniverse) -> Self {
        let active = universe.keys().cloned().collect();
        Self { universe, active }
    }

    /// Flip membership of `key`. Returns whether it is now active.
    ///
    /// Keys outside the universe are ignored and stay inactive.
    pub fn toggle(&mut self, key: &CategoryKey) -> bool {
        if !self.universe.contains(key) {
            tracing::debug!("Ignoring toggle of unknown category {}", key);
            return false;
        }

        if self.active.remove(key) {
            false
        } else {
            self.active.insert(key.clone());
            true
        }
    }

    pub fn is_active(&self, key: &CategoryKey) -> bool {
        self.active.contains(key)
    }

    /// Number of active categories
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// True when no category is selected
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn universe(&self) -> &CategoryUniverse {
        &self.universe
    }

    /// Items whose category is active, in input order
    pub fn filter<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| self.is_active(item.category_key()))
            .collect()
    }

    /// Checkbox state for every category, in universe order
    pub fn options(&self) -> Vec<CategoryOption> {
        self.universe
            .iter()
            .map(|(key, label)| CategoryOption {
                key: key.as_str().to_string(),
                label: label.to_string(),
                checked: self.is_active(key),
            })
            .collect()
    }
}
