//! Blog index view

use crate::config::SiteConfig;
use crate::content::{CategoryKey, ContentItem};
use crate::feed::{partition, CategoryFilterSet, FeedPartition};
use crate::helpers::{date_iso, element_id, format_date, html_escape};
use crate::i18n::Translate;
use crate::templates::{BlogIndexData, CardData, FilterData, HeroData, PageMeta};

/// State of one blog index page: the featured post, the category filter
/// and whether the mobile filter dropdown is open
pub struct BlogIndexView<'a> {
    config: &'a SiteConfig,
    feed: FeedPartition<'a, ContentItem>,
    filters: CategoryFilterSet,
    dropdown_open: bool,
}

impl<'a> BlogIndexView<'a> {
    /// Create a view over a newest-first feed with every category shown
    pub fn new(config: &'a SiteConfig, items: &'a [ContentItem]) -> Self {
        let filters = CategoryFilterSet::new(config.category_universe());

        for item in items {
            if !filters.universe().contains(&item.category_key) {
                tracing::debug!(
                    "Post {:?} has unknown category {}, it will never be listed",
                    item.title,
                    item.category_key
                );
            }
        }

        Self {
            config,
            feed: partition(items),
            filters,
            dropdown_open: false,
        }
    }

    /// The featured post, absent for an empty feed
    pub fn featured(&self) -> Option<&'a ContentItem> {
        self.feed.head
    }

    /// Posts after the featured one, before filtering
    pub fn remainder(&self) -> &'a [ContentItem] {
        self.feed.tail
    }

    /// Remaining posts whose category is selected
    pub fn visible_cards(&self) -> Vec<&'a ContentItem> {
        self.filters.filter(self.feed.tail)
    }

    pub fn filters(&self) -> &CategoryFilterSet {
        &self.filters
    }

    /// Flip a category checkbox. Returns whether it is now checked.
    pub fn toggle_category(&mut self, key: &CategoryKey) -> bool {
        self.filters.toggle(key)
    }

    /// Open or close the mobile filter dropdown. Returns the new state.
    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        self.dropdown_open
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Build template data, translating every visible string
    pub fn data<T: Translate + ?Sized>(&self, t: &T) -> BlogIndexData {
        let blog = &self.config.blog;
        let tr = |key: &str| html_escape(&t.translate(key));

        let read_more = tr("Read More");

        let hero = self.featured().map(|item| HeroData {
            month: tr(&format_date(
                &item.date,
                &self.config.date_format.hero_month_format,
            )),
            day_year: tr(&format_date(
                &item.date,
                &self.config.date_format.hero_day_format,
            )),
            category_key: html_escape(item.category_key.as_str()),
            category_label: tr(&item.category_label),
            title: tr(&item.title),
            description: tr(&item.description),
            link: html_escape(&item.link),
            read_more: read_more.clone(),
        });

        let options = self
            .filters
            .options()
            .into_iter()
            .map(|mut option| {
                option.key = html_escape(&option.key);
                option.label = tr(&option.label);
                option
            })
            .collect();

        let cards = self
            .visible_cards()
            .into_iter()
            .enumerate()
            .map(|(i, item)| CardData {
                id: element_id(&item.title, i),
                category_key: html_escape(item.category_key.as_str()),
                category_label: tr(&item.category_label),
                date: date_iso(&item.date),
                title: tr(&item.title),
                description: tr(&item.description),
                link: html_escape(&item.link),
                read_more: read_more.clone(),
            })
            .collect();

        BlogIndexData {
            page: PageMeta {
                eyebrow: tr(&blog.eyebrow),
                heading: tr(&blog.heading),
            },
            hero,
            filters: FilterData {
                sidebar_header: tr("Filter by Category:"),
                dropdown_header: tr("Filter by:"),
                dropdown_label: tr("Category"),
                dropdown_open: self.dropdown_open,
                options,
            },
            cards,
            card_date_format: self.config.date_format.card_date_format.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn item(title: &str, day: u32, category: &str) -> ContentItem {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        ContentItem::new(title, date, category, format!("/blog/{}", day))
            .with_description(format!("About {}", title))
    }

    fn feed() -> Vec<ContentItem> {
        vec![
            item("Hero", 20, "release_notes").with_category_label("Release Notes"),
            item("A", 15, "general"),
            item("B", 10, "security"),
            item("C", 5, "general"),
        ]
    }

    fn identity(key: &str) -> String {
        key.to_string()
    }

    #[test]
    fn test_featured_and_cards() {
        let config = SiteConfig::default();
        let items = feed();
        let view = BlogIndexView::new(&config, &items);

        assert_eq!(view.featured().map(|i| i.title.as_str()), Some("Hero"));
        assert_eq!(view.remainder().len(), 3);
        assert_eq!(view.visible_cards().len(), 3);
    }

    #[test]
    fn test_toggle_category_filters_cards() {
        let config = SiteConfig::default();
        let items = feed();
        let mut view = BlogIndexView::new(&config, &items);

        assert!(!view.toggle_category(&"security".into()));
        let titles: Vec<_> = view.visible_cards().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);

        view.toggle_category(&"general".into());
        assert!(view.visible_cards().is_empty());
        // hero is never filtered
        assert!(view.featured().is_some());
    }

    #[test]
    fn test_dropdown_toggle() {
        let config = SiteConfig::default();
        let mut view = BlogIndexView::new(&config, &[]);
        assert!(!view.dropdown_open());
        assert!(view.toggle_dropdown());
        assert!(view.data(&identity).filters.dropdown_open);
        assert!(!view.toggle_dropdown());
    }

    #[test]
    fn test_empty_feed_has_no_hero() {
        let config = SiteConfig::default();
        let view = BlogIndexView::new(&config, &[]);
        let data = view.data(&identity);
        assert!(data.hero.is_none());
        assert!(data.cards.is_empty());
        assert_eq!(data.filters.options.len(), 9);
    }

    #[test]
    fn test_data_is_translated_and_escaped() {
        let config = SiteConfig::default();
        let mut items = feed();
        items[1].title = "Tom & Jerry".to_string();

        let mut dict = HashMap::new();
        dict.insert("Read More", "Lire la suite");
        dict.insert("Mar", "mars");
        dict.insert("General", "Général");
        dict.insert(" 20 2024", " 20/2024");
        let translate = |key: &str| dict.get(key).map(|v| v.to_string()).unwrap_or_else(|| key.to_string());

        let view = BlogIndexView::new(&config, &items);
        let data = view.data(&translate);

        let hero = data.hero.unwrap();
        assert_eq!(hero.month, "mars");
        assert_eq!(hero.day_year, " 20/2024");
        assert_eq!(hero.category_label, "Release Notes");
        assert_eq!(hero.read_more, "Lire la suite");

        assert_eq!(data.cards[0].title, "Tom &amp; Jerry");
        assert_eq!(data.cards[0].id, "tom-jerry-0");
        assert_eq!(data.cards[0].date, "2024-03-15");
        assert_eq!(data.filters.options[0].label, "Général");
    }
}
