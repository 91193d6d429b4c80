//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::CategoryUniverse;
use crate::error::PortalError;
use crate::nav::{NavGroup, NavItem};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    // URL
    /// Prepended to internal links (e.g. "/ja")
    pub path_prefix: String,

    // Directory
    pub data_dir: String,
    pub i18n_dir: String,

    // Date / Time format
    #[serde(default)]
    pub date_format: DateFormatConfig,

    // Pages
    #[serde(default)]
    pub blog: BlogConfig,
    #[serde(default)]
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "XRPL.org".to_string(),
            language: "en".to_string(),

            path_prefix: String::new(),

            data_dir: "data".to_string(),
            i18n_dir: "languages".to_string(),

            date_format: DateFormatConfig::default(),

            blog: BlogConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).map_err(|source| PortalError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }

    /// The fixed set of blog categories, in display order
    pub fn category_universe(&self) -> CategoryUniverse {
        CategoryUniverse::new(
            self.blog
                .categories
                .iter()
                .map(|(key, label)| (key.clone(), label.clone())),
        )
    }
}

/// Moment.js-style formats used on the blog index
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatConfig {
    pub hero_month_format: String,
    pub hero_day_format: String,
    pub card_date_format: String,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            hero_month_format: "MMM".to_string(),
            hero_day_format: " DD YYYY".to_string(),
            card_date_format: "MMM DD, YYYY".to_string(),
        }
    }
}

/// Blog index page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub seo_title: String,
    pub seo_description: String,
    pub eyebrow: String,
    pub heading: String,
    /// Category key -> display label (order is the checkbox order)
    pub categories: IndexMap<String, String>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        let categories = [
            ("general", "General"),
            ("release_notes", "Release Notes"),
            ("advisories", "Advisories"),
            ("amendments", "Amendments"),
            ("development", "Development"),
            ("developer_reflections", "Developer Reflections"),
            ("gateway_bulletins", "Gateway Bulletins"),
            ("features", "Features"),
            ("security", "Security"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            seo_title: "XRP Ledger Community Blog".to_string(),
            seo_description: "Browse the XRP Ledger Community Blog.".to_string(),
            eyebrow: "XRPL Community".to_string(),
            heading: "XRPL Blog".to_string(),
            categories,
        }
    }
}

/// Footer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Columns shown on regular pages
    pub items: Vec<NavGroup>,
    /// Columns shown on blog pages
    pub blog_items: Vec<NavGroup>,
    pub copyright_text: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            blog_items: default_blog_footer(),
            copyright_text: String::new(),
        }
    }
}

fn default_blog_footer() -> Vec<NavGroup> {
    vec![
        NavGroup::new(
            "Learn",
            vec![
                NavItem::link("Overview", "/about/"),
                NavItem::link("Uses", "/about/uses"),
                NavItem::link("History", "/about/history"),
                NavItem::link("Impact", "/about/impact"),
                NavItem::link("Carbon Calculator", "/about/impact"),
            ],
        ),
        NavGroup::new(
            "Explore",
            vec![
                NavItem::link("Wallets", "/docs/introduction/crypto-wallets"),
                NavItem::link("Exchanges", "/about/xrp"),
                NavItem::link("Businesses", "/about/uses"),
                NavItem::link("Ledger Explorer", "https://livenet.xrpl.org/"),
            ],
        ),
        NavGroup::new(
            "Build",
            vec![
                NavItem::link("Get Started", "/docs/tutorials"),
                NavItem::link("Docs", "/docs/"),
                NavItem::link("Dev Tools", "/resources/dev-tools/"),
                NavItem::link("Dev Blog", "/blog/"),
            ],
        ),
        NavGroup::new(
            "Contribute",
            vec![
                NavItem::link("How to Contribute", "/resources/contribute-code"),
                NavItem::external(
                    "XRPL on Github",
                    "https://github.com/XRPLF/xrpl-dev-portal",
                ),
            ],
        ),
    ]
}
