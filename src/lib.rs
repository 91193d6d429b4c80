//! devportal: renders the blog index and footer of a developer portal
//!
//! The feed arrives already fetched and sorted newest first. This crate
//! splits off the featured post, filters the rest by category and renders
//! both pages with embedded Tera templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod helpers;
pub mod i18n;
pub mod nav;
pub mod templates;
pub mod view;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use commands::render::RenderOptions;
pub use error::PortalError;
pub use nav::FooterMode;

/// The main portal application
#[derive(Clone)]
pub struct Portal {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Feed data directory
    pub data_dir: PathBuf,
    /// Language files directory
    pub i18n_dir: PathBuf,
}

impl Portal {
    /// Create a new portal from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a portal from an already-built configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let data_dir = base_dir.join(&config.data_dir);
        let i18n_dir = base_dir.join(&config.i18n_dir);

        Self {
            config,
            base_dir,
            data_dir,
            i18n_dir,
        }
    }

    /// Load the newest-first feed for a language
    pub fn load_feed(&self, lang: &str) -> Result<Vec<content::ContentItem>> {
        content::FeedLoader::new(&self.data_dir).load(lang)
    }

    /// Load translations with `lang` as the current language
    pub fn i18n(&self, lang: &str) -> Result<i18n::I18n> {
        let mut i18n = i18n::I18n::new(lang);
        i18n.load_languages(&self.i18n_dir)?;
        Ok(i18n)
    }

    /// Render the blog index document
    pub fn render_blog(&self, options: &RenderOptions) -> Result<String> {
        commands::render::blog_page(self, options)
    }

    /// Render the footer in the given mode
    pub fn render_footer(&self, mode: FooterMode, options: &RenderOptions) -> Result<String> {
        commands::render::footer(self, mode, options)
    }
}
