//! Render pages to markup

use anyhow::Result;

use crate::content::CategoryKey;
use crate::helpers::html_escape;
use crate::nav::FooterMode;
use crate::templates::{LayoutData, TemplateRenderer};
use crate::view::{BlogIndexView, FooterView};
use crate::Portal;

/// Per-render options, usually from the command line
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Language to render in (defaults to the site language)
    pub lang: Option<String>,
    /// Path prefix for internal links (defaults to the site prefix)
    pub prefix: Option<String>,
    /// Categories to uncheck before rendering
    pub hidden: Vec<String>,
    /// Render the mobile filter dropdown open
    pub open_filters: bool,
}

impl RenderOptions {
    fn lang<'a>(&'a self, portal: &'a Portal) -> &'a str {
        self.lang.as_deref().unwrap_or(&portal.config.language)
    }

    fn prefix<'a>(&'a self, portal: &'a Portal) -> &'a str {
        self.prefix.as_deref().unwrap_or(&portal.config.path_prefix)
    }
}

/// Render the full blog index document, including the blog footer
pub fn blog_page(portal: &Portal, options: &RenderOptions) -> Result<String> {
    let lang = options.lang(portal);
    let items = portal.load_feed(lang)?;
    let i18n = portal.i18n(lang)?;
    let renderer = TemplateRenderer::new()?;

    let mut view = BlogIndexView::new(&portal.config, &items);
    for key in &options.hidden {
        let key = CategoryKey::new(key.as_str());
        if !view.filters().universe().contains(&key) {
            tracing::warn!("Unknown category {}, ignoring", key);
            continue;
        }
        if view.filters().is_active(&key) {
            view.toggle_category(&key);
        }
    }
    if options.open_filters {
        view.toggle_dropdown();
    }

    tracing::info!(
        "Rendering blog index: {} posts, {} cards visible",
        items.len(),
        view.visible_cards().len()
    );

    let body = renderer.render_blog_index(&view.data(&i18n))?;

    let footer_view = FooterView::new(
        &portal.config.footer,
        FooterMode::Blog,
        options.prefix(portal),
    );
    let footer = renderer.render_footer(&footer_view.data(&i18n, lang))?;

    let blog = &portal.config.blog;
    renderer.render_layout(&LayoutData {
        lang: html_escape(lang),
        site_name: html_escape(&portal.config.title),
        title: html_escape(&i18n.get(&blog.seo_title)),
        description: html_escape(&i18n.get(&blog.seo_description)),
        body,
        footer,
    })
}

/// Render just the footer in the requested mode
pub fn footer(portal: &Portal, mode: FooterMode, options: &RenderOptions) -> Result<String> {
    let lang = options.lang(portal);
    let i18n = portal.i18n(lang)?;
    let renderer = TemplateRenderer::new()?;

    tracing::info!("Rendering {:?} footer", mode);

    let view = FooterView::new(&portal.config.footer, mode, options.prefix(portal));
    renderer.render_footer(&view.data(&i18n, lang))
}
