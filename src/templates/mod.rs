//! Built-in portal templates using Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is off: the views
//! escape every text value before it reaches a template, and hrefs must
//! keep their slashes.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::error::PortalError;
use crate::feed::CategoryOption;
use crate::helpers::format_date;
use crate::nav::RenderedGroup;

/// Template renderer with the embedded portal templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("macros.html", include_str!("portal/macros.html")),
            ("layout.html", include_str!("portal/layout.html")),
            ("blog_index.html", include_str!("portal/blog_index.html")),
            ("footer.html", include_str!("portal/footer.html")),
        ])
        .map_err(PortalError::from)?;

        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self
            .tera
            .render(template_name, context)
            .map_err(PortalError::from)?)
    }

    fn render_data<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String> {
        let context = Context::from_serialize(data).map_err(PortalError::from)?;
        self.render(template_name, &context)
    }

    /// Render the blog index body
    pub fn render_blog_index(&self, data: &BlogIndexData) -> Result<String> {
        self.render_data("blog_index.html", data)
    }

    /// Render the footer
    pub fn render_footer(&self, data: &FooterData) -> Result<String> {
        self.render_data("footer.html", data)
    }

    /// Wrap a body and footer into a full document
    pub fn render_layout(&self, data: &LayoutData) -> Result<String> {
        self.render_data("layout.html", data)
    }
}

/// Tera filter: format a `YYYY-MM-DD` string with a Moment.js format
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "YYYY-MM-DD".to_string(),
    };

    match chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        Ok(date) => Ok(tera::Value::String(format_date(&date, &format))),
        // Not a calendar date, show it untouched
        Err(_) => Ok(tera::Value::String(s)),
    }
}

// Data structures for template context. Text fields hold escaped HTML.

#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub eyebrow: String,
    pub heading: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroData {
    pub month: String,
    pub day_year: String,
    pub category_key: String,
    pub category_label: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub read_more: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    pub id: String,
    pub category_key: String,
    pub category_label: String,
    /// ISO date, formatted in the template
    pub date: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub read_more: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterData {
    pub sidebar_header: String,
    pub dropdown_header: String,
    pub dropdown_label: String,
    pub dropdown_open: bool,
    pub options: Vec<CategoryOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogIndexData {
    pub page: PageMeta,
    pub hero: Option<HeroData>,
    pub filters: FilterData,
    pub cards: Vec<CardData>,
    pub card_date_format: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterData {
    pub groups: Vec<RenderedGroup>,
    pub copyright_text: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutData {
    pub lang: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub footer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{LinkKind, RenderedLink};

    fn blog_data(hero: Option<HeroData>, dropdown_open: bool) -> BlogIndexData {
        BlogIndexData {
            page: PageMeta {
                eyebrow: "Community".to_string(),
                heading: "Blog".to_string(),
            },
            hero,
            filters: FilterData {
                sidebar_header: "Filter by Category:".to_string(),
                dropdown_header: "Filter by:".to_string(),
                dropdown_label: "Category".to_string(),
                dropdown_open,
                options: vec![
                    CategoryOption {
                        key: "general".to_string(),
                        label: "General".to_string(),
                        checked: true,
                    },
                    CategoryOption {
                        key: "security".to_string(),
                        label: "Security".to_string(),
                        checked: false,
                    },
                ],
            },
            cards: vec![CardData {
                id: "hello-0".to_string(),
                category_key: "general".to_string(),
                category_label: "General".to_string(),
                date: "2024-03-07".to_string(),
                title: "Hello".to_string(),
                description: "First".to_string(),
                link: "/blog/hello".to_string(),
                read_more: "Read More".to_string(),
            }],
            card_date_format: "MMM DD, YYYY".to_string(),
        }
    }

    #[test]
    fn test_render_blog_without_hero() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render_blog_index(&blog_data(None, false)).unwrap();

        assert!(!html.contains("blog-hero"));
        assert!(html.contains(r#"id="input_general" value="general" checked>"#));
        assert!(html.contains(r#"id="input_security" value="security">"#));
        assert!(html.contains(r#"<time datetime="2024-03-07">Mar 07, 2024</time>"#));
        assert!(html.contains(r#"href="/blog/hello""#));
        // dropdown closed: only the sidebar checkboxes
        assert!(!html.contains("input_general-mobile"));
    }

    #[test]
    fn test_render_open_dropdown() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render_blog_index(&blog_data(None, true)).unwrap();
        assert!(html.contains(r#"id="input_general-mobile""#));
        assert!(html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn test_render_footer() {
        let renderer = TemplateRenderer::new().unwrap();
        let data = FooterData {
            groups: vec![RenderedGroup {
                label: "Learn".to_string(),
                links: vec![RenderedLink {
                    label: "Overview".to_string(),
                    href: "/en/about/".to_string(),
                    class: "footer-item".to_string(),
                    kind: LinkKind::Internal,
                }],
            }],
            copyright_text: "© 2024".to_string(),
            language: "en".to_string(),
        };

        let html = renderer.render_footer(&data).unwrap();
        assert!(html.contains("<h5>Learn</h5>"));
        assert!(html.contains(r#"<a class="footer-item" href="/en/about/">Overview</a>"#));
        assert!(html.contains(r#"<div class="copyright-license">© 2024</div>"#));
    }

    #[test]
    fn test_date_format_filter_passthrough() {
        let mut args = HashMap::new();
        args.insert("format".to_string(), tera::Value::String("MMM".to_string()));
        let value = tera::Value::String("soon".to_string());
        assert_eq!(
            date_format_filter(&value, &args).unwrap(),
            tera::Value::String("soon".to_string())
        );
    }

    #[test]
    fn test_date_format_filter_literal_percent() {
        let mut args = HashMap::new();
        args.insert(
            "format".to_string(),
            tera::Value::String("MMM DD (100%)".to_string()),
        );
        let value = tera::Value::String("2024-03-07".to_string());
        assert_eq!(
            date_format_filter(&value, &args).unwrap(),
            tera::Value::String("Mar 07 (100%)".to_string())
        );
    }
}
