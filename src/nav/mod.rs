//! Footer navigation: configured link groups and their rendered form

use serde::{Deserialize, Serialize};

use crate::helpers::{is_absolute_url, url_for};

/// A single footer link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    #[serde(default)]
    pub link: String,
    /// Marked with the external-link style
    #[serde(default)]
    pub external: bool,
}

impl NavItem {
    pub fn link(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
            external: false,
        }
    }

    pub fn external(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            external: true,
            ..Self::link(label, link)
        }
    }
}

/// A labelled footer column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavGroup {
    pub label: String,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl NavGroup {
    pub fn new(label: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// Which footer variant a page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterMode {
    #[default]
    Site,
    Blog,
}

/// How a link's href was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Site-relative, prefixed with the path prefix
    Internal,
    /// Already carries a scheme, passed through
    Absolute,
}

impl LinkKind {
    /// Classify a configured link. Empty links count as absolute so they
    /// are never prefixed.
    pub fn of(link: &str) -> Self {
        if link.is_empty() || is_absolute_url(link) {
            LinkKind::Absolute
        } else {
            LinkKind::Internal
        }
    }
}

/// A link ready for markup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedLink {
    pub label: String,
    pub href: String,
    pub class: String,
    pub kind: LinkKind,
}

/// A footer column ready for markup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedGroup {
    pub label: String,
    pub links: Vec<RenderedLink>,
}

/// Render every group, prefixing internal links with `prefix`
pub fn render_groups(groups: &[NavGroup], prefix: &str) -> Vec<RenderedGroup> {
    groups
        .iter()
        .map(|group| RenderedGroup {
            label: group.label.clone(),
            links: group
                .items
                .iter()
                .map(|item| render_item(item, prefix))
                .collect(),
        })
        .collect()
}

fn render_item(item: &NavItem, prefix: &str) -> RenderedLink {
    let kind = LinkKind::of(&item.link);
    let href = match kind {
        LinkKind::Internal => url_for(prefix, &item.link),
        LinkKind::Absolute => item.link.clone(),
    };

    let class = if item.external {
        "footer-item footer-external-link"
    } else {
        "footer-item"
    };

    RenderedLink {
        label: item.label.clone(),
        href,
        class: class.to_string(),
        kind,
    }
}
