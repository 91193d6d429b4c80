//! Footer view

use crate::config::FooterConfig;
use crate::helpers::html_escape;
use crate::i18n::Translate;
use crate::nav::{render_groups, FooterMode, NavGroup, NavItem};
use crate::templates::FooterData;

/// Footer for one page, in the variant chosen by the caller
pub struct FooterView<'a> {
    config: &'a FooterConfig,
    mode: FooterMode,
    path_prefix: &'a str,
}

impl<'a> FooterView<'a> {
    pub fn new(config: &'a FooterConfig, mode: FooterMode, path_prefix: &'a str) -> Self {
        Self {
            config,
            mode,
            path_prefix,
        }
    }

    pub fn mode(&self) -> FooterMode {
        self.mode
    }

    /// Columns for the current mode, as configured
    pub fn groups(&self) -> &'a [NavGroup] {
        match self.mode {
            FooterMode::Site => &self.config.items,
            FooterMode::Blog => &self.config.blog_items,
        }
    }

    /// Build template data, translating labels on every call
    pub fn data<T: Translate + ?Sized>(&self, t: &T, language: &str) -> FooterData {
        let tr = |key: &str| html_escape(&t.translate(key));

        let translated: Vec<NavGroup> = self
            .groups()
            .iter()
            .map(|group| NavGroup {
                label: tr(&group.label),
                items: group
                    .items
                    .iter()
                    .map(|item| NavItem {
                        label: tr(&item.label),
                        ..item.clone()
                    })
                    .collect(),
            })
            .collect();

        let mut groups = render_groups(&translated, self.path_prefix);
        for link in groups.iter_mut().flat_map(|g| g.links.iter_mut()) {
            link.href = html_escape(&link.href);
        }

        FooterData {
            groups,
            copyright_text: html_escape(&self.config.copyright_text),
            language: html_escape(language),
        }
    }
}
