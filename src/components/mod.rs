//! Presentational components
//!
//! Each component turns already-fetched data into an HTML fragment. Base
//! styles are registered in the render's [`StyleCache`] by class name so the
//! document shell can emit each rule once.

mod author;
mod back_link;
mod body;
mod comments;
mod taxonomies;
mod title;

pub use author::Author;
pub use back_link::BackLink;
pub use body::Body;
pub use comments::Comments;
pub use taxonomies::{ChipProps, ChipVariant, Taxonomies};
pub use title::{Title, Variant};

use crate::config::{Settings, SiteConfig};
use crate::theme::{OnceEffect, StyleCache, Sx, Theme};

/// Per-render state shared by the components of one page
pub struct RenderContext<'a> {
    settings: &'a Settings,
    pub styles: StyleCache,
    rehydrated: OnceEffect,
}

impl<'a> RenderContext<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            styles: StyleCache::new(),
            rehydrated: OnceEffect::new(),
        }
    }

    pub fn theme(&self) -> &'a Theme {
        &self.settings.theme
    }

    pub fn config(&self) -> &'a SiteConfig {
        &self.settings.configs
    }

    /// Root-relative URL for a site path
    pub fn url_for(&self, path: &str) -> String {
        crate::helpers::url_for(self.config(), path)
    }

    /// Move the collected styles out as `<style>` tags and reset the cache.
    ///
    /// Only the first call after a render yields the styles; later calls
    /// return an empty string.
    pub fn rehydrate_styles(&mut self) -> String {
        let mut tags = String::new();
        let styles = &mut self.styles;
        self.rehydrated.run(|| tags = styles.flush());
        tags
    }
}

/// Something that renders to an HTML fragment
pub trait Component {
    fn render(&self, cx: &mut RenderContext<'_>) -> String;
}

/// Wrap a fragment in a `<div>` carrying `sx` overrides
pub fn boxed(cx: &RenderContext<'_>, sx: &Sx, inner: String) -> String {
    format!("<div{}>{}</div>", sx.style_attr(cx.theme()), inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rehydrate_styles_once() {
        let settings = Settings::default();
        let mut cx = RenderContext::new(&settings);
        cx.styles.insert("hb-body", || ".hb-body{}".to_string());

        let first = cx.rehydrate_styles();
        assert!(first.contains(r#"data-hb="hb-body""#));
        assert!(cx.styles.is_empty());

        cx.styles.insert("hb-body", || ".hb-body{}".to_string());
        assert_eq!(cx.rehydrate_styles(), "");
    }

    #[test]
    fn test_boxed() {
        let settings = Settings::default();
        let cx = RenderContext::new(&settings);
        assert_eq!(
            boxed(&cx, &Sx::new().set("mb", "5"), "x".to_string()),
            r#"<div style="margin-bottom:40px">x</div>"#
        );
    }
}
