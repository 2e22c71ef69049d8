//! Category and tag chips

use super::{Component, RenderContext};
use crate::content::Term;
use crate::helpers::{encode_segment, html_escape};
use crate::theme::Sx;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipVariant {
    #[default]
    Filled,
    Outlined,
}

/// Passthrough configuration applied to every chip
#[derive(Debug, Clone, Default)]
pub struct ChipProps {
    pub variant: ChipVariant,
    pub sx: Sx,
}

impl ChipProps {
    pub fn outlined() -> Self {
        Self {
            variant: ChipVariant::Outlined,
            sx: Sx::new(),
        }
    }

    pub fn sx(mut self, sx: Sx) -> Self {
        self.sx = sx;
        self
    }
}

pub struct Taxonomies<'a> {
    pub data: &'a [Term],
    pub chip_props: ChipProps,
}

impl<'a> Taxonomies<'a> {
    pub fn new(data: &'a [Term]) -> Self {
        Self {
            data,
            chip_props: ChipProps::default(),
        }
    }

    pub fn chip_props(mut self, chip_props: ChipProps) -> Self {
        self.chip_props = chip_props;
        self
    }
}

impl Component for Taxonomies<'_> {
    fn render(&self, cx: &mut RenderContext<'_>) -> String {
        let theme = cx.theme();
        cx.styles.insert("hb-chip", || {
            format!(
                ".hb-taxonomies{{display:flex;flex-wrap:wrap;gap:{gap};margin:{gap} 0}}\
                 .hb-chip{{display:inline-flex;align-items:center;height:32px;padding:0 12px;\
                 border-radius:16px;font-size:0.8125rem;text-decoration:none;color:{text}}}\
                 .hb-chip-filled{{background:rgba(0,0,0,0.08);border:1px solid transparent}}\
                 .hb-chip-outlined{{background:transparent;border:1px solid #bdbdbd}}",
                gap = theme.spacing(1.0),
                text = theme.palette.text
            )
        });

        let variant_class = match self.chip_props.variant {
            ChipVariant::Filled => "hb-chip-filled",
            ChipVariant::Outlined => "hb-chip-outlined",
        };
        let style = self.chip_props.sx.style_attr(theme);

        let chips: String = self
            .data
            .iter()
            .map(|term| {
                let name = html_escape(&term.name);
                let href = match term.uri.as_deref() {
                    Some(uri) => cx.url_for(uri),
                    None => cx.url_for(&format!("/tag/{}", encode_segment(&term.slug))),
                };
                format!(
                    r#"<a class="hb-chip {}" href="{}"{}>{}</a>"#,
                    variant_class,
                    html_escape(&href),
                    style,
                    name
                )
            })
            .collect();

        format!(r#"<div class="hb-taxonomies">{}</div>"#, chips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn term(name: &str, slug: &str) -> Term {
        Term {
            name: name.to_string(),
            slug: slug.to_string(),
            uri: Some(format!("/category/{}/", slug)),
        }
    }

    #[test]
    fn test_one_chip_per_term() {
        let settings = Settings::default();
        let mut cx = RenderContext::new(&settings);
        let terms = vec![term("Rust", "rust"), term("Web", "web"), term("Notes", "notes")];
        let html = Taxonomies::new(&terms).render(&mut cx);
        assert_eq!(html.matches(r#"class="hb-chip "#).count(), 3);
        assert!(html.contains(r#"href="/category/rust/""#));
    }

    #[test]
    fn test_empty_terms() {
        let settings = Settings::default();
        let mut cx = RenderContext::new(&settings);
        let html = Taxonomies::new(&[]).render(&mut cx);
        assert_eq!(html, r#"<div class="hb-taxonomies"></div>"#);
    }

    #[test]
    fn test_chip_props_passthrough() {
        let settings = Settings::default();
        let mut cx = RenderContext::new(&settings);
        let terms = vec![Term {
            name: "Big Ideas".to_string(),
            slug: "big ideas".to_string(),
            uri: None,
        }];
        let html = Taxonomies::new(&terms)
            .chip_props(ChipProps::outlined().sx(Sx::new().set("borderRadius", "0")))
            .render(&mut cx);
        assert_eq!(
            html,
            r#"<div class="hb-taxonomies"><a class="hb-chip hb-chip-outlined" href="/tag/big%20ideas" style="border-radius:0">Big Ideas</a></div>"#
        );
    }
}
