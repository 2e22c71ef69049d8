//! Page title, optionally rendered as a link

use super::{Component, RenderContext};
use crate::helpers::{html_escape, link_to};
use crate::theme::Sx;

/// Typography variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    H1,
    H2,
    H3,
    #[default]
    H4,
    H5,
    H6,
}

impl Variant {
    fn class(&self) -> &'static str {
        match self {
            Variant::H1 => "hb-h1",
            Variant::H2 => "hb-h2",
            Variant::H3 => "hb-h3",
            Variant::H4 => "hb-h4",
            Variant::H5 => "hb-h5",
            Variant::H6 => "hb-h6",
        }
    }

    fn font_size(&self) -> &'static str {
        match self {
            Variant::H1 => "6rem",
            Variant::H2 => "3.75rem",
            Variant::H3 => "3rem",
            Variant::H4 => "2.125rem",
            Variant::H5 => "1.5rem",
            Variant::H6 => "1.25rem",
        }
    }
}

pub struct Title<'a> {
    pub text: &'a str,
    /// Link destination; without one the title is a plain heading
    pub to: Option<&'a str>,
    pub variant: Variant,
    pub sx: Sx,
}

impl<'a> Title<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            to: None,
            variant: Variant::default(),
            sx: Sx::new(),
        }
    }

    pub fn to(mut self, to: &'a str) -> Self {
        self.to = Some(to);
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn sx(mut self, sx: Sx) -> Self {
        self.sx = sx;
        self
    }
}

impl Component for Title<'_> {
    fn render(&self, cx: &mut RenderContext<'_>) -> String {
        let theme = cx.theme();
        cx.styles.insert("hb-title", || {
            format!(
                ".hb-title{{width:100%;text-decoration:none;display:flex;color:{};padding-bottom:0;margin:0;font-weight:400;line-height:1.2}}",
                theme.palette.common.black
            )
        });
        let variant = self.variant;
        cx.styles.insert(variant.class(), || {
            format!(".{}{{font-size:{}}}", variant.class(), variant.font_size())
        });

        let class = format!("hb-title {}", variant.class());
        let style = self.sx.style_attr(theme);
        let text = html_escape(self.text);

        match self.to {
            Some(to) => {
                let link = link_to(to, &text, Some(&class));
                // keep the link attributes, then splice in prefetch and style
                link.replacen(
                    "<a ",
                    &format!(r#"<a data-prefetch="intent"{} "#, style),
                    1,
                )
            }
            None => format!(r#"<h1 class="{}"{}>{}</h1>"#, class, style, text),
        }
    }
}
