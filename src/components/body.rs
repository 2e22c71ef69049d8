//! Rendered content body

use super::{Component, RenderContext};

/// Server-rendered HTML from the content API, inserted as-is
pub struct Body<'a> {
    pub html: &'a str,
}

impl<'a> Body<'a> {
    pub fn new(html: &'a str) -> Self {
        Self { html }
    }
}

impl Component for Body<'_> {
    fn render(&self, cx: &mut RenderContext<'_>) -> String {
        cx.styles.insert("hb-body", || {
            ".hb-body{font-size:1rem;line-height:1.75;margin:24px 0}\
             .hb-body img{max-width:100%;height:auto}\
             .hb-body pre{overflow-x:auto}"
                .to_string()
        });
        format!(r#"<div class="hb-body">{}</div>"#, self.html)
    }
}
