//! "Back to blog" navigation button

use super::{Component, RenderContext};
use crate::helpers::{html_escape, link_to};

pub struct BackLink<'a> {
    pub to: &'a str,
    pub label: &'a str,
}

impl<'a> BackLink<'a> {
    pub fn new(to: &'a str) -> Self {
        Self {
            to,
            label: "Back to blog",
        }
    }
}

impl Component for BackLink<'_> {
    fn render(&self, cx: &mut RenderContext<'_>) -> String {
        let theme = cx.theme();
        cx.styles.insert("hb-back", || {
            format!(
                ".hb-back{{display:inline-flex;align-items:center;gap:{};padding:6px 8px;color:{};\
                 text-decoration:none;text-transform:uppercase;font-size:0.875rem;font-weight:500}}",
                theme.spacing(1.0),
                theme.palette.primary
            )
        });
        let href = cx.url_for(self.to);
        let inner = format!(
            r#"<span aria-hidden="true">&larr;</span>{}"#,
            html_escape(self.label)
        );
        link_to(&href, &inner, Some("hb-back"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_back_link_respects_root() {
        let mut settings = Settings::default();
        settings.configs.root = "/blog/".to_string();
        let mut cx = RenderContext::new(&settings);
        let html = BackLink::new("/posts").render(&mut cx);
        assert!(html.starts_with(r#"<a class="hb-back" href="/blog/posts">"#));
        assert!(html.contains("Back to blog"));
    }
}
