//! Author card

use super::{Component, RenderContext};
use crate::content;
use crate::helpers::{html_escape, image_tag, link_to};

pub struct Author<'a> {
    pub data: Option<&'a content::Author>,
}

impl<'a> Author<'a> {
    pub fn new(data: Option<&'a content::Author>) -> Self {
        Self { data }
    }
}

impl Component for Author<'_> {
    fn render(&self, cx: &mut RenderContext<'_>) -> String {
        let Some(author) = self.data else {
            return String::new();
        };

        let theme = cx.theme();
        cx.styles.insert("hb-author", || {
            format!(
                ".hb-author{{display:flex;align-items:center;gap:{gap};margin:{gap2} 0}}\
                 .hb-avatar{{width:48px;height:48px;border-radius:50%}}\
                 .hb-author-name{{font-weight:500;color:{black}}}\
                 .hb-author p{{margin:0;color:rgba(0,0,0,0.6)}}",
                gap = theme.spacing(2.0),
                gap2 = theme.spacing(4.0),
                black = theme.palette.common.black
            )
        });

        let name = author.name.as_deref().unwrap_or("Anonymous");
        let avatar = author
            .avatar
            .as_ref()
            .and_then(|a| a.url.as_deref())
            .map(|url| image_tag(url, Some(name), Some("hb-avatar")))
            .unwrap_or_default();

        let escaped = html_escape(name);
        let name_html = match author.uri.as_deref() {
            Some(uri) => link_to(&cx.url_for(uri), &escaped, Some("hb-author-name")),
            None => format!(r#"<span class="hb-author-name">{}</span>"#, escaped),
        };

        let description = author
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|d| format!("<p>{}</p>", html_escape(d)))
            .unwrap_or_default();

        format!(
            r#"<div class="hb-author">{}<div>{}{}</div></div>"#,
            avatar, name_html, description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::content::Avatar;

    #[test]
    fn test_missing_author_renders_nothing() {
        let settings = Settings::default();
        let mut cx = RenderContext::new(&settings);
        assert_eq!(Author::new(None).render(&mut cx), "");
        assert!(cx.styles.is_empty());
    }

    #[test]
    fn test_author_card() {
        let settings = Settings::default();
        let mut cx = RenderContext::new(&settings);
        let author = content::Author {
            name: Some("Ada".to_string()),
            description: Some("Writes about engines".to_string()),
            uri: None,
            avatar: Some(Avatar {
                url: Some("https://example.com/ada.png".to_string()),
            }),
        };
        let html = Author::new(Some(&author)).render(&mut cx);
        assert!(html.contains(r#"<img class="hb-avatar" src="https://example.com/ada.png" alt="Ada">"#));
        assert!(html.contains(r#"<span class="hb-author-name">Ada</span>"#));
        assert!(html.contains("<p>Writes about engines</p>"));
    }
}
