//! HTML helper functions

/// Generate an anchor tag
///
/// # Examples
/// ```ignore
/// link_to("/about/", "About", Some("hb-link")) // -> <a class="hb-link" href="/about/">About</a>
/// ```
pub fn link_to(href: &str, inner_html: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    if href.starts_with("http://") || href.starts_with("https://") {
        format!(
            r#"<a{} href="{}" target="_blank" rel="noopener">{}</a>"#,
            class_attr,
            html_escape(href),
            inner_html
        )
    } else {
        format!(r#"<a{} href="{}">{}</a>"#, class_attr, html_escape(href), inner_html)
    }
}

/// Generate an image tag
///
/// # Examples
/// ```ignore
/// image_tag("https://example.com/a.png", Some("Avatar"), Some("hb-avatar"))
/// ```
pub fn image_tag(src: &str, alt: Option<&str>, class: Option<&str>) -> String {
    let alt = alt.unwrap_or("");
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<img{} src="{}" alt="{}">"#,
        class_attr,
        html_escape(src),
        html_escape(alt)
    )
}

/// Generate a `<meta>` tag keyed by `name` or `property`
pub fn meta_tag(key: &str, content: &str) -> String {
    let attr = if key.starts_with("og:") {
        "property"
    } else {
        "name"
    };
    format!(
        r#"<meta {}="{}" content="{}">"#,
        attr,
        html_escape(key),
        html_escape(content)
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_to() {
        assert_eq!(link_to("/about/", "About", None), r#"<a href="/about/">About</a>"#);
        assert!(link_to("https://example.com", "x", None).contains("rel=\"noopener\""));
        assert!(link_to("/", "Home", Some("hb-title")).starts_with(r#"<a class="hb-title""#));
    }

    #[test]
    fn test_meta_tag() {
        assert_eq!(
            meta_tag("og:title", "A \"quoted\" title"),
            r#"<meta property="og:title" content="A &quot;quoted&quot; title">"#
        );
        assert_eq!(
            meta_tag("twitter:card", "summary_large_image"),
            r#"<meta name="twitter:card" content="summary_large_image">"#
        );
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
        // the omission counts in characters, not bytes
        assert_eq!(truncate("Hello World", 8, Some("…")), "Hello W…");
    }
}
