//! Page views for the content routes

use crate::components::{
    boxed, Author, BackLink, Body, ChipProps, Comments, Component, RenderContext, Taxonomies,
    Title, Variant,
};
use crate::content::{Node, Post};
use crate::theme::Sx;

/// A node at an arbitrary URI: title, tags, body, categories, author, comments
pub fn node_view(node: &Node, cx: &mut RenderContext<'_>) -> String {
    let mut html = String::from("<div>");

    html.push_str(&BackLink::new("/").render(cx));
    html.push_str(
        &Title::new(node.title())
            .variant(Variant::H2)
            .sx(Sx::new().set("mb", "1"))
            .render(cx),
    );

    let tags = Taxonomies::new(node.tag_terms()).render(cx);
    html.push_str(&boxed(cx, &Sx::new().set("mb", "5"), tags));

    html.push_str(&Body::new(node.content()).render(cx));

    let categories = Taxonomies::new(node.category_terms())
        .chip_props(ChipProps::outlined().sx(Sx::new().set("borderRadius", "0")))
        .render(cx);
    html.push_str(&boxed(cx, &Sx::new(), categories));

    let tags = Taxonomies::new(node.tag_terms()).render(cx);
    html.push_str(&boxed(cx, &Sx::new(), tags));

    html.push_str(&Author::new(node.author_node()).render(cx));
    html.push_str(&Comments::new(node.database_id, node.comment_nodes()).render(cx));

    html.push_str("</div>");
    html
}

/// A post under `posts/<slug>`: title, body, comments
pub fn post_view(post: &Post, cx: &mut RenderContext<'_>) -> String {
    let mut html = String::from("<div>");

    html.push_str(&BackLink::new("/posts").render(cx));
    html.push_str(&Title::new(post.title()).variant(Variant::H2).render(cx));
    html.push_str(&Body::new(post.content()).render(cx));
    html.push_str(&Comments::new(post.database_id, post.comment_nodes()).render(cx));

    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::content::{Connection, Term};

    fn node() -> Node {
        Node {
            database_id: Some(5),
            title: Some("Tagged".to_string()),
            content: Some("<p>Body</p>".to_string()),
            tags: Some(Connection {
                nodes: vec![Term {
                    name: "rust".to_string(),
                    slug: "rust".to_string(),
                    uri: Some("/tag/rust/".to_string()),
                }],
            }),
            categories: Some(Connection {
                nodes: vec![Term {
                    name: "Dev".to_string(),
                    slug: "dev".to_string(),
                    uri: Some("/category/dev/".to_string()),
                }],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_node_view() {
        let settings = Settings::default();
        let mut cx = RenderContext::new(&settings);
        let html = node_view(&node(), &mut cx);

        assert!(html.contains(r#"<a class="hb-back" href="/">"#));
        assert!(html.contains(r#"<h1 class="hb-title hb-h2" style="margin-bottom:8px">Tagged</h1>"#));
        // tags are shown above and below the body
        assert_eq!(html.matches(r#"href="/tag/rust/""#).count(), 2);
        assert!(html.contains(r#"class="hb-chip hb-chip-outlined" href="/category/dev/" style="border-radius:0""#));
        assert!(html.contains(r#"<div style="margin-bottom:40px"><div class="hb-taxonomies">"#));
        assert!(html.contains(r#"name="commentOn" value="5""#));
    }

    #[test]
    fn test_post_view() {
        let settings = Settings::default();
        let mut cx = RenderContext::new(&settings);
        let html = post_view(&node(), &mut cx);

        assert!(html.contains(r#"<a class="hb-back" href="/posts">"#));
        assert!(html.contains("<p>Body</p>"));
        assert!(!html.contains("hb-taxonomies"));
        assert!(!html.contains("hb-author"));
    }
}
