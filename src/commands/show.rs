//! Print a summary of a node

use anyhow::Result;

use crate::api::ContentApi;
use crate::content::Node;
use crate::helpers::{full_url_for, strip_html, truncate};
use crate::routes::load_node;
use crate::Site;

/// Fetch the node at `uri` and print it
pub async fn run(site: &Site, api: &dyn ContentApi, uri: &str) -> Result<()> {
    let node = load_node(api, uri).await?;
    print!("{}", summary(site, &node));
    Ok(())
}

/// Human-readable node summary
pub fn summary(site: &Site, node: &Node) -> String {
    let mut out = String::new();
    let join = |terms: &[crate::content::Term]| {
        terms
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    out.push_str(&format!("{}\n", node.title()));
    if let Some(uri) = &node.uri {
        out.push_str(&format!("  url:        {}\n", full_url_for(&site.config, uri)));
    }
    if let Some(id) = node.database_id {
        out.push_str(&format!("  id:         {}\n", id));
    }
    if let Some(author) = node.author_node().and_then(|a| a.name.as_deref()) {
        out.push_str(&format!("  author:     {}\n", author));
    }
    out.push_str(&format!("  categories: {}\n", join(node.category_terms())));
    out.push_str(&format!("  tags:       {}\n", join(node.tag_terms())));
    out.push_str(&format!("  comments:   {}\n", node.comment_nodes().len()));

    let excerpt = truncate(strip_html(node.content()).trim(), 160, None);
    if !excerpt.is_empty() {
        out.push_str(&format!("\n  {}\n", excerpt));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{Connection, Term};
    use std::path::PathBuf;

    #[test]
    fn test_summary() {
        let site = Site {
            config: SiteConfig::default(),
            base_dir: PathBuf::from("."),
            static_dir: PathBuf::from("static"),
        };
        let node = Node {
            title: Some("Hello".to_string()),
            uri: Some("/hello/".to_string()),
            database_id: Some(3),
            content: Some("<p>Some <b>text</b></p>".to_string()),
            tags: Some(Connection {
                nodes: vec![
                    Term {
                        name: "a".to_string(),
                        ..Default::default()
                    },
                    Term {
                        name: "b".to_string(),
                        ..Default::default()
                    },
                ],
            }),
            ..Default::default()
        };

        let text = summary(&site, &node);
        assert!(text.starts_with("Hello\n"));
        assert!(text.contains("url:        http://localhost:4000/hello/"));
        assert!(text.contains("tags:       a, b"));
        assert!(text.contains("comments:   0"));
        assert!(text.contains("Some text"));
    }
}
