//! Render a single page to HTML

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::api::ContentApi;
use crate::document::Document;
use crate::routes::{load_node, ContentRoute};
use crate::Site;

/// Render the page at `uri` to `output`, or stdout without one
pub async fn run(site: &Site, api: &dyn ContentApi, uri: &str, output: Option<&Path>) -> Result<()> {
    let document = Document::new(site.settings())?;
    let route = route_for(uri);
    let target = match route {
        ContentRoute::Post => uri.trim_start_matches('/').trim_start_matches("posts/"),
        ContentRoute::Node => uri,
    };

    let loaded = load_node(api, target).await;
    let rendered = document.respond(loaded, |node, cx| route.view(node, cx));
    if rendered.status != 200 {
        tracing::warn!("{} rendered with status {}", uri, rendered.status);
    }

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &rendered.html)?;
            println!("Wrote {:?}", path);
        }
        None => println!("{}", rendered.html),
    }

    Ok(())
}

/// Pick the route the server would use for a request path
pub fn route_for(uri: &str) -> ContentRoute {
    let path = uri.trim_start_matches('/');
    match path.strip_prefix("posts/") {
        Some(slug) if !slug.is_empty() && !slug.trim_end_matches('/').contains('/') => {
            ContentRoute::Post
        }
        _ => ContentRoute::Node,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FixtureContentApi;
    use crate::content::Node;
    use std::path::PathBuf;

    #[test]
    fn test_route_for() {
        assert_eq!(route_for("/posts/hello"), ContentRoute::Post);
        assert_eq!(route_for("posts/hello/"), ContentRoute::Post);
        assert_eq!(route_for("/posts"), ContentRoute::Node);
        assert_eq!(route_for("/posts/a/b"), ContentRoute::Node);
        assert_eq!(route_for("/about/"), ContentRoute::Node);
    }

    #[tokio::test]
    async fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let api = FixtureContentApi::new().with_node(
            "/hello/",
            Node {
                title: Some("Hello".to_string()),
                ..Default::default()
            },
        );
        let output: PathBuf = dir.path().join("out/hello.html");

        run(&site, &api, "/posts/hello", Some(&output)).await.unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains(">Hello</h1>"));
        assert!(html.contains(r#"href="/posts""#));
    }
}
