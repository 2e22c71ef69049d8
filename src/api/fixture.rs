//! Fixture-backed content API for running without a backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use super::{ApiError, ContentApi};
use crate::content::{CommentInput, CommentResult, CreatedComment, Node};
use crate::helpers::normalize_uri;

/// Fixture file layout
///
/// ```json
/// {
///   "nodes": { "/hello-world/": { "title": "Hello world!", ... } },
///   "restricted": ["/members-only/"]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FixtureFile {
    nodes: IndexMap<String, Node>,
    restricted: Vec<String>,
}

/// Serves nodes from memory and records comment submissions
#[derive(Debug, Default)]
pub struct FixtureContentApi {
    nodes: HashMap<String, Node>,
    restricted: HashSet<String>,
    submissions: Mutex<Vec<CommentInput>>,
}

impl FixtureContentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load fixtures from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixtures from {:?}", path))?;
        let file: FixtureFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse fixtures in {:?}", path))?;

        let mut api = Self::new();
        for (uri, node) in file.nodes {
            api = api.with_node(&uri, node);
        }
        for uri in file.restricted {
            api = api.restrict(&uri);
        }
        tracing::debug!("Loaded {} fixture nodes from {:?}", api.nodes.len(), path);
        Ok(api)
    }

    /// Publish a node at `uri`
    pub fn with_node(mut self, uri: &str, node: Node) -> Self {
        self.nodes.insert(fixture_key(uri), node);
        self
    }

    /// Deny access to `uri`
    pub fn restrict(mut self, uri: &str) -> Self {
        self.restricted.insert(fixture_key(uri));
        self
    }

    /// Comment payloads received so far, in order
    pub fn submissions(&self) -> Vec<CommentInput> {
        self.submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// URIs match regardless of leading or trailing slashes
fn fixture_key(uri: &str) -> String {
    let uri = normalize_uri(uri);
    if uri == "/" {
        uri
    } else {
        uri.trim_end_matches('/').to_string()
    }
}

#[async_trait]
impl ContentApi for FixtureContentApi {
    async fn get_node(&self, uri: &str) -> Result<Node, ApiError> {
        let key = fixture_key(uri);
        if self.restricted.contains(&key) {
            return Err(ApiError::Unauthorized);
        }
        self.nodes
            .get(&key)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(uri.to_string()))
    }

    async fn create_comment(&self, input: &CommentInput) -> Result<CommentResult, ApiError> {
        let mut submissions = self
            .submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        submissions.push(input.clone());

        Ok(CommentResult {
            success: true,
            comment: Some(CreatedComment {
                id: None,
                database_id: Some(submissions.len() as i64),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(title: &str) -> Node {
        Node {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_lookup_ignores_slashes() {
        let api = FixtureContentApi::new().with_node("/hello-world/", node("Hello"));
        assert_eq!(api.get_node("hello-world").await.unwrap().title(), "Hello");
        assert_eq!(api.get_node("/hello-world/").await.unwrap().title(), "Hello");
    }

    #[tokio::test]
    async fn test_unknown_and_restricted() {
        let api = FixtureContentApi::new()
            .with_node("/members/", node("Members"))
            .restrict("/members/");
        assert!(matches!(
            api.get_node("/nope").await,
            Err(ApiError::NotFound(uri)) if uri == "/nope"
        ));
        assert!(matches!(
            api.get_node("/members").await,
            Err(ApiError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_records_submissions() {
        let api = FixtureContentApi::new();
        let input = CommentInput::from_pairs(vec![("content", "Nice post")]);
        let result = api.create_comment(&input).await.unwrap();
        assert!(result.success);
        assert_eq!(api.submissions(), vec![input]);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        fs::write(
            &path,
            r#"{"nodes": {"/": {"title": "Home"}}, "restricted": ["/private/"]}"#,
        )
        .unwrap();

        let api = FixtureContentApi::load(&path).unwrap();
        assert_eq!(api.nodes.len(), 1);
        assert!(api.restricted.contains("/private"));
    }
}
