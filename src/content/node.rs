//! Node, author, taxonomy and comment models as returned by the content API

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{HashMap, HashSet};

/// A unit of content resolved by URI (post, page, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    /// GraphQL type of the resolved node
    #[serde(rename = "__typename")]
    pub typename: Option<String>,

    /// Global (opaque) id
    pub id: Option<String>,

    /// Numeric database id, the target of new comments
    pub database_id: Option<i64>,

    pub title: Option<String>,

    /// Rendered HTML body
    pub content: Option<String>,

    pub uri: Option<String>,
    pub slug: Option<String>,
    pub date: Option<String>,

    pub author: Option<Edge<Author>>,
    pub categories: Option<Connection<Term>>,
    pub tags: Option<Connection<Term>>,
    pub comments: Option<Connection<Comment>>,
}

/// Posts are nodes read through the `posts/<slug>` route
pub type Post = Node;

impl Node {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn author_node(&self) -> Option<&Author> {
        self.author.as_ref().map(|edge| &edge.node)
    }

    pub fn category_terms(&self) -> &[Term] {
        self.categories.as_ref().map(|c| c.nodes.as_slice()).unwrap_or(&[])
    }

    pub fn tag_terms(&self) -> &[Term] {
        self.tags.as_ref().map(|c| c.nodes.as_slice()).unwrap_or(&[])
    }

    pub fn comment_nodes(&self) -> &[Comment] {
        self.comments.as_ref().map(|c| c.nodes.as_slice()).unwrap_or(&[])
    }
}

/// `{ nodes: [...] }` connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// `{ node: ... }` edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// Content author
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub name: Option<String>,
    pub description: Option<String>,
    pub uri: Option<String>,
    pub avatar: Option<Avatar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Avatar {
    pub url: Option<String>,
}

/// Category or tag term, display only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Term {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub uri: Option<String>,
}

/// A published comment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub id: Option<String>,
    pub database_id: Option<i64>,
    /// Parent comment; `0` or absent for top-level comments
    pub parent_database_id: Option<i64>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub author: Option<Edge<CommentAuthor>>,
}

impl Comment {
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|edge| edge.node.name.as_deref())
            .unwrap_or("Anonymous")
    }

    fn parent(&self) -> Option<i64> {
        self.parent_database_id.filter(|id| *id != 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentAuthor {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// A comment with its replies
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread<'a> {
    pub comment: &'a Comment,
    pub replies: Vec<CommentThread<'a>>,
}

/// Arrange a flat comment list into threads, keeping API order among siblings.
///
/// Comments whose parent is not in the list are treated as top-level.
pub fn build_threads(comments: &[Comment]) -> Vec<CommentThread<'_>> {
    let ids: HashSet<i64> = comments.iter().filter_map(|c| c.database_id).collect();
    let mut children: HashMap<i64, Vec<&Comment>> = HashMap::new();
    let mut roots = Vec::new();

    for comment in comments {
        match comment.parent() {
            Some(parent) if ids.contains(&parent) && Some(parent) != comment.database_id => {
                children.entry(parent).or_default().push(comment)
            }
            _ => roots.push(comment),
        }
    }

    let mut visited = HashSet::new();
    roots
        .into_iter()
        .filter_map(|c| thread_of(c, &children, &mut visited))
        .collect()
}

fn thread_of<'a>(
    comment: &'a Comment,
    children: &HashMap<i64, Vec<&'a Comment>>,
    visited: &mut HashSet<i64>,
) -> Option<CommentThread<'a>> {
    // comments without an id can't be replied to
    let Some(id) = comment.database_id else {
        return Some(CommentThread {
            comment,
            replies: Vec::new(),
        });
    };
    if !visited.insert(id) {
        return None;
    }
    let replies = children
        .get(&id)
        .map(|kids| {
            kids.iter()
                .filter_map(|kid| thread_of(kid, children, visited))
                .collect()
        })
        .unwrap_or_default();
    Some(CommentThread { comment, replies })
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
