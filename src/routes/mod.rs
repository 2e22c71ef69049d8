//! Content routes - loaders, actions and the views they feed

pub mod action;
pub mod loader;
pub mod views;

pub use action::submit_comment;
pub use loader::load_node;

use crate::components::RenderContext;
use crate::content::Node;

/// The content routes served by the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRoute {
    /// Any top-level URI, including the front page
    Node,
    /// `posts/<slug>`
    Post,
}

impl ContentRoute {
    /// Render the page for a loaded node
    pub fn view(&self, node: &Node, cx: &mut RenderContext<'_>) -> String {
        match self {
            ContentRoute::Node => views::node_view(node, cx),
            ContentRoute::Post => views::post_view(node, cx),
        }
    }
}
