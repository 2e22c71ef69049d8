//! Content API module - reads nodes and submits comments

mod client;
mod fixture;
pub mod queries;

pub use client::{GraphQLClient, GraphQLError, GraphQLRequest, GraphQLResponse};
pub use fixture::FixtureContentApi;

use async_trait::async_trait;

use crate::content::{CommentInput, CommentResult, Node};

/// Error type for content API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No content found at {0}")]
    NotFound(String),

    #[error("Access denied")]
    Unauthorized,

    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("No data returned")]
    NoData,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Request/response access to the headless content API
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Resolve the node published at `uri`
    async fn get_node(&self, uri: &str) -> Result<Node, ApiError>;

    /// Create a comment from a flat key/value payload
    async fn create_comment(&self, input: &CommentInput) -> Result<CommentResult, ApiError>;
}
