//! GraphQL client for the content API

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

use super::{queries, ApiError, ContentApi};
use crate::config::ApiConfig;
use crate::content::{CommentInput, CommentResult, Node};

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<V: Serialize> {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

/// GraphQL error
#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeByUriData {
    node_by_uri: Option<Node>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCommentData {
    create_comment: Option<CommentResult>,
}

/// GraphQL client for making requests
#[derive(Clone)]
pub struct GraphQLClient {
    client: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl GraphQLClient {
    /// Create a client from the `api` section of the site configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// Execute a GraphQL query
    pub async fn query<V, R>(&self, query: &'static str, variables: Option<V>) -> Result<R, ApiError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let request = GraphQLRequest { query, variables };

        let mut req = self.client.post(&self.endpoint).json(&request);

        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("POST {} -> {} ({} bytes)", self.endpoint, status, body.len());

        interpret_response(status, &body)
    }

    /// Execute a GraphQL mutation (same as query, but semantically different)
    pub async fn mutate<V, R>(&self, mutation: &'static str, variables: Option<V>) -> Result<R, ApiError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        self.query(mutation, variables).await
    }
}

/// Map an HTTP status and body onto the API result
fn interpret_response<R: DeserializeOwned>(status: u16, body: &str) -> Result<R, ApiError> {
    match status {
        401 | 403 => return Err(ApiError::Unauthorized),
        200..=299 => {}
        _ => {
            return Err(ApiError::Status {
                status,
                body: body.to_string(),
            })
        }
    }

    let graphql_response: GraphQLResponse<R> = serde_json::from_str(body)?;

    if let Some(errors) = graphql_response.errors {
        if let Some(first_error) = errors.first() {
            return Err(ApiError::GraphQL(first_error.message.clone()));
        }
    }

    graphql_response.data.ok_or(ApiError::NoData)
}

#[async_trait]
impl ContentApi for GraphQLClient {
    async fn get_node(&self, uri: &str) -> Result<Node, ApiError> {
        let variables = serde_json::json!({ "uri": uri });
        let data: NodeByUriData = self.query(queries::GET_NODE, Some(variables)).await?;
        data.node_by_uri
            .ok_or_else(|| ApiError::NotFound(uri.to_string()))
    }

    async fn create_comment(&self, input: &CommentInput) -> Result<CommentResult, ApiError> {
        let variables = serde_json::json!({ "input": input.to_graphql_input() });
        let data: CreateCommentData = self.mutate(queries::CREATE_COMMENT, Some(variables)).await?;
        data.create_comment.ok_or(ApiError::NoData)
    }
}
