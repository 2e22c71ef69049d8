//! Read side: fetch the node a route points at

use crate::api::ContentApi;
use crate::content::Node;
use crate::error::RouteError;
use crate::helpers::normalize_uri;

/// Load the node published at `uri` (a full URI or a post slug)
pub async fn load_node(api: &dyn ContentApi, uri: &str) -> Result<Node, RouteError> {
    let uri = normalize_uri(uri);
    tracing::debug!("Loading node at {}", uri);
    Ok(api.get_node(&uri).await?)
}
