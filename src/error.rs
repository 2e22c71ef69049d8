//! Route-level errors: status-bearing caught responses and uncaught failures

use axum::http::StatusCode;

use crate::api::ApiError;

/// An HTTP-status-bearing failure raised while loading a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtResponse {
    pub status: u16,
    pub status_text: String,
    pub data: Option<String>,
}

impl CaughtResponse {
    pub fn new(status: u16, data: Option<String>) -> Self {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status")
            .to_string();
        Self {
            status,
            status_text,
            data,
        }
    }
}

/// Failure of a route loader or action
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("{} {}", .0.status, .0.status_text)]
    Caught(CaughtResponse),

    #[error(transparent)]
    Uncaught(#[from] anyhow::Error),
}

impl From<ApiError> for RouteError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(uri) => {
                RouteError::Caught(CaughtResponse::new(404, Some(format!("No content at {}", uri))))
            }
            ApiError::Unauthorized => RouteError::Caught(CaughtResponse::new(401, None)),
            ApiError::Status { status, body } => {
                let data = Some(body).filter(|b| !b.trim().is_empty());
                RouteError::Caught(CaughtResponse::new(status, data))
            }
            other => RouteError::Uncaught(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(CaughtResponse::new(404, None).status_text, "Not Found");
        assert_eq!(CaughtResponse::new(401, None).status_text, "Unauthorized");
        assert_eq!(CaughtResponse::new(599, None).status_text, "Unknown Status");
    }

    #[test]
    fn test_from_api_error() {
        let err = RouteError::from(ApiError::NotFound("/missing".to_string()));
        assert!(matches!(err, RouteError::Caught(ref c) if c.status == 404));

        let err = RouteError::from(ApiError::Unauthorized);
        assert!(matches!(err, RouteError::Caught(ref c) if c.status == 401));

        let err = RouteError::from(ApiError::Status {
            status: 503,
            body: " ".to_string(),
        });
        assert!(matches!(err, RouteError::Caught(ref c) if c.status == 503 && c.data.is_none()));

        let err = RouteError::from(ApiError::GraphQL("bad query".to_string()));
        assert!(matches!(err, RouteError::Uncaught(_)));
        assert_eq!(err.to_string(), "GraphQL error: bad query");
    }
}
