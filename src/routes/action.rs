//! Write side: forward a submitted comment form to the content API

use crate::api::ContentApi;
use crate::content::{CommentInput, CommentResult};
use crate::error::RouteError;

/// Create a comment from the submitted form pairs, forwarded verbatim
pub async fn submit_comment<I>(api: &dyn ContentApi, pairs: I) -> Result<CommentResult, RouteError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let input = CommentInput::from_pairs(pairs);
    tracing::debug!("Submitting comment with fields {:?}", input.fields().keys());
    Ok(api.create_comment(&input).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FixtureContentApi;

    #[tokio::test]
    async fn test_single_call_with_exact_fields() {
        let api = FixtureContentApi::new();
        let pairs = vec![
            ("name".to_string(), "A".to_string()),
            ("content".to_string(), "B".to_string()),
        ];

        let result = submit_comment(&api, pairs).await.unwrap();
        assert!(result.success);

        let submissions = api.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(
            submissions[0],
            CommentInput::from_pairs(vec![("name", "A"), ("content", "B")])
        );
    }
}
