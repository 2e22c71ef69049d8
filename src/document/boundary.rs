//! Catch boundary: maps caught statuses to user-facing messages

use crate::error::CaughtResponse;

pub const ACCESS_DENIED: &str =
    "Oops! Looks like you tried to visit a page that you do not have access to.";
pub const NOT_FOUND: &str = "Oops! Looks like you tried to visit a page that does not exist.";

/// A caught response the boundary does not handle
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Escalated(pub String);

/// Message for a recognized status; anything else escalates to the error
/// boundary carrying the response data, or the status text without it.
pub fn caught_message(caught: &CaughtResponse) -> Result<&'static str, Escalated> {
    match caught.status {
        401 => Ok(ACCESS_DENIED),
        404 => Ok(NOT_FOUND),
        _ => Err(Escalated(
            caught
                .data
                .clone()
                .unwrap_or_else(|| caught.status_text.clone()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_statuses() {
        assert_eq!(
            caught_message(&CaughtResponse::new(401, None)).unwrap(),
            ACCESS_DENIED
        );
        assert_eq!(
            caught_message(&CaughtResponse::new(404, Some("gone".to_string()))).unwrap(),
            NOT_FOUND
        );
    }

    #[test]
    fn test_other_statuses_escalate() {
        let err = caught_message(&CaughtResponse::new(502, Some("upstream down".to_string())))
            .unwrap_err();
        assert_eq!(err.to_string(), "upstream down");

        let err = caught_message(&CaughtResponse::new(500, None)).unwrap_err();
        assert_eq!(err.to_string(), "Internal Server Error");
    }
}
