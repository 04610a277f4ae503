use reqwest::StatusCode;
use thiserror::Error;

/// Any failure of an upstream search call.
///
/// Callers treat every variant the same way; the variants only keep the cause
/// readable in logs.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode search response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl QueryError {
    pub fn is_status(&self) -> bool {
        matches!(self, QueryError::Status { .. })
    }
}

/// Failure state shown to the user after a search action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The first page of a search failed. Nothing is shown.
    #[error("Looks like we cant find the user")]
    NoResults,

    /// A later page failed. Results already shown are kept.
    #[error("No more users to load")]
    NoMoreResults,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        let err = QueryError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: "Validation Failed".to_string(),
        };
        assert!(err.is_status());
        assert_eq!(
            err.to_string(),
            "API error: 422 Unprocessable Entity: Validation Failed"
        );
    }

    #[test]
    fn session_error_messages() {
        assert_eq!(
            SessionError::NoResults.to_string(),
            "Looks like we cant find the user"
        );
        assert_eq!(SessionError::NoMoreResults.to_string(), "No more users to load");
    }
}
