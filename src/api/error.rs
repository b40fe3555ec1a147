//! API Error Types
//!
//! Failures talking to the GlucoVision backend. Transport and parse problems
//! are kept apart from errors the server reports in its JSON `error` field,
//! which are shown to the user verbatim.

use thiserror::Error;

/// Client-side API error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never completed (offline, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),

    /// Request body could not be built
    #[error("Request build error: {0}")]
    Request(String),

    /// Body was not JSON or did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// Application error carried in the response body
    #[error("{0}")]
    Server(String),

    /// Non-2xx status without an error body
    #[error("Request failed with status {0}")]
    Status(u16),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Request(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Result alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_displays_verbatim() {
        let err = ApiError::Server("No meals provided".to_string());
        assert_eq!(err.to_string(), "No meals provided");
    }

    #[test]
    fn test_transport_errors_are_prefixed() {
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(ApiError::Status(502).to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_json_error_converts_to_decode() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
