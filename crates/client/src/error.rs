//! Client error types.

use thiserror::Error;

/// Errors returned by [`ApiClient`](crate::ApiClient) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, DNS, TLS, timeout.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success response that maps to no more specific variant.
    #[error("server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// 401 from the backend.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// 403 from the backend. The body says whether the account is pending
    /// approval or deactivated.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// 404 from the backend.
    #[error("not found: {0}")]
    NotFound(String),

    /// 400 from the backend.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Response body did not match the expected shape.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client was misconfigured before any request went out.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Map an HTTP status to the matching error variant.
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            status => Self::ServerError { status, message },
        }
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn maps_statuses_to_variants() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, "bad password".to_string()),
            ClientError::AuthenticationFailed(message) if message == "bad password"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::FORBIDDEN, "pending approval".to_string()),
            ClientError::Forbidden(message) if message == "pending approval"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, "no such row".to_string()),
            ClientError::NotFound(message) if message == "no such row"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_REQUEST, "nope".to_string()),
            ClientError::BadRequest(message) if message == "nope"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
            ClientError::ServerError { status: 500, message } if message == "boom"
        ));
    }
}
