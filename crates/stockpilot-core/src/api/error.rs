use thiserror::Error;

use crate::auth::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unauthorized - session expired or invalid")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    #[error("Request rejected with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    NetworkError(#[source] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Credential storage failed: {0}")]
    Storage(#[from] StoreError),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::NetworkError(err)
        }
    }
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut cut = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..cut], body.len())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(truncated),
            404 => ApiError::NotFound(truncated),
            429 => ApiError::RateLimited,
            code @ 500..=599 => ApiError::ServerError {
                status: code,
                body: truncated,
            },
            code => ApiError::Status {
                status: code,
                body: truncated,
            },
        }
    }

    /// HTTP status the server answered with, if the failure came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::AccessDenied(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::RateLimited => Some(429),
            ApiError::ServerError { status, .. } | ApiError::Status { status, .. } => Some(*status),
            ApiError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_mapping() {
        assert!(ApiError::from_status(StatusCode::UNAUTHORIZED, "").is_unauthorized());
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, "no"),
            ApiError::AccessDenied(b) if b == "no"
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "gone"),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            ApiError::RateLimited
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, "upstream"),
            ApiError::ServerError { status: 502, .. }
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_REQUEST, "bad"),
            ApiError::Status { status: 400, .. }
        ));
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::from_status(StatusCode::CONFLICT, "").status(), Some(409));
        assert_eq!(ApiError::Timeout.status(), None);
        assert_eq!(ApiError::from_status(StatusCode::BAD_GATEWAY, "").status(), Some(502));
        assert_eq!(ApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, "").status(), Some(503));
    }

    #[test]
    fn test_truncate_body() {
        let short = "short body";
        assert_eq!(ApiError::truncate_body(short), short);

        let long = "x".repeat(MAX_ERROR_BODY_LENGTH + 100);
        let truncated = ApiError::truncate_body(&long);
        assert!(truncated.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
        assert!(truncated.contains("truncated, 600 total bytes"));
    }

    #[test]
    fn test_truncate_body_respects_char_boundaries() {
        // Multi-byte characters straddling the cut point must not panic
        let long = "가".repeat(MAX_ERROR_BODY_LENGTH);
        let truncated = ApiError::truncate_body(&long);
        assert!(truncated.contains("truncated"));
    }
}
