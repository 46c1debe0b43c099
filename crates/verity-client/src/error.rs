//! Verification client error types.

use std::time::Duration;

use thiserror::Error;

/// Errors from a call to the backend verification service.
///
/// The transport group (`Transport`, `Timeout`, `Api`, `RateLimited`) means
/// the backend could not be asked or refused to answer. The malformed group
/// (`MalformedResponse`, `UnknownAssessmentVariant`) means it answered with
/// something outside the contract; the raw body is kept for diagnosis.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The configured backend URL cannot be used.
    #[error("invalid backend endpoint: {0}")]
    InvalidEndpoint(String),

    /// Connection, protocol, or body transfer failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request did not complete within the configured bound.
    #[error("backend request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The backend returned a non-success status code.
    #[error("backend error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The backend returned 429 Too Many Requests.
    #[error("backend rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response body is not the documented shape.
    #[error("malformed backend response: {reason}")]
    MalformedResponse {
        reason: String,
        /// Response body as received.
        raw: String,
    },

    /// An assessment outside `true`, `false`, `unclear`, `notfound`.
    #[error("malformed backend response: unknown assessment variant '{value}'")]
    UnknownAssessmentVariant {
        value: String,
        /// Response body as received.
        raw: String,
    },
}

impl VerificationError {
    /// The backend could not be reached or refused the request.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Timeout(_) | Self::Api { .. } | Self::RateLimited { .. }
        )
    }

    /// The backend answered outside the response contract.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedResponse { .. } | Self::UnknownAssessmentVariant { .. }
        )
    }

    /// Whether repeating the same request later may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(error) => error.is_connect() || error.is_timeout() || error.is_request(),
            Self::Timeout(_) | Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::InvalidEndpoint(_)
            | Self::MalformedResponse { .. }
            | Self::UnknownAssessmentVariant { .. } => false,
        }
    }

    /// Raw response body for malformed responses.
    #[must_use]
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::MalformedResponse { raw, .. } | Self::UnknownAssessmentVariant { raw, .. } => {
                Some(raw)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_disjoint() {
        let errors = [
            VerificationError::Timeout(Duration::from_secs(1)),
            VerificationError::Api {
                status: 502,
                message: String::new(),
            },
            VerificationError::RateLimited {
                retry_after_secs: 5,
            },
            VerificationError::MalformedResponse {
                reason: "missing field".into(),
                raw: "{}".into(),
            },
            VerificationError::UnknownAssessmentVariant {
                value: "maybe".into(),
                raw: "{}".into(),
            },
        ];
        for error in &errors {
            assert_ne!(error.is_transport(), error.is_malformed(), "{error}");
        }
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let error = VerificationError::Api {
            status: 400,
            message: "bad url".into(),
        };
        assert!(!error.is_retryable());
        let error = VerificationError::Api {
            status: 503,
            message: String::new(),
        };
        assert!(error.is_retryable());
    }

    #[test]
    fn malformed_keeps_raw_body() {
        let error = VerificationError::UnknownAssessmentVariant {
            value: "maybe".into(),
            raw: r#"{"url":"x"}"#.into(),
        };
        assert_eq!(error.raw_response(), Some(r#"{"url":"x"}"#));
        assert!(!error.is_retryable());
        assert!(error.to_string().contains("maybe"));
    }
}
