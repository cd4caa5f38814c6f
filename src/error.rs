//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::charge::ChargeError;

/// API error type.
///
/// This is the single place response codes and wire bodies are decided; the
/// body shapes are part of the service contract and must stay flat
/// (`{error}`, `{error, details}`, `{error, detalhe}`).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request - invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The auth provider refused the credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// No usable bearer token could be obtained.
    #[error("failed to obtain authentication token")]
    TokenUnavailable,

    /// The gateway rejected the charge.
    #[error("charge creation failed")]
    ChargeRejected {
        /// The gateway's raw response body.
        details: serde_json::Value,
    },

    /// A required collaborator is missing or refused to serve us.
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// An upstream service could not be reached.
    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    /// Unexpected failure; the message rides in the `detalhe` field.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, json!({ "error": msg })),
            Self::TokenUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "failed to obtain authentication token" }),
            ),
            Self::ChargeRejected { details } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "charge creation failed", "details": details }),
            ),
            Self::Unavailable(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": msg }),
            ),
            Self::UpstreamUnreachable(msg) => (StatusCode::BAD_GATEWAY, json!({ "error": msg })),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error", "detalhe": msg }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ChargeError> for ApiError {
    fn from(err: ChargeError) -> Self {
        match err {
            ChargeError::Validation(msg) => Self::BadRequest(msg),
            // The raw provider payload was already logged where it surfaced.
            ChargeError::Auth { .. } => Self::TokenUnavailable,
            ChargeError::Gateway { details, .. } => Self::ChargeRejected { details },
            ChargeError::Transport(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let api: ApiError = ChargeError::Validation("missing required field: value".into()).into();
        assert!(matches!(api, ApiError::BadRequest(_)));
    }

    #[test]
    fn gateway_rejection_keeps_details() {
        let api: ApiError = ChargeError::Gateway {
            status: 400,
            details: json!({ "message": "invalid value" }),
        }
        .into();
        let ApiError::ChargeRejected { details } = api else {
            panic!("expected ChargeRejected");
        };
        assert_eq!(details["message"], "invalid value");
    }

    #[test]
    fn transport_maps_to_internal() {
        let api: ApiError = ChargeError::Transport("connection refused".into()).into();
        assert!(matches!(api, ApiError::Internal(_)));
    }
}
