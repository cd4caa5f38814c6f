//! Token service handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::pixup::PixupError;
use crate::state::AppState;

/// Token service response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Bearer token for the gateway.
    pub token: String,
}

/// Issue a gateway bearer token (`GET /pixup-token`).
///
/// Exchanges the configured client credentials at PixUp's OAuth endpoint.
/// Callers (the Charge Forwarder among them) only see the contract:
/// `{ token }` or an error object.
pub async fn issue_token(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TokenResponse>, ApiError> {
    let grant = state.gateway.oauth_token().await.map_err(|e| match e {
        PixupError::Configuration(msg) => ApiError::Unavailable(msg),
        PixupError::Rejected { status, body } => {
            tracing::error!(status = %status, response = %body, "PixUp refused token grant");
            ApiError::Unavailable("failed to obtain gateway token".into())
        }
        PixupError::Http(err) => ApiError::Unavailable(err.to_string()),
    })?;

    Ok(Json(TokenResponse {
        token: grant.access_token,
    }))
}
