//! Charge creation handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::charge::{self, ChargeRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// Successful charge creation response.
#[derive(Debug, Serialize)]
pub struct ChargeResponse {
    /// Always `true` on this path.
    pub success: bool,
    /// The gateway's raw response body.
    pub data: serde_json::Value,
}

/// Create a PIX charge (`POST /criar-pix`).
///
/// The handler only maps the forwarder's result onto the HTTP surface; the
/// decision logic lives in [`charge::create_charge`].
pub async fn create_charge(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChargeRequest>, JsonRejection>,
) -> Result<Json<ChargeResponse>, ApiError> {
    // A body that doesn't parse is indistinguishable from any other
    // unexpected failure to the caller: same shape as a transport error.
    let Json(request) = payload.map_err(|e| ApiError::Internal(e.body_text()))?;

    tracing::info!(
        value = ?request.value,
        payer_email = ?request.payer.as_ref().and_then(|p| p.email.as_deref()),
        "Creating PIX charge"
    );

    let data = charge::create_charge(
        request,
        &state.tokens,
        &state.gateway,
        &state.postback_url,
    )
    .await?;

    tracing::info!("PIX charge created");

    Ok(Json(ChargeResponse {
        success: true,
        data,
    }))
}
