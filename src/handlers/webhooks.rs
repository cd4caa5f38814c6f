//! Webhook handlers for PixUp status callbacks.

use axum::Json;
use serde::Serialize;

/// Webhook response.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    /// Whether the webhook was processed.
    pub received: bool,
}

/// Handle PixUp postback callbacks (`POST /pixup-webhook`).
///
/// This is the default postback target handed to the gateway at charge
/// creation. Payment state is not managed here; callbacks are acknowledged
/// and logged for operators.
pub async fn pixup_webhook(Json(body): Json<serde_json::Value>) -> Json<WebhookResponse> {
    let external_id = body
        .get("external_id")
        .or_else(|| body.get("requestBody").and_then(|r| r.get("external_id")))
        .and_then(|v| v.as_str());

    let status = body
        .get("status")
        .or_else(|| body.get("requestBody").and_then(|r| r.get("status")))
        .and_then(|v| v.as_str());

    tracing::info!(
        external_id = ?external_id,
        status = ?status,
        "Received PixUp webhook"
    );

    if external_id.is_none() && status.is_none() {
        tracing::debug!(body = %body, "Unrecognized PixUp webhook shape");
    }

    Json(WebhookResponse { received: true })
}
