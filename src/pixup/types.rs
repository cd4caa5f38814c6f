//! PixUp API types.

use serde::{Deserialize, Serialize};

/// Charge creation payload for PixUp `/v2/charge`.
///
/// Field names and nesting must match the gateway schema exactly.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayPayload {
    /// Charge amount.
    pub value: f64,
    /// Who the charge is issued against.
    pub debtor: Debtor,
    /// Free-form metadata attached to the charge.
    pub metadata: Metadata,
    /// Correlation ID echoed back in callbacks (the payer's email).
    pub external_id: String,
    /// Where the gateway delivers status callbacks.
    #[serde(rename = "postbackUrl")]
    pub postback_url: String,
}

/// Debtor block of the charge payload.
#[derive(Debug, Clone, Serialize)]
pub struct Debtor {
    /// Payer name.
    pub name: String,
}

/// Metadata block of the charge payload.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    /// Payer email.
    pub email: String,
}

/// OAuth token grant returned by PixUp `/v2/oauth/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    /// Bearer token for subsequent API calls.
    pub access_token: String,
    /// Token type (always "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds. Tokens are fetched fresh per request, so this is
    /// informational only.
    #[serde(default)]
    pub expires_in: Option<u64>,
}
