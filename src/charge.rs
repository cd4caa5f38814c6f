//! The Charge Forwarder.
//!
//! This is the core of the service: validate an inbound charge request,
//! fetch a bearer token, reshape the request into the gateway schema, submit
//! it, and relay the outcome. Every failure mode is a [`ChargeError`] value;
//! the HTTP boundary only maps the result to a response, which keeps this
//! function independently testable.

use serde::Deserialize;

use crate::pixup::{
    Debtor, GatewayPayload, Metadata, PixupClient, PixupError, TokenClient, TokenResult,
};

/// Inbound charge-creation request.
///
/// Leaf fields deserialize as optional so that validation, not
/// deserialization, is what reports missing fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ChargeRequest {
    /// Who is being charged.
    pub payer: Option<Payer>,
    /// Charge amount.
    pub value: Option<f64>,
    /// Human-readable charge description.
    pub description: Option<String>,
    /// Optional caller-supplied callback URL.
    #[serde(rename = "postbackUrl")]
    pub postback_url: Option<String>,
}

/// Payer block of the inbound request.
#[derive(Debug, Clone, Deserialize)]
pub struct Payer {
    /// Payer email.
    pub email: Option<String>,
    /// Payer name.
    pub name: Option<String>,
}

/// A charge request that passed validation.
#[derive(Debug, Clone)]
pub struct ValidCharge {
    /// Payer email (doubles as the gateway correlation ID).
    pub email: String,
    /// Payer name.
    pub name: String,
    /// Charge amount.
    pub value: f64,
    /// Charge description.
    pub description: String,
    /// Caller-supplied callback URL, if any.
    pub postback_url: Option<String>,
}

/// Everything that can go wrong while forwarding a charge.
#[derive(Debug, thiserror::Error)]
pub enum ChargeError {
    /// A required input field is missing or empty. No network call was made.
    #[error("{0}")]
    Validation(String),

    /// The token service answered, but without a usable token.
    #[error("failed to obtain authentication token")]
    Auth {
        /// The token service's raw error payload.
        details: serde_json::Value,
    },

    /// The gateway rejected the charge.
    #[error("charge creation failed")]
    Gateway {
        /// HTTP status the gateway answered with.
        status: u16,
        /// The gateway's raw response body, unmodified.
        details: serde_json::Value,
    },

    /// Network failure or malformed response at either outbound hop.
    #[error("{0}")]
    Transport(String),
}

impl ChargeRequest {
    /// Validate required fields: `payer.email`, `payer.name`, `value`,
    /// `description`. Empty strings and a zero value count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ChargeError::Validation`] naming the missing fields.
    pub fn validate(self) -> Result<ValidCharge, ChargeError> {
        let mut missing = Vec::new();

        let email = self
            .payer
            .as_ref()
            .and_then(|p| p.email.clone())
            .filter(|e| !e.is_empty());
        if email.is_none() {
            missing.push("payer.email");
        }

        let name = self
            .payer
            .as_ref()
            .and_then(|p| p.name.clone())
            .filter(|n| !n.is_empty());
        if name.is_none() {
            missing.push("payer.name");
        }

        let value = self.value.filter(|v| *v != 0.0);
        if value.is_none() {
            missing.push("value");
        }

        let description = self.description.filter(|d| !d.is_empty());
        if description.is_none() {
            missing.push("description");
        }

        if !missing.is_empty() {
            return Err(ChargeError::Validation(format!(
                "missing required field: {}",
                missing.join(", ")
            )));
        }

        Ok(ValidCharge {
            email: email.unwrap_or_default(),
            name: name.unwrap_or_default(),
            value: value.unwrap_or_default(),
            description: description.unwrap_or_default(),
            postback_url: self.postback_url,
        })
    }
}

impl ValidCharge {
    /// Reshape into the gateway's `/v2/charge` schema.
    ///
    /// `external_id` and `metadata.email` are both the payer's email; no
    /// separate correlation identifier is generated. A missing postback URL
    /// falls back to the service's own webhook endpoint.
    #[must_use]
    pub fn into_payload(self, default_postback_url: &str) -> GatewayPayload {
        GatewayPayload {
            value: self.value,
            debtor: Debtor { name: self.name },
            metadata: Metadata {
                email: self.email.clone(),
            },
            external_id: self.email,
            postback_url: self
                .postback_url
                .unwrap_or_else(|| default_postback_url.to_string()),
        }
    }
}

/// Forward a charge-creation request to the gateway.
///
/// The two outbound calls are strictly sequential: the charge submission
/// cannot begin until the token fetch completes. No retry at either hop.
///
/// # Errors
///
/// Returns a [`ChargeError`] describing which step failed; collaborator
/// error payloads are carried along, never discarded.
pub async fn create_charge(
    request: ChargeRequest,
    tokens: &TokenClient,
    gateway: &PixupClient,
    default_postback_url: &str,
) -> Result<serde_json::Value, ChargeError> {
    // Validation is a hard gate: an invalid request never reaches the token
    // service or the gateway.
    let charge = request.validate()?;

    let token = match tokens.fetch_token().await {
        Ok(TokenResult::Token(token)) => token,
        Ok(TokenResult::Unusable(body)) => {
            tracing::error!(response = %body, "Token service returned no usable token");
            return Err(ChargeError::Auth { details: body });
        }
        Err(e) => return Err(ChargeError::Transport(e.to_string())),
    };

    let payload = charge.into_payload(default_postback_url);

    tracing::debug!(
        external_id = %payload.external_id,
        value = %payload.value,
        postback_url = %payload.postback_url,
        "Submitting charge to gateway"
    );

    match gateway.create_charge(&token, &payload).await {
        Ok(data) => Ok(data),
        Err(PixupError::Rejected { status, body }) => {
            tracing::warn!(status = %status, detail = %body, "Gateway rejected charge");
            Err(ChargeError::Gateway {
                status,
                details: body,
            })
        }
        Err(e) => Err(ChargeError::Transport(e.to_string())),
    }
}
