//! PixUp gateway client implementation.

use reqwest::Client;
use std::time::Duration;

use super::types::{GatewayPayload, TokenGrant};

/// Error type for PixUp gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum PixupError {
    /// HTTP request failed or the response body could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway rejected the request; the raw response body is preserved.
    #[error("PixUp API error: HTTP {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body, passed through unmodified.
        body: serde_json::Value,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// OAuth client credentials for the PixUp API.
#[derive(Debug, Clone)]
pub struct PixupCredentials {
    /// OAuth client ID.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
}

/// PixUp API client.
#[derive(Debug, Clone)]
pub struct PixupClient {
    client: Client,
    base_url: String,
    credentials: Option<PixupCredentials>,
}

impl PixupClient {
    /// Create a new PixUp client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - PixUp API URL (e.g., `"https://api.pixupbr.com"`)
    /// * `credentials` - OAuth client credentials, required only for
    ///   [`Self::oauth_token`]
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn new(base_url: impl Into<String>, credentials: Option<PixupCredentials>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Exchange client credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`PixupError::Configuration`] if no credentials are
    /// configured, [`PixupError::Rejected`] if PixUp refuses the grant.
    pub async fn oauth_token(&self) -> Result<TokenGrant, PixupError> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            PixupError::Configuration("PixUp client credentials not configured".into())
        })?;

        let url = format!("{}/v2/oauth/token", self.base_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "grant_type": "client_credentials" }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.json().await.unwrap_or_default();
        Err(PixupError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    /// Create a charge on PixUp.
    ///
    /// Issues a single POST to `/v2/charge` with the bearer token. No retry;
    /// the only idempotency the gateway can infer comes from
    /// `external_id` inside the payload.
    ///
    /// # Errors
    ///
    /// Returns [`PixupError::Rejected`] with the gateway's raw body when the
    /// charge is refused, [`PixupError::Http`] on transport or decode
    /// failure.
    pub async fn create_charge(
        &self,
        token: &str,
        payload: &GatewayPayload,
    ) -> Result<serde_json::Value, PixupError> {
        let url = format!("{}/v2/charge", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        // The gateway's own error detail is relayed unmodified, never
        // rewritten or swallowed.
        let body = response.json().await?;
        Err(PixupError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = PixupClient::new("https://api.pixupbr.com", None);
        assert_eq!(client.base_url, "https://api.pixupbr.com");
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = PixupClient::new("https://api.pixupbr.com/", None);
        assert_eq!(client.base_url, "https://api.pixupbr.com");
    }
}
