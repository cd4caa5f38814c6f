//! Token service client.
//!
//! The Charge Forwarder never talks OAuth itself; it fetches a ready-made
//! bearer token from the token service (`GET /pixup-token`) and only depends
//! on that contract: `{ "token": "..." }` on success, an arbitrary error
//! object otherwise.

use reqwest::Client;
use std::time::Duration;

/// Outcome of a token fetch: either a usable token or the provider's raw
/// error payload, kept for diagnostics.
#[derive(Debug, Clone)]
pub enum TokenResult {
    /// A non-empty bearer token.
    Token(String),
    /// The raw response body that lacked a usable `token` field.
    Unusable(serde_json::Value),
}

/// Token service client.
#[derive(Debug, Clone)]
pub struct TokenClient {
    client: Client,
    base_url: String,
}

impl TokenClient {
    /// Create a new token client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the token service (e.g.,
    ///   `"http://localhost:8080"`)
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch a fresh bearer token. No caching, no expiry tracking, no retry.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` when the token service is unreachable or
    /// answers with a non-JSON body.
    pub async fn fetch_token(&self) -> Result<TokenResult, reqwest::Error> {
        let url = format!("{}/pixup-token", self.base_url);

        let body: serde_json::Value = self.client.get(&url).send().await?.json().await?;

        match body.get("token").and_then(|t| t.as_str()) {
            Some(token) if !token.is_empty() => Ok(TokenResult::Token(token.to_string())),
            _ => Ok(TokenResult::Unusable(body)),
        }
    }
}
