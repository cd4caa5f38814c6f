//! Supabase auth client.
//!
//! The login flow is UI glue: credentials go to Supabase's password
//! sign-in operation and the outcome is relayed as-is. No credential
//! storage, no rate limiting, no retry.

use reqwest::Client;
use std::time::Duration;

/// Error type for Supabase auth operations.
#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Supabase refused the credentials.
    #[error("sign-in refused: {message}")]
    Refused {
        /// HTTP status code.
        status: u16,
        /// The provider's error message, verbatim.
        message: String,
        /// Raw response body.
        body: serde_json::Value,
    },
}

/// Supabase auth API client.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    /// Create a new Supabase client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Supabase project URL (e.g.,
    ///   `"https://<project>.supabase.co"`)
    /// * `anon_key` - The project's anon API key
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Sign a user in with email and password.
    ///
    /// Returns the raw session object Supabase issues (access token, refresh
    /// token, user record).
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError::Refused`] with the provider's message when
    /// the credentials are rejected, [`SupabaseError::Http`] on transport
    /// failure.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<serde_json::Value, SupabaseError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body: serde_json::Value = response.json().await.unwrap_or_default();
        Err(SupabaseError::Refused {
            status: status.as_u16(),
            message: error_message(&body),
            body,
        })
    }
}

/// Pull the human-readable message out of a Supabase error body.
///
/// GoTrue has answered with `error_description`, `msg`, and `message`
/// depending on version; fall through them in that order.
fn error_message(body: &serde_json::Value) -> String {
    for key in ["error_description", "msg", "message", "error"] {
        if let Some(message) = body.get(key).and_then(|v| v.as_str()) {
            return message.to_string();
        }
    }
    "sign-in failed".to_string()
}
