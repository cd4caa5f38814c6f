//! Service configuration.

use serde::Deserialize;
use std::path::Path;

/// Service configuration loaded from environment variables.
///
/// Every URL the service talks to is resolved here, at startup. Nothing is
/// derived from the inbound request's host.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Publicly reachable base URL of this service, used to build the
    /// default webhook postback URL (default: `http://localhost:8080`).
    pub public_base_url: String,

    /// Base URL of the token service (default: `http://localhost:8080`,
    /// i.e. this service's own `/pixup-token` route).
    pub token_service_url: String,

    /// PixUp API base URL (default: `<https://api.pixupbr.com>`).
    pub pixup_api_url: String,

    /// PixUp OAuth client ID (optional).
    pub pixup_client_id: Option<String>,

    /// PixUp OAuth client secret (optional).
    pub pixup_client_secret: Option<String>,

    /// Supabase project URL (optional).
    pub supabase_url: Option<String>,

    /// Supabase anon API key (optional).
    pub supabase_anon_key: Option<String>,

    /// Frontend URL for post-login redirects.
    pub frontend_url: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

/// PixUp secrets file structure.
#[derive(Debug, Deserialize)]
struct PixupSecrets {
    client_id: String,
    client_secret: String,
    #[serde(default)]
    api_url: Option<String>,
}

/// Supabase secrets file structure.
#[derive(Debug, Deserialize)]
struct SupabaseSecrets {
    url: String,
    anon_key: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables and secrets files.
    #[must_use]
    pub fn from_env() -> Self {
        // Try to load PixUp secrets from file first, then fall back to env vars
        let (pixup_api_url, pixup_client_id, pixup_client_secret) = load_pixup_secrets();

        // Try to load Supabase secrets from file first, then fall back to env vars
        let (supabase_url, supabase_anon_key) = load_supabase_secrets();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            token_service_url: std::env::var("TOKEN_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            pixup_api_url,
            pixup_client_id,
            pixup_client_secret,
            supabase_url,
            supabase_anon_key,
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024), // 1MB
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    /// The postback URL handed to the gateway when the caller supplies none.
    #[must_use]
    pub fn default_postback_url(&self) -> String {
        format!(
            "{}/pixup-webhook",
            self.public_base_url.trim_end_matches('/')
        )
    }
}

/// Load PixUp secrets from file or environment.
fn load_pixup_secrets() -> (String, Option<String>, Option<String>) {
    let secret_paths = [
        ".secrets/pixup.json",
        "pix-charge-service/.secrets/pixup.json",
        "../.secrets/pixup.json",
    ];

    for path in &secret_paths {
        if let Ok(secrets) = load_secrets_file::<PixupSecrets>(path) {
            tracing::info!(path = %path, "Loaded PixUp secrets from file");
            return (
                secrets
                    .api_url
                    .unwrap_or_else(|| "https://api.pixupbr.com".into()),
                Some(secrets.client_id),
                Some(secrets.client_secret),
            );
        }
    }

    // Fall back to environment variables
    tracing::debug!("PixUp secrets file not found, using environment variables");
    (
        std::env::var("PIXUP_API_URL").unwrap_or_else(|_| "https://api.pixupbr.com".into()),
        std::env::var("PIXUP_CLIENT_ID").ok(),
        std::env::var("PIXUP_CLIENT_SECRET").ok(),
    )
}

/// Load Supabase secrets from file or environment.
fn load_supabase_secrets() -> (Option<String>, Option<String>) {
    let secret_paths = [
        ".secrets/supabase.json",
        "pix-charge-service/.secrets/supabase.json",
        "../.secrets/supabase.json",
    ];

    for path in &secret_paths {
        if let Ok(secrets) = load_secrets_file::<SupabaseSecrets>(path) {
            tracing::info!(path = %path, "Loaded Supabase secrets from file");
            return (Some(secrets.url), Some(secrets.anon_key));
        }
    }

    // Fall back to environment variables
    tracing::debug!("Supabase secrets file not found, using environment variables");
    (
        std::env::var("SUPABASE_URL").ok(),
        std::env::var("SUPABASE_ANON_KEY").ok(),
    )
}

/// Load secrets from a JSON file.
fn load_secrets_file<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, std::io::Error> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Secrets file not found",
        ));
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            public_base_url: "http://localhost:8080".into(),
            token_service_url: "http://localhost:8080".into(),
            pixup_api_url: "https://api.pixupbr.com".into(),
            pixup_client_id: None,
            pixup_client_secret: None,
            supabase_url: None,
            supabase_anon_key: None,
            frontend_url: "http://localhost:3000".into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_postback_url_joins_webhook_path() {
        let config = ServiceConfig {
            public_base_url: "https://pay.example.com".into(),
            ..ServiceConfig::default()
        };
        assert_eq!(
            config.default_postback_url(),
            "https://pay.example.com/pixup-webhook"
        );
    }

    #[test]
    fn default_postback_url_trims_trailing_slash() {
        let config = ServiceConfig {
            public_base_url: "https://pay.example.com/".into(),
            ..ServiceConfig::default()
        };
        assert_eq!(
            config.default_postback_url(),
            "https://pay.example.com/pixup-webhook"
        );
    }
}
