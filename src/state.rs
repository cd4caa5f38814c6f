//! Application state.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::pixup::{PixupClient, PixupCredentials, TokenClient};
use crate::supabase::SupabaseClient;

/// Application state shared across handlers.
///
/// Every collaborator client is constructed here, once, and injected into
/// handlers through axum's `State` extractor - no module-level singletons.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Token service client used by the Charge Forwarder.
    pub tokens: TokenClient,

    /// PixUp gateway client.
    pub gateway: PixupClient,

    /// Supabase auth client for the login flow (optional).
    pub supabase: Option<Arc<SupabaseClient>>,

    /// Default postback URL, resolved once at startup.
    pub postback_url: String,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        let tokens = TokenClient::new(config.token_service_url.as_str());

        // OAuth credentials are only needed by the /pixup-token route;
        // charge submission authenticates with a per-request bearer token.
        let credentials = config
            .pixup_client_id
            .clone()
            .zip(config.pixup_client_secret.clone())
            .map(|(client_id, client_secret)| PixupCredentials {
                client_id,
                client_secret,
            });

        if credentials.is_none() {
            tracing::warn!("PixUp credentials not configured - /pixup-token will refuse requests");
        }

        let gateway = PixupClient::new(config.pixup_api_url.as_str(), credentials);

        let supabase = config
            .supabase_url
            .as_ref()
            .zip(config.supabase_anon_key.as_ref())
            .map(|(url, key)| {
                tracing::info!(supabase_url = %url, "Supabase auth enabled");
                Arc::new(SupabaseClient::new(url.as_str(), key.as_str()))
            });

        if supabase.is_none() {
            tracing::warn!("Supabase not configured - login will not be available");
        }

        let postback_url = config.default_postback_url();

        Self {
            config,
            tokens,
            gateway,
            supabase,
            postback_url,
        }
    }

    /// Check if the auth provider is configured.
    #[must_use]
    pub fn has_supabase(&self) -> bool {
        self.supabase.is_some()
    }
}
