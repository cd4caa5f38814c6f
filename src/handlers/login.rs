//! Login handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use crate::supabase::SupabaseError;

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// The provider session, raw (access token, refresh token, user record).
    pub session: serde_json::Value,
    /// Where the authenticated user should land.
    pub redirect_to: String,
}

/// Sign in with email and password (`POST /login`).
///
/// Credentials are forwarded to the auth provider; on refusal the provider's
/// error message is relayed verbatim.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let supabase = state
        .supabase
        .as_ref()
        .ok_or_else(|| ApiError::Unavailable("auth provider not configured".into()))?;

    match supabase.sign_in_with_password(&body.email, &body.password).await {
        Ok(session) => {
            tracing::info!(email = %body.email, "User signed in");
            Ok(Json(LoginResponse {
                session,
                redirect_to: format!(
                    "{}/dashboard",
                    state.config.frontend_url.trim_end_matches('/')
                ),
            }))
        }
        Err(SupabaseError::Refused {
            status, message, ..
        }) => {
            tracing::warn!(email = %body.email, status = %status, "Sign-in refused");
            Err(ApiError::Unauthorized(message))
        }
        Err(SupabaseError::Http(err)) => Err(ApiError::UpstreamUnreachable(err.to_string())),
    }
}
