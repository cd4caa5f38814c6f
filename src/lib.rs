//! PIX Charge Service.
//!
//! A thin translation layer in front of the PixUp payment gateway:
//!
//! - Charge creation: validate an inbound request, fetch a bearer token,
//!   reshape into the gateway's `/v2/charge` schema, relay the result
//! - Token issuance for the gateway (OAuth client credentials)
//! - Login relay to the Supabase auth provider
//! - Postback target for asynchronous charge-status callbacks
//!
//! The service holds no state across requests: no persistence, no retries,
//! no caching. Each charge request triggers exactly two sequential outbound
//! calls (token fetch, charge submission).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Webhook handlers need async for consistency

pub mod charge;
pub mod config;
pub mod error;
pub mod handlers;
pub mod pixup;
pub mod routes;
pub mod state;
pub mod supabase;

pub use charge::{ChargeError, ChargeRequest};
pub use config::ServiceConfig;
pub use error::ApiError;
pub use pixup::{PixupClient, PixupCredentials, TokenClient};
pub use routes::create_router;
pub use state::AppState;
pub use supabase::SupabaseClient;
