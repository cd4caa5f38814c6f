//! PixUp integration.
//!
//! PixUp is the payment gateway that actually issues PIX charges. This
//! module carries:
//! - The gateway client (`/v2/charge`, `/v2/oauth/token`)
//! - The token-service client the Charge Forwarder pulls bearer tokens from
//! - The wire types for the charge payload

pub mod client;
pub mod token;
pub mod types;

pub use client::{PixupClient, PixupCredentials, PixupError};
pub use token::{TokenClient, TokenResult};
pub use types::*;
