//! API handlers.

pub mod charges;
pub mod health;
pub mod login;
pub mod token;
pub mod webhooks;
