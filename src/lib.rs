//! Request-time access token verification for axum services.
//!
//! - [`services::auth::JwtAuthentication`] validates a signed token into a caller-defined identity.
//! - [`middleware::auth::AuthRouter`] registers routes with an explicit "authenticate" flag and
//!   runs the access gate in front of every one of them.
//! - [`api::v1::extractors::Authenticated`] hands the resolved identity to handlers.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
