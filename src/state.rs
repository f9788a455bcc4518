/*
 * Responsibility
 * - shared context attached to the Router (AppState)
 * - Clone is cheap (Arc inside)
 */
use std::sync::Arc;

use crate::api::v1::dto::UserIdentity;
use crate::services::auth::JwtAuthentication;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<JwtAuthentication<UserIdentity>>,
}

impl AppState {
    pub fn new(auth: Arc<JwtAuthentication<UserIdentity>>) -> Self {
        Self { auth }
    }
}
