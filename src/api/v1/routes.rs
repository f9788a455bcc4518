/*
 * Responsibility
 * - v1 URL structure
 * - which routes require an access token is decided here (authenticated_route)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, me::me};
use crate::middleware::auth::AuthRouter;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    AuthRouter::new(state.auth.clone())
        .route("/health", get(health))
        .authenticated_route("/me", get(me))
        .into_router()
}
