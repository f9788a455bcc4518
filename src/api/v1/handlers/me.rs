use axum::Json;

use crate::api::v1::dto::UserIdentity;
use crate::api::v1::extractors::Authenticated;

/// GET /me: echo the identity the access gate resolved for this request.
pub async fn me(Authenticated(identity): Authenticated<UserIdentity>) -> Json<UserIdentity> {
    Json(identity)
}
