use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::Identity;

/// Handler-side access to the identity published by the access gate.
/// Missing identity means the route was not registered as authenticated: 401.
#[derive(Debug, Clone)]
pub struct Authenticated<I>(pub I);

impl<S, I> FromRequestParts<S> for Authenticated<I>
where
    S: Send + Sync,
    I: Clone + Send + Sync + 'static,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity<I>>()
            .map(|identity| Authenticated(identity.0.clone()))
            .ok_or(AppError::Unauthorized)
    }
}
