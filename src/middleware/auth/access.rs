//! access token verification -> `Identity<I>` in the request extensions
//!
//! - Endpoint without the "authenticate" flag: pass through untouched.
//! - No usable token: 401 "not provided".
//! - Token refused by the verifier: 401 "invalid" (reason is not disclosed).
//! - Otherwise the identity is published for handlers and the request continues.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::api::v1::extractors::Identity;
use crate::error::AuthRejection;
use crate::middleware::auth::{router::EndpointMetadata, token::AccessTokenFeature};
use crate::services::auth::JwtAuthentication;

/// Outcome of checking one request's token. Only `Valid` carries an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification<I> {
    Valid(I),
    Invalid,
    Missing,
}

pub fn verify_request<I>(
    auth: &JwtAuthentication<I>,
    feature: Option<&AccessTokenFeature>,
) -> Verification<I>
where
    I: DeserializeOwned + Clone,
{
    let Some(token) = feature.and_then(AccessTokenFeature::token) else {
        return Verification::Missing;
    };

    match auth.validate(token) {
        Some(identity) => Verification::Valid(identity),
        None => Verification::Invalid,
    }
}

pub async fn authenticate<I>(
    State(auth): State<Arc<JwtAuthentication<I>>>,
    mut req: Request,
    next: Next,
) -> Response
where
    I: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let requires_auth = req
        .extensions()
        .get::<EndpointMetadata>()
        .is_some_and(|endpoint| endpoint.authenticate);
    if !requires_auth {
        return next.run(req).await;
    }

    let verification = verify_request(&auth, req.extensions().get::<AccessTokenFeature>());

    let rejection = match verification {
        Verification::Valid(identity) => {
            // middleware -> extractor hand-off
            req.extensions_mut().insert(Identity(identity));
            return next.run(req).await;
        }
        Verification::Missing => AuthRejection::Missing,
        Verification::Invalid => AuthRejection::Invalid,
    };

    tracing::warn!(
        reason = rejection.reason(),
        method = %req.method(),
        path = %req.uri().path(),
        "access token rejected"
    );

    rejection.into_response()
}
