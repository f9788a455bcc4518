//! Upstream token extraction: runs before the gate and leaves an [`AccessTokenFeature`]
//! in the request extensions.
//!
//! A non-blank `access-token` cookie wins; `Authorization: Bearer <token>` is the fallback
//! for non-browser clients.

use axum::{
    Router,
    extract::Request,
    http::{HeaderMap, header},
    middleware::{self, Next},
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

pub const ACCESS_TOKEN_COOKIE: &str = "access-token";

/// Raw token found on the request, if any. Presence of the feature itself means
/// extraction ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessTokenFeature {
    pub access_token: Option<String>,
}

impl AccessTokenFeature {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let jar = CookieJar::from_headers(headers);
        let access_token = jar
            .get(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.trim().is_empty())
            .or_else(|| bearer_token(headers));

        Self { access_token }
    }

    /// The token unless it is absent, empty or whitespace-only.
    pub fn token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
}

pub async fn extract_access_token(mut req: Request, next: Next) -> Response {
    let feature = AccessTokenFeature::from_headers(req.headers());
    req.extensions_mut().insert(feature);

    next.run(req).await
}

/// Apply the extraction stage to every route of `router`.
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn(extract_access_token))
}
