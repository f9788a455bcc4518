//! Route registration with an explicit "authenticate" flag.
//!
//! Each route gets two layers: the endpoint metadata (outer) and the access gate (inner).
//! Routes opt in; anything registered with [`AuthRouter::route`] stays public.

use std::sync::Arc;

use axum::{Extension, Router, middleware, routing::MethodRouter};
use serde::de::DeserializeOwned;

use crate::middleware::auth::access::authenticate;
use crate::services::auth::JwtAuthentication;

/// Per-route metadata the gate consults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndpointMetadata {
    pub authenticate: bool,
}

impl EndpointMetadata {
    pub fn public() -> Self {
        Self {
            authenticate: false,
        }
    }

    pub fn authenticated() -> Self {
        Self { authenticate: true }
    }
}

/// Builds a `Router` whose routes all run through the access gate for identity type `I`.
///
/// ```ignore
/// let v1 = AuthRouter::new(state.auth.clone())
///     .route("/health", get(health))
///     .authenticated_route("/me", get(me))
///     .into_router();
/// ```
pub struct AuthRouter<I, S = ()> {
    router: Router<S>,
    auth: Arc<JwtAuthentication<I>>,
}

impl<I, S> AuthRouter<I, S>
where
    I: DeserializeOwned + Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
{
    pub fn new(auth: Arc<JwtAuthentication<I>>) -> Self {
        Self {
            router: Router::new(),
            auth,
        }
    }

    pub fn route(self, path: &str, method_router: MethodRouter<S>) -> Self {
        self.register(path, method_router, EndpointMetadata::public())
    }

    pub fn authenticated_route(self, path: &str, method_router: MethodRouter<S>) -> Self {
        self.register(path, method_router, EndpointMetadata::authenticated())
    }

    fn register(
        mut self,
        path: &str,
        method_router: MethodRouter<S>,
        metadata: EndpointMetadata,
    ) -> Self {
        // Layers wrap outward: metadata must be in the extensions before the gate reads it.
        let gated: MethodRouter<S> = method_router.layer(middleware::from_fn_with_state(
            self.auth.clone(),
            authenticate::<I>,
        ));
        let gated: MethodRouter<S> = gated.layer(Extension(metadata));

        self.router = self.router.route(path, gated);
        self
    }

    pub fn into_router(self) -> Router<S> {
        self.router
    }
}
