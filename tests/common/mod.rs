#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use chrono::{DateTime, TimeDelta, Utc};
use commons_auth::app::build_router;
use commons_auth::config::HttpConfig;
use commons_auth::services::auth::{JwtAuthentication, SigningConfig};
use commons_auth::state::AppState;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_for_testing_purposes";
pub const LIFESPAN: Duration = Duration::from_secs(15 * 60);

pub const MISSING_MESSAGE: &str = "Access token was not provided in \"access-token\" HTTP Cookie.";
pub const INVALID_MESSAGE: &str = "Access token was invalid.";

pub fn signing_config() -> SigningConfig {
    SigningConfig::new(SECRET, LIFESPAN).unwrap()
}

pub fn jwt_authentication<I>() -> Arc<JwtAuthentication<I>>
where
    I: DeserializeOwned + Clone,
{
    Arc::new(JwtAuthentication::new(&signing_config()))
}

pub fn setup_test_app() -> Router {
    let state = AppState::new(jwt_authentication());
    build_router(state, &HttpConfig::default())
}

/// Sign `identity` (a JSON object) with `iat` / `exp` merged in.
pub fn sign_token(identity: Value, iat: DateTime<Utc>, exp: DateTime<Utc>, secret: &str) -> String {
    let mut claims = identity;
    claims["iat"] = json!(iat.timestamp());
    claims["exp"] = json!(exp.timestamp());

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn issue_token(identity: Value) -> String {
    let now = Utc::now();
    sign_token(identity, now, now + TimeDelta::minutes(15), SECRET)
}

pub fn get(uri: &str) -> axum::http::request::Builder {
    Request::builder().method("GET").uri(uri)
}

pub fn with_cookie(uri: &str, token: &str) -> Request<Body> {
    get(uri)
        .header("cookie", format!("access-token={}", token))
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&body).unwrap()
}
