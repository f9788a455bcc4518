use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::services::auth::signing::SigningConfig;

// Reasons a token is refused. Callers outside this module only ever see `None`.
#[derive(Debug, Error)]
pub(crate) enum TokenError {
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("token expired")]
    Expired,
    #[error("token issued in the future")]
    NotYetValid,
}

/// Registered claims checked here, with the identity fields flattened alongside them.
///
/// An identity type must not declare its own `iat` / `exp` fields.
#[derive(Debug, Clone, Deserialize)]
struct TokenClaims<I> {
    iat: i64,
    exp: i64,
    #[serde(flatten)]
    identity: I,
}

/// HS256 access-token verifier, generic over the identity carried in the payload.
///
/// `jsonwebtoken` checks the signature, algorithm and (when configured) `iss`/`aud`.
/// Expiry is checked here against a single clock reading so a token cannot cross its
/// boundary between two sub-checks.
pub struct JwtAuthentication<I> {
    decoding_key: DecodingKey,
    validation: Validation,
    lifespan_seconds: i64,
    _identity: PhantomData<fn() -> I>,
}

impl<I> std::fmt::Debug for JwtAuthentication<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("JwtAuthentication")
            .field("validation", &self.validation)
            .field("lifespan_seconds", &self.lifespan_seconds)
            .finish()
    }
}

impl<I> JwtAuthentication<I>
where
    I: DeserializeOwned + Clone,
{
    pub fn new(config: &SigningConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp is compared in `verify_at` with the caller's clock reading.
        validation.validate_exp = false;

        let mut required = vec!["exp"];
        if let Some(issuer) = config.issuer() {
            validation.set_issuer(&[issuer]);
            required.push("iss");
        }
        match config.audience() {
            Some(audience) => {
                validation.set_audience(&[audience]);
                required.push("aud");
            }
            None => validation.validate_aud = false,
        }
        validation.set_required_spec_claims(&required);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret()),
            validation,
            lifespan_seconds: i64::try_from(config.lifespan().as_secs()).unwrap_or(i64::MAX),
            _identity: PhantomData,
        }
    }

    /// Validate against the current time. `None` is the only failure signal.
    pub fn validate(&self, token: &str) -> Option<I> {
        self.validate_at(token, Utc::now())
    }

    /// Same as [`validate`](Self::validate) with an explicit clock reading.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Option<I> {
        self.verify_at(token, now).ok()
    }

    pub(crate) fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<I, TokenError> {
        let data =
            jsonwebtoken::decode::<TokenClaims<I>>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        // Valid window is [iat, min(exp, iat + lifespan)); now == expiry is expired.
        let now = now.timestamp();
        if now < claims.iat {
            return Err(TokenError::NotYetValid);
        }
        let expires_at = claims
            .exp
            .min(claims.iat.saturating_add(self.lifespan_seconds));
        if now >= expires_at {
            return Err(TokenError::Expired);
        }

        Ok(claims.identity)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::TimeDelta;
    use jsonwebtoken::{EncodingKey, Header};
    use serde::Serialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestIdentity {
        id: String,
    }

    fn verifier(secret: &str, lifespan: Duration) -> JwtAuthentication<TestIdentity> {
        JwtAuthentication::new(&SigningConfig::new(secret, lifespan).unwrap())
    }

    fn sign(claims: &serde_json::Value, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn issued_token(secret: &str, iat: DateTime<Utc>, lifespan: TimeDelta) -> String {
        sign(
            &json!({
                "id": "42",
                "iat": iat.timestamp(),
                "exp": (iat + lifespan).timestamp(),
            }),
            secret,
        )
    }

    #[test]
    fn test_validate_within_lifespan_and_after_expiry() {
        let auth = verifier("s3cr3t", Duration::from_secs(15 * 60));
        let now = Utc::now();
        let token = issued_token("s3cr3t", now, TimeDelta::minutes(15));

        assert_eq!(
            auth.validate_at(&token, now + TimeDelta::minutes(1)),
            Some(TestIdentity {
                id: "42".to_string()
            })
        );
        assert_eq!(auth.validate_at(&token, now + TimeDelta::minutes(16)), None);
    }

    #[test]
    fn test_validate_uses_current_clock() {
        let auth = verifier("s3cr3t", Duration::from_secs(900));
        let token = issued_token("s3cr3t", Utc::now(), TimeDelta::minutes(15));

        let identity = auth.validate(&token).unwrap();
        assert_eq!(identity.id, "42");
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let auth = verifier("s3cr3t", Duration::from_secs(900));
        let now = Utc::now();
        let token = issued_token("s3cr3t", now, TimeDelta::seconds(60));
        let exp = now + TimeDelta::seconds(60);

        assert!(auth.validate_at(&token, exp - TimeDelta::seconds(1)).is_some());
        assert!(matches!(
            auth.verify_at(&token, exp),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_future_issued_at_is_rejected() {
        let auth = verifier("s3cr3t", Duration::from_secs(15 * 60));
        let now = Utc::now();
        let token = issued_token("s3cr3t", now + TimeDelta::days(365), TimeDelta::minutes(15));

        assert!(matches!(
            auth.verify_at(&token, now),
            Err(TokenError::NotYetValid)
        ));
        assert!(auth.validate_at(&token, now + TimeDelta::days(200)).is_none());
    }

    #[test]
    fn test_lifespan_caps_a_longer_exp() {
        let auth = verifier("s3cr3t", Duration::from_secs(15 * 60));
        let now = Utc::now();
        let token = issued_token("s3cr3t", now, TimeDelta::hours(24));

        assert!(auth.validate_at(&token, now + TimeDelta::minutes(14)).is_some());
        assert!(auth.validate_at(&token, now + TimeDelta::minutes(15)).is_none());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let auth = verifier("s3cr3t", Duration::from_secs(900));
        let now = Utc::now();
        let token = issued_token("another-secret", now, TimeDelta::minutes(15));

        assert!(matches!(
            auth.verify_at(&token, now),
            Err(TokenError::Jwt(_))
        ));
        assert!(auth.validate_at(&token, now).is_none());
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let auth = verifier("s3cr3t", Duration::from_secs(900));
        let now = Utc::now();
        let claims = json!({
            "id": "42",
            "iat": now.timestamp(),
            "exp": (now + TimeDelta::minutes(5)).timestamp(),
        });
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"s3cr3t"),
        )
        .unwrap();

        assert!(auth.validate_at(&token, now).is_none());
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let auth = verifier("s3cr3t", Duration::from_secs(900));
        let now = Utc::now();

        for token in ["", "invalid.token.here", "not-a-jwt", "a.b", "...."] {
            assert!(auth.validate_at(token, now).is_none(), "{token}");
        }
    }

    #[test]
    fn test_missing_registered_claims_are_rejected() {
        let auth = verifier("s3cr3t", Duration::from_secs(900));
        let now = Utc::now();

        let without_iat = sign(
            &json!({ "id": "42", "exp": (now + TimeDelta::minutes(5)).timestamp() }),
            "s3cr3t",
        );
        let without_exp = sign(&json!({ "id": "42", "iat": now.timestamp() }), "s3cr3t");

        assert!(auth.validate_at(&without_iat, now).is_none());
        assert!(auth.validate_at(&without_exp, now).is_none());
    }

    #[test]
    fn test_payload_not_matching_identity_is_rejected() {
        let auth = verifier("s3cr3t", Duration::from_secs(900));
        let now = Utc::now();
        let token = sign(
            &json!({
                "user": 42,
                "iat": now.timestamp(),
                "exp": (now + TimeDelta::minutes(5)).timestamp(),
            }),
            "s3cr3t",
        );

        assert!(auth.validate_at(&token, now).is_none());
    }

    #[test]
    fn test_validate_is_repeatable() {
        let auth = verifier("s3cr3t", Duration::from_secs(900));
        let now = Utc::now();
        let token = issued_token("s3cr3t", now, TimeDelta::minutes(15));
        let at = now + TimeDelta::minutes(2);

        let first = auth.validate_at(&token, at);
        let second = auth.validate_at(&token, at);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_issuer_and_audience_are_enforced_when_configured() {
        let config = SigningConfig::new("s3cr3t", Duration::from_secs(900))
            .unwrap()
            .with_issuer("commons")
            .with_audience("api");
        let auth: JwtAuthentication<TestIdentity> = JwtAuthentication::new(&config);
        let now = Utc::now();
        let exp = (now + TimeDelta::minutes(5)).timestamp();

        let matching = sign(
            &json!({ "id": "42", "iss": "commons", "aud": "api", "iat": now.timestamp(), "exp": exp }),
            "s3cr3t",
        );
        let wrong_issuer = sign(
            &json!({ "id": "42", "iss": "elsewhere", "aud": "api", "iat": now.timestamp(), "exp": exp }),
            "s3cr3t",
        );
        let no_audience = sign(
            &json!({ "id": "42", "iss": "commons", "iat": now.timestamp(), "exp": exp }),
            "s3cr3t",
        );

        assert!(auth.validate_at(&matching, now).is_some());
        assert!(auth.validate_at(&wrong_issuer, now).is_none());
        assert!(auth.validate_at(&no_audience, now).is_none());
    }
}
