use std::time::Duration;

use crate::config::ConfigError;

/// Key material and validity policy shared by every verification call.
///
/// - Built once at startup; never mutated afterwards (wrap the verifier in `Arc`).
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct SigningConfig {
    secret: Vec<u8>,
    lifespan: Duration,
    issuer: Option<String>,
    audience: Option<String>,
}

impl std::fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("SigningConfig")
            .field("lifespan", &self.lifespan)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl SigningConfig {
    /// An empty secret or a zero lifespan is a misconfiguration, not a per-request failure.
    pub fn new(secret: impl Into<Vec<u8>>, lifespan: Duration) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(ConfigError::Missing("JWT_SIGNING_KEY"));
        }
        if lifespan.is_zero() || i64::try_from(lifespan.as_secs()).is_err() {
            return Err(ConfigError::Invalid("JWT_LIFESPAN_SECONDS"));
        }

        Ok(Self {
            secret,
            lifespan,
            issuer: None,
            audience: None,
        })
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn lifespan(&self) -> Duration {
        self.lifespan
    }

    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    pub fn audience(&self) -> Option<&str> {
        self.audience.as_deref()
    }
}
