use std::env;
use std::fmt;

const DEV_SECRET: &str = "dev-secret";

/// Signing settings for access tokens, shared by issuance and verification.
#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration_seconds: i64,
    pub issuer: String,
}

impl AuthConfig {
    pub const DEFAULT_EXPIRATION_SECONDS: i64 = 3_600_000;

    pub fn new(secret: impl Into<String>, expiration_seconds: i64, issuer: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_seconds,
            issuer: issuer.into(),
        }
    }

    /// Reads `TOKEN_SECRET`, `TOKEN_EXPIRATION_SECONDS` and `HOST_NAME`.
    pub fn from_env() -> Self {
        let secret = match env::var("TOKEN_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("TOKEN_SECRET is not set, falling back to the development secret");
                DEV_SECRET.to_string()
            }
        };

        let expiration_seconds = env::var("TOKEN_EXPIRATION_SECONDS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(Self::DEFAULT_EXPIRATION_SECONDS);

        let issuer = env::var("HOST_NAME").unwrap_or_else(|_| "localhost".to_string());

        Self::new(secret, expiration_seconds, issuer)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("expiration_seconds", &self.expiration_seconds)
            .field("issuer", &self.issuer)
            .finish()
    }
}
