use crate::authentication::claims::Claims;
use crate::authentication::config::AuthConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, TokenData,
    Validation,
};
use std::fmt;
use uuid::Uuid;

#[derive(Debug)]
pub struct AuthError {
    pub message: String,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl std::error::Error for AuthError {}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        let message = match e.kind() {
            ErrorKind::ExpiredSignature => "Token has expired".to_string(),
            ErrorKind::InvalidSignature => "Token signature is invalid".to_string(),
            ErrorKind::InvalidIssuer => "Token issuer is invalid".to_string(),
            _ => format!("Invalid token: {}", e),
        };
        AuthError { message }
    }
}

/// Raw bearer credential as received from the client.
#[derive(Clone, Debug)]
pub struct Token(pub String);

impl Token {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    /// The JWT itself; accepts `Bearer <jwt>` as well as a bare `<jwt>`.
    pub fn bare(&self) -> &str {
        let raw = self.0.trim();
        raw.strip_prefix("Bearer ")
            .or_else(|| raw.strip_prefix("bearer "))
            .unwrap_or(raw)
            .trim()
    }

    pub fn verify_token(&self, config: &AuthConfig) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_aud = false;

        let data = decode::<Claims>(
            self.bare(),
            &DecodingKey::from_secret(config.secret.as_bytes()),
            &validation,
        )?;
        Ok(data)
    }

    pub fn get_user_id(&self, config: &AuthConfig) -> Result<i32, AuthError> {
        let data = self.verify_token(config)?;
        data.claims.sub.parse::<i32>().map_err(|_| AuthError {
            message: "Token subject is not a user id".to_string(),
        })
    }
}

pub fn generate_token(config: &AuthConfig, user_id: i32) -> Result<String, AuthError> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::seconds(config.expiration_seconds))
        .ok_or_else(|| AuthError {
            message: "Token expiration is out of range".to_string(),
        })?;

    let claims = Claims {
        iss: config.issuer.clone(),
        sub: user_id.to_string(),
        exp: expiration.timestamp(),
        iat: now.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;
    Ok(token)
}
