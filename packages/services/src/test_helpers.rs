use crate::authentication::claims::Claims;
use crate::authentication::config::AuthConfig;
use crate::authentication::token::Token;
use chrono::{Duration, NaiveDateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use models::{posts, users};
use uuid::Uuid;

pub use sea_orm::{DatabaseBackend, MockDatabase};

pub fn test_auth_config() -> AuthConfig {
    AuthConfig::new("test-secret", 3600, "localhost")
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

pub fn user_model(id: i32, email: &str) -> users::Model {
    users::Model {
        id,
        name: Some(format!("User {}", id)),
        email: email.to_string(),
        password: "$argon2id$v=19$m=4096,t=3,p=1$c29tZXNhbHQ$ZmFrZWhhc2g".to_string(),
        created_at: now(),
        updated_at: now(),
    }
}

pub fn post_model(id: i32, author_id: i32) -> posts::Model {
    posts::Model {
        id,
        title: format!("Post {}", id),
        content: "content".to_string(),
        published: false,
        author_id,
        created_at: now(),
        updated_at: now(),
    }
}

pub fn create_expired_token(config: &AuthConfig, user_id: i32) -> Token {
    let expiration = Utc::now().checked_sub_signed(Duration::hours(1)).unwrap();

    let claims = Claims {
        iss: config.issuer.clone(),
        sub: user_id.to_string(),
        exp: expiration.timestamp(),
        iat: Utc::now().timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    let token_string = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_ref()),
    )
    .unwrap();

    Token::new(token_string)
}

pub fn create_malformed_token() -> Token {
    Token::new("not.a.valid.jwt.token".to_string())
}
