use crate::authentication::config::AuthConfig;
use crate::authentication::token::{AuthError, Token};
use std::fmt;
use sea_orm::*;
use models::users::{Model, Entity as users};

#[derive(Debug)]
pub struct BadCredentialsError {
    pub message: String,
}

#[derive(Debug)]
pub struct DbError {
    pub message: String,
}

#[derive(Debug)]
pub enum AuthenticationError {
    BadCredentials(BadCredentialsError),
    DbError(DbError),
}

impl From<AuthError> for AuthenticationError {
    fn from(e: AuthError) -> Self {
        AuthenticationError::BadCredentials(BadCredentialsError {
            message: e.to_string(),
        })
    }
}

impl From<sea_orm::DbErr> for AuthenticationError {
    fn from(e: sea_orm::DbErr) -> Self {
        AuthenticationError::DbError(DbError {
            message: e.to_string(),
        })
    }
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthenticationError::BadCredentials(e) => f.write_str(e.message.as_str()),
            AuthenticationError::DbError(e) => f.write_str(e.message.as_str()),
        }
    }
}

impl std::error::Error for AuthenticationError {}

/// Resolves the user a bearer token was issued for.
pub async fn get_user<C: ConnectionTrait>(
    db: &C,
    config: &AuthConfig,
    token: &Token,
) -> Result<Model, AuthenticationError> {
    let user_id = token.get_user_id(config)?;

    users::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            AuthenticationError::BadCredentials(BadCredentialsError {
                message: "User not found".to_string(),
            })
        })
}
