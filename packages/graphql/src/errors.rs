use async_graphql::SimpleObject;
use repositories::{CreateUserError, STORE_FAILURE_MESSAGE};
use services::{AuthError, PostAccessError};

/// User-facing failure, returned inside payloads instead of as a GraphQL error.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
}

impl UserError {
    pub fn new(message: impl Into<String>) -> Self {
        UserError { message: message.into() }
    }

    /// Store failures keep their detail in the logs only.
    pub fn store_failure() -> Self {
        UserError::new(STORE_FAILURE_MESSAGE)
    }
}

impl From<String> for UserError {
    fn from(message: String) -> Self {
        UserError { message }
    }
}

impl From<&str> for UserError {
    fn from(message: &str) -> Self {
        UserError::new(message)
    }
}

impl From<PostAccessError> for UserError {
    fn from(e: PostAccessError) -> Self {
        if let PostAccessError::Db(ref db_err) = e {
            tracing::error!(error = %db_err, "post lookup failed");
            return UserError::store_failure();
        }
        UserError { message: e.to_string() }
    }
}

impl From<CreateUserError> for UserError {
    fn from(e: CreateUserError) -> Self {
        if let CreateUserError::Db(ref db_err) = e {
            tracing::error!(error = %db_err, "signup DB error");
            return UserError::store_failure();
        }
        UserError { message: e.to_string() }
    }
}

impl From<AuthError> for UserError {
    fn from(e: AuthError) -> Self {
        UserError { message: e.message }
    }
}

impl From<sea_orm::DbErr> for UserError {
    fn from(e: sea_orm::DbErr) -> Self {
        tracing::error!(error = %e, "database error");
        UserError::store_failure()
    }
}
