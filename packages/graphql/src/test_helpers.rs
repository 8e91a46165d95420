use async_graphql::{Request, Response};
use chrono::{NaiveDate, NaiveDateTime};
use models::{posts, profiles, users};
use sea_orm::{DatabaseConnection, Transaction};
use services::authentication::{generate_token, hash_password, AuthConfig, Token};
use std::sync::Arc;

use crate::{build_schema, with_request_context, AppSchema};

pub use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

const FAKE_HASH: &str = "$argon2id$v=19$m=4096,t=3,p=1$c29tZXNhbHQ$ZmFrZWhhc2g";

pub fn test_auth_config() -> AuthConfig {
    AuthConfig::new("test-secret", 3600, "localhost")
}

pub trait IntoShared {
    fn into_shared(self) -> Arc<DatabaseConnection>;
}

impl IntoShared for MockDatabase {
    fn into_shared(self) -> Arc<DatabaseConnection> {
        Arc::new(self.into_connection())
    }
}

pub fn create_test_schema(db: Arc<DatabaseConnection>) -> AppSchema {
    build_schema(db, test_auth_config())
}

/// Runs one request the way the HTTP handler does: fresh loader, optional token.
/// The schema and loader are dropped before this returns, so the caller holds
/// the only handle on `db` again.
pub async fn execute(db: &Arc<DatabaseConnection>, query: &str, token: Option<Token>) -> Response {
    let schema = create_test_schema(Arc::clone(db));
    schema
        .execute(with_request_context(Request::new(query), db, token))
        .await
}

pub fn token_for(user_id: i32) -> Token {
    Token::new(generate_token(&test_auth_config(), user_id).unwrap())
}

pub fn raw_token(token: &str) -> Token {
    Token::new(token.to_string())
}

fn at(second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, second)
        .unwrap()
}

pub fn user_model(id: i32, email: &str) -> users::Model {
    users::Model {
        id,
        name: Some(format!("User {}", id)),
        email: email.to_string(),
        password: FAKE_HASH.to_string(),
        created_at: at(0),
        updated_at: at(0),
    }
}

pub fn user_with_password(id: i32, email: &str, password: &str) -> users::Model {
    users::Model {
        password: hash_password(password).unwrap(),
        ..user_model(id, email)
    }
}

pub fn profile_model(id: i32, user_id: i32, bio: &str) -> profiles::Model {
    profiles::Model {
        id,
        bio: bio.to_string(),
        user_id,
        created_at: at(0),
        updated_at: at(0),
    }
}

pub fn post_model(id: i32, author_id: i32, published: bool) -> posts::Model {
    posts::Model {
        id,
        title: format!("Post {}", id),
        content: "content".to_string(),
        published,
        author_id,
        created_at: at(id as u32),
        updated_at: at(id as u32),
    }
}

/// Statement log of a mock connection nothing else holds anymore.
pub fn transaction_log(db: Arc<DatabaseConnection>) -> Vec<Transaction> {
    Arc::try_unwrap(db)
        .expect("connection is still shared")
        .into_transaction_log()
}

/// Every statement the mock connection saw, flattened out of transactions.
pub fn statements(db: Arc<DatabaseConnection>) -> Vec<String> {
    transaction_log(db)
        .iter()
        .flat_map(|txn| txn.statements().iter().map(|s| s.sql.clone()).collect::<Vec<_>>())
        .collect()
}
