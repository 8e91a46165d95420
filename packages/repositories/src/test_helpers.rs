use chrono::{NaiveDate, NaiveDateTime};
use models::{posts, profiles, users};

pub use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

pub const FAKE_HASH: &str = "$argon2id$v=19$m=4096,t=3,p=1$c29tZXNhbHQ$ZmFrZWhhc2g";

pub fn at(second: u32) -> NaiveDateTime {
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

pub fn profile_model(id: i32, user_id: i32, bio: &str) -> profiles::Model {
    profiles::Model {
        id,
        bio: bio.to_string(),
        user_id,
        created_at: at(0),
        updated_at: at(0),
    }
}

pub fn post_model(id: i32, author_id: i32, title: &str, published: bool) -> posts::Model {
    posts::Model {
        id,
        title: title.to_string(),
        content: "content".to_string(),
        published,
        author_id,
        created_at: at(id as u32),
        updated_at: at(id as u32),
    }
}

/// Every statement the mock connection saw, flattened out of transactions.
pub fn statements(db: sea_orm::DatabaseConnection) -> Vec<String> {
    db.into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().iter().map(|s| s.sql.clone()).collect::<Vec<_>>())
        .collect()
}
