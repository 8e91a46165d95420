use async_graphql::dataloader::{DataLoader, HashMapCache, Loader};
use models::users;
use repositories::UserRepository;
use sea_orm::{DatabaseConnection, DbErr};
use std::collections::HashMap;
use std::sync::Arc;

/// Batches user lookups by id into a single `IN (...)` query.
pub struct UserLoader {
    db: Arc<DatabaseConnection>,
}

/// Loader handle stored in each request's data.
pub type RequestUserLoader = DataLoader<UserLoader, HashMapCache>;

impl UserLoader {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// A loader with its own cache; build one per request.
    pub fn request_scoped(db: Arc<DatabaseConnection>) -> RequestUserLoader {
        DataLoader::with_cache(Self::new(db), tokio::spawn, HashMapCache::default())
    }
}

impl Loader<i32> for UserLoader {
    type Value = users::Model;
    type Error = Arc<DbErr>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        tracing::debug!(batch_size = keys.len(), "loading users");
        let users = UserRepository::find_by_ids_ordered(&self.db, keys)
            .await
            .map_err(Arc::new)?;

        Ok(keys
            .iter()
            .zip(users)
            .filter_map(|(id, user)| user.map(|user| (*id, user)))
            .collect())
    }
}
