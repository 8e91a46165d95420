use models::users::{ActiveModel, Column, Model};
use models::prelude::Users;
use sea_orm::*;

pub struct UserDao;

impl UserDao {
    pub async fn insert<C: ConnectionTrait>(db: &C, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    /// Single `IN (...)` query; rows come back in whatever order the store picks.
    pub async fn find_by_ids<C: ConnectionTrait>(db: &C, ids: &[i32]) -> Result<Vec<Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Users::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await
    }

    pub async fn find_by_email<C: ConnectionTrait>(
        db: &C,
        email: &str,
    ) -> Result<Option<Model>, DbErr> {
        Users::find().filter(Column::Email.eq(email)).one(db).await
    }
}
