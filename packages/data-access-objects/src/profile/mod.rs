use models::profiles::{ActiveModel, Column, Model};
use models::prelude::Profiles;
use sea_orm::*;

pub struct ProfileDao;

impl ProfileDao {
    pub async fn insert<C: ConnectionTrait>(db: &C, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn find_by_user_id<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
    ) -> Result<Option<Model>, DbErr> {
        Profiles::find()
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await
    }
}
