use models::posts::{ActiveModel, Column, Entity, Model};
use models::prelude::Posts;
use sea_orm::*;

pub struct PostDao;

impl PostDao {
    pub async fn find_published<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        Posts::find()
            .filter(Column::Published.eq(true))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_author<C: ConnectionTrait>(
        db: &C,
        author_id: i32,
        include_unpublished: bool,
    ) -> Result<Vec<Model>, DbErr> {
        let mut q = Posts::find().filter(Column::AuthorId.eq(author_id));

        if !include_unpublished {
            q = q.filter(Column::Published.eq(true));
        }

        q.order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    pub async fn insert<C: ConnectionTrait>(db: &C, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn update<C: ConnectionTrait>(db: &C, model: ActiveModel) -> Result<Model, DbErr> {
        Entity::update(model).exec(db).await
    }

    pub async fn delete<C: ConnectionTrait>(
        db: &C,
        model: ActiveModel,
    ) -> Result<DeleteResult, DbErr> {
        Entity::delete(model).exec(db).await
    }
}
