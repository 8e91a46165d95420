use chrono::Utc;
use data_access_objects::PostDao;
use models::posts;
use sea_orm::*;
use services::validation::ActiveModelValidator;

use super::{db_error, PostRepository};

impl PostRepository {
    /// New posts always start unpublished.
    pub async fn create_post(
        db: &DatabaseConnection,
        author_id: i32,
        title: String,
        content: String,
    ) -> Result<posts::Model, String> {
        let now = Utc::now().naive_utc();
        let model = posts::ActiveModel {
            title: ActiveValue::set(title),
            content: ActiveValue::set(content),
            published: ActiveValue::set(false),
            author_id: ActiveValue::set(author_id),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
            ..Default::default()
        };
        if let Err(e) = model.validate() {
            return Err(e.to_string());
        }

        PostDao::insert(db, model).await.map_err(db_error)
    }
}
