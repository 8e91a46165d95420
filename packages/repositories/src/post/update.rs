use chrono::Utc;
use data_access_objects::PostDao;
use models::posts::{self, Model};
use sea_orm::*;
use services::validation::ActiveModelValidator;

use super::{db_error, PostRepository};

impl PostRepository {
    /// Applies the non-empty fields; `None` or blank leaves a field untouched.
    pub async fn update_post(
        db: &DatabaseConnection,
        post: Model,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Model, String> {
        let mut model: posts::ActiveModel = post.into_active_model();

        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            model.title = ActiveValue::set(title);
        }
        if let Some(content) = content.filter(|c| !c.trim().is_empty()) {
            model.content = ActiveValue::set(content);
        }
        if let Err(e) = model.validate() {
            return Err(e.to_string());
        }
        model.updated_at = ActiveValue::set(Utc::now().naive_utc());

        PostDao::update(db, model).await.map_err(db_error)
    }

    pub async fn set_published(
        db: &DatabaseConnection,
        post: Model,
        published: bool,
    ) -> Result<Model, String> {
        let mut model: posts::ActiveModel = post.into_active_model();
        model.published = ActiveValue::set(published);
        model.updated_at = ActiveValue::set(Utc::now().naive_utc());

        PostDao::update(db, model).await.map_err(db_error)
    }
}
