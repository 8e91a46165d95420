use data_access_objects::PostDao;
use models::posts::Model;
use sea_orm::*;

use super::{db_error, PostRepository};

impl PostRepository {
    /// Public feed: published posts, newest first.
    pub async fn get_published_posts(db: &DatabaseConnection) -> Result<Vec<Model>, String> {
        PostDao::find_published(db).await.map_err(db_error)
    }

    /// Drafts are only listed when the viewer is the author.
    pub async fn get_posts_by_author(
        db: &DatabaseConnection,
        author_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Vec<Model>, String> {
        let include_unpublished = viewer_id == Some(author_id);
        PostDao::find_by_author(db, author_id, include_unpublished)
            .await
            .map_err(db_error)
    }
}
