use data_access_objects::PostDao;
use models::posts::Model;
use sea_orm::*;

use super::{db_error, PostRepository};

impl PostRepository {
    /// Removes the post and hands back its last state.
    pub async fn delete_post(db: &DatabaseConnection, post: Model) -> Result<Model, String> {
        let am = post.clone().into_active_model();
        let res = PostDao::delete(db, am).await.map_err(db_error)?;

        if res.rows_affected == 0 {
            return Err("Post not found".to_string());
        }
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::super::PostRepository;
    use crate::test_helpers::*;

    #[tokio::test]
    async fn test_delete_post_returns_deleted_post() {
        let post = post_model(5, 1, "Bye", true);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let deleted = PostRepository::delete_post(&db, post.clone()).await.unwrap();

        assert_eq!(deleted, post);
        let sql = statements(db);
        assert!(sql[0].starts_with(r#"DELETE FROM "posts" WHERE "posts"."id" = $1"#));
    }

    #[tokio::test]
    async fn test_delete_post_already_gone_returns_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = PostRepository::delete_post(&db, post_model(5, 1, "Bye", true))
            .await
            .unwrap_err();

        assert!(err.contains("not found"));
    }
}
