use super::{authorize, PostMutation};
use crate::mutations::input_validators::PostInput;
use crate::types::PostPayload;
use crate::utilities::RequiresAuth;
use async_graphql::{Context, Result, ID};
use repositories::PostRepository;
use crate::utilities::database;

pub(super) async fn update_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    post_id: ID,
    input: PostInput,
) -> Result<PostPayload> {
    let Some(user_id) = mutation.current_user_id(ctx) else {
        return Ok(PostPayload::failure("You must be logged in to update this post"));
    };
    let db = database(ctx)?;

    let post = match authorize(db, user_id, &post_id).await {
        Ok(post) => post,
        Err(e) => return Ok(PostPayload::failure(e)),
    };

    if !input.has_title() && !input.has_content() {
        return Ok(PostPayload::failure("Need to have at least one field to update"));
    }

    match PostRepository::update_post(db, post, input.title, input.content).await {
        Ok(post) => {
            tracing::info!(user_id, post_id = post.id, "post updated");
            Ok(PostPayload::success(post))
        }
        Err(e) => Ok(PostPayload::failure(e)),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;

    const UPDATE: &str = r#"mutation { postUpdate(postId: "5", input: { title: "New title" }) {
        userErrors { message }
        post { id title content }
    } }"#;

    #[tokio::test]
    async fn test_update_by_owner_changes_only_given_fields() {
        let mut updated = post_model(5, 1, false);
        updated.title = "New title".to_string();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(5, 1, false)]])
            .append_query_results([vec![updated]])
            .into_shared();

        let res = execute(&db, UPDATE, Some(token_for(1))).await;

        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
        let data = res.data.into_json().unwrap();
        assert_eq!(data["postUpdate"]["post"]["title"], "New title");
        assert_eq!(data["postUpdate"]["post"]["content"], "content");

        let sql = statements(db);
        assert!(sql[1].starts_with(r#"UPDATE "posts""#));
        assert!(!sql[1].contains(r#""content" = "#));
    }

    #[tokio::test]
    async fn test_update_by_non_owner_writes_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(5, 2, false)]])
            .into_shared();

        let res = execute(&db, UPDATE, Some(token_for(1))).await;

        let data = res.data.into_json().unwrap();
        assert!(data["postUpdate"]["post"].is_null());
        assert_eq!(
            data["postUpdate"]["userErrors"][0]["message"],
            "You are not authorized to modify this post"
        );

        let sql = statements(db);
        assert_eq!(sql.len(), 1);
        assert!(sql[0].starts_with("SELECT"));
    }

    #[tokio::test]
    async fn test_update_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<models::posts::Model>::new()])
            .into_shared();

        let res = execute(&db, UPDATE, Some(token_for(1))).await;

        let data = res.data.into_json().unwrap();
        assert_eq!(data["postUpdate"]["userErrors"][0]["message"], "Post not found");
    }

    #[tokio::test]
    async fn test_update_non_numeric_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_shared();
        let query = r#"mutation { postUpdate(postId: "abc", input: { title: "x" }) {
            userErrors { message }
        } }"#;

        let res = execute(&db, query, Some(token_for(1))).await;

        let data = res.data.into_json().unwrap();
        assert_eq!(data["postUpdate"]["userErrors"][0]["message"], "Post not found");
        assert!(transaction_log(db).is_empty());
    }

    #[tokio::test]
    async fn test_update_needs_a_field() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(5, 1, false)]])
            .into_shared();
        let query = r#"mutation { postUpdate(postId: "5", input: { title: "" }) {
            userErrors { message }
        } }"#;

        let res = execute(&db, query, Some(token_for(1))).await;

        let data = res.data.into_json().unwrap();
        assert_eq!(
            data["postUpdate"]["userErrors"][0]["message"],
            "Need to have at least one field to update"
        );
        assert_eq!(statements(db).len(), 1);
    }

    #[tokio::test]
    async fn test_update_requires_login() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_shared();

        let res = execute(&db, UPDATE, None).await;

        let data = res.data.into_json().unwrap();
        assert_eq!(
            data["postUpdate"]["userErrors"][0]["message"],
            "You must be logged in to update this post"
        );
    }
}
