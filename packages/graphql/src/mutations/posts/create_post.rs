use super::PostMutation;
use crate::errors::UserError;
use crate::mutations::input_validators::PostInput;
use crate::types::PostPayload;
use crate::utilities::RequiresAuth;
use async_graphql::{Context, Result};
use repositories::PostRepository;
use crate::utilities::database;
use services::validation::input_validator::{InputValidator, ValidationErrorsExt};

pub(super) async fn create_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    input: PostInput,
) -> Result<PostPayload> {
    let Some(user_id) = mutation.current_user_id(ctx) else {
        return Ok(PostPayload::failure("You must be logged in to create a new post"));
    };

    if let Err(errors) = input.validate() {
        return Ok(PostPayload {
            user_errors: errors.messages().into_iter().map(UserError::from).collect(),
            post: None,
        });
    }

    let db = database(ctx)?;
    let title = input.title.unwrap_or_default();
    let content = input.content.unwrap_or_default();

    match PostRepository::create_post(db, user_id, title, content).await {
        Ok(post) => {
            tracing::info!(user_id, post_id = post.id, "post created");
            Ok(PostPayload::success(post))
        }
        Err(e) => Ok(PostPayload::failure(e)),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;

    const CREATE: &str = r#"mutation { postCreate(input: { title: "Hello", content: "World" }) {
        userErrors { message }
        post { id title published user { id } }
    } }"#;

    #[tokio::test]
    async fn test_create_post_starts_unpublished() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(1, 3, false)]])
            .append_query_results([vec![user_model(3, "writer@example.com")]])
            .into_shared();

        let res = execute(&db, CREATE, Some(token_for(3))).await;

        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
        let data = res.data.into_json().unwrap();
        assert!(data["postCreate"]["userErrors"].as_array().unwrap().is_empty());
        assert_eq!(data["postCreate"]["post"]["published"], false);
        assert_eq!(data["postCreate"]["post"]["user"]["id"], "3");

        let sql = statements(db);
        assert!(sql[0].starts_with(r#"INSERT INTO "posts""#));
    }

    #[tokio::test]
    async fn test_create_post_requires_login() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_shared();

        let res = execute(&db, CREATE, None).await;

        let data = res.data.into_json().unwrap();
        assert!(data["postCreate"]["post"].is_null());
        assert_eq!(
            data["postCreate"]["userErrors"][0]["message"],
            "You must be logged in to create a new post"
        );
        assert!(transaction_log(db).is_empty());
    }

    #[tokio::test]
    async fn test_create_post_requires_title_and_content() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_shared();
        let query = r#"mutation { postCreate(input: { title: "Only a title" }) {
            userErrors { message }
            post { id }
        } }"#;

        let res = execute(&db, query, Some(token_for(3))).await;

        let data = res.data.into_json().unwrap();
        assert_eq!(
            data["postCreate"]["userErrors"][0]["message"],
            "You must provide title and content to create a post"
        );
        assert!(transaction_log(db).is_empty());
    }
}
