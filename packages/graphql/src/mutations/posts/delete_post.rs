use super::{authorize, PostMutation};
use crate::types::PostPayload;
use crate::utilities::RequiresAuth;
use async_graphql::{Context, Result, ID};
use repositories::PostRepository;
use crate::utilities::database;

pub(super) async fn delete_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    post_id: ID,
) -> Result<PostPayload> {
    let Some(user_id) = mutation.current_user_id(ctx) else {
        return Ok(PostPayload::failure("You must be logged in to delete this post"));
    };
    let db = database(ctx)?;

    let post = match authorize(db, user_id, &post_id).await {
        Ok(post) => post,
        Err(e) => return Ok(PostPayload::failure(e)),
    };

    match PostRepository::delete_post(db, post).await {
        Ok(post) => {
            tracing::info!(user_id, post_id = post.id, "post deleted");
            Ok(PostPayload::success(post))
        }
        Err(e) => Ok(PostPayload::failure(e)),
    }
}
