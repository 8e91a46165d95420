use super::{authorize, PostMutation};
use crate::types::PostPayload;
use crate::utilities::RequiresAuth;
use async_graphql::{Context, Result, ID};
use repositories::PostRepository;
use crate::utilities::database;

/// Backs both `postPublish` and `postUnpublish`.
pub(super) async fn set_published(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    post_id: ID,
    published: bool,
) -> Result<PostPayload> {
    let Some(user_id) = mutation.current_user_id(ctx) else {
        return Ok(PostPayload::failure("You must be logged in to edit this post"));
    };
    let db = database(ctx)?;

    let post = match authorize(db, user_id, &post_id).await {
        Ok(post) => post,
        Err(e) => return Ok(PostPayload::failure(e)),
    };

    match PostRepository::set_published(db, post, published).await {
        Ok(post) => {
            tracing::info!(user_id, post_id = post.id, published, "post visibility changed");
            Ok(PostPayload::success(post))
        }
        Err(e) => Ok(PostPayload::failure(e)),
    }
}
