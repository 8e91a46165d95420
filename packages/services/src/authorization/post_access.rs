use models::posts::{Entity as posts, Model};
use sea_orm::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostAccessError {
    #[error("Post not found")]
    NotFound,
    #[error("You are not authorized to modify this post")]
    NotAuthorized,
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

/// Loads the post and checks that `user_id` authored it.
///
/// The post is handed back on success so callers can act on it without a
/// second read.
pub async fn can_user_mutate_post<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    post_id: i32,
) -> Result<Model, PostAccessError> {
    let post = posts::find_by_id(post_id)
        .one(db)
        .await?
        .ok_or(PostAccessError::NotFound)?;

    if post.author_id != user_id {
        tracing::warn!(user_id, post_id, author_id = post.author_id, "post mutation denied");
        return Err(PostAccessError::NotAuthorized);
    }

    Ok(post)
}
