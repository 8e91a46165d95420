use crate::errors::UserError;
use crate::mutations::input_validators::PostInput;
use crate::types::PostPayload;
use crate::utilities::{parse_id, RequiresAuth};
use async_graphql::{Context, Object, Result, ID};
use sea_orm::DatabaseConnection;
use services::authorization::{can_user_mutate_post, PostAccessError};

mod create_post;
mod delete_post;
mod publish_post;
mod update_post;

/// Ownership gate shared by every mutation that targets an existing post.
/// Ids that are not numeric cannot name a post and report "not found".
async fn authorize(
    db: &DatabaseConnection,
    user_id: i32,
    post_id: &ID,
) -> std::result::Result<models::posts::Model, UserError> {
    let post_id = parse_id(post_id).ok_or(PostAccessError::NotFound)?;
    Ok(can_user_mutate_post(db, user_id, post_id).await?)
}

#[derive(Default)]
pub struct PostMutation;

impl RequiresAuth for PostMutation {}

#[Object]
impl PostMutation {
    async fn post_create(&self, ctx: &Context<'_>, input: PostInput) -> Result<PostPayload> {
        create_post::create_post(self, ctx, input).await
    }

    async fn post_update(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        input: PostInput,
    ) -> Result<PostPayload> {
        update_post::update_post(self, ctx, post_id, input).await
    }

    async fn post_delete(&self, ctx: &Context<'_>, post_id: ID) -> Result<PostPayload> {
        delete_post::delete_post(self, ctx, post_id).await
    }

    async fn post_publish(&self, ctx: &Context<'_>, post_id: ID) -> Result<PostPayload> {
        publish_post::set_published(self, ctx, post_id, true).await
    }

    async fn post_unpublish(&self, ctx: &Context<'_>, post_id: ID) -> Result<PostPayload> {
        publish_post::set_published(self, ctx, post_id, false).await
    }
}
