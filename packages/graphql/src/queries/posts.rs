use async_graphql::{Context, Object, Result};
use repositories::PostRepository;

use crate::types::post::Post as PostType;
use crate::utilities::database;

#[derive(Default)]
pub struct PostQueries;

#[Object]
impl PostQueries {
    /// Published posts, newest first
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostType>> {
        let db = database(ctx)?;

        let posts = PostRepository::get_published_posts(db).await?;
        Ok(posts.into_iter().map(PostType::from).collect())
    }
}
