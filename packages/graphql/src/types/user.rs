use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use repositories::PostRepository;

use crate::types::post::Post;
use crate::utilities::{current_user_id, database};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    #[graphql(skip)]
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
}

#[ComplexObject]
impl User {
    #[graphql(name = "id")]
    async fn graphql_id(&self) -> ID {
        ID(self.id.to_string())
    }

    /// Newest first. Drafts are only listed for the user themselves.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let db = database(ctx)?;
        let viewer = current_user_id(ctx);

        let posts = PostRepository::get_posts_by_author(db, self.id, viewer).await?;
        Ok(posts.into_iter().map(Post::from).collect())
    }
}

impl From<models::users::Model> for User {
    fn from(user: models::users::Model) -> Self {
        User {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
