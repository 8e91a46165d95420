use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use chrono::NaiveDateTime;

use crate::loaders::RequestUserLoader;
use crate::types::user::User;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Post {
    #[graphql(skip)]
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub published: bool,
    #[graphql(skip)]
    pub author_id: i32,
}

#[ComplexObject]
impl Post {
    #[graphql(name = "id")]
    async fn graphql_id(&self) -> ID {
        ID(self.id.to_string())
    }

    /// The author, fetched through the request's batching loader.
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        let loader = ctx.data::<RequestUserLoader>()?;
        loader
            .load_one(self.author_id)
            .await?
            .map(User::from)
            .ok_or_else(|| format!("Author {} not found", self.author_id).into())
    }
}

impl From<models::posts::Model> for Post {
    fn from(post: models::posts::Model) -> Self {
        Post {
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            published: post.published,
            author_id: post.author_id,
        }
    }
}
