use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::loaders::RequestUserLoader;
use crate::types::user::User;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Profile {
    #[graphql(skip)]
    pub id: i32,
    pub bio: String,
    pub is_my_profile: bool,
    #[graphql(skip)]
    pub user_id: i32,
}

#[ComplexObject]
impl Profile {
    #[graphql(name = "id")]
    async fn graphql_id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        let loader = ctx.data::<RequestUserLoader>()?;
        loader
            .load_one(self.user_id)
            .await?
            .map(User::from)
            .ok_or_else(|| format!("User {} not found", self.user_id).into())
    }
}

impl Profile {
    pub fn from_model(profile: models::profiles::Model, viewer_id: Option<i32>) -> Self {
        Profile {
            id: profile.id,
            bio: profile.bio,
            is_my_profile: viewer_id == Some(profile.user_id),
            user_id: profile.user_id,
        }
    }
}
