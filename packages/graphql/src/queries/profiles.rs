use async_graphql::{Context, Object, Result, ID};
use repositories::ProfileRepository;

use crate::types::profile::Profile;
use crate::utilities::{current_user_id, database, parse_id};

#[derive(Default)]
pub struct ProfileQueries;

#[Object]
impl ProfileQueries {
    /// Public profile of any user; `isMyProfile` reflects the caller's token.
    async fn profile(&self, ctx: &Context<'_>, user_id: ID) -> Result<Option<Profile>> {
        let Some(user_id) = parse_id(&user_id) else {
            return Ok(None);
        };
        let db = database(ctx)?;

        let profile = ProfileRepository::find_by_user_id(db, user_id).await?;
        Ok(profile.map(|p| Profile::from_model(p, current_user_id(ctx))))
    }
}
