use async_graphql::{Context, Result};
use services::authentication::authenticator::{get_user, AuthenticationError};
use services::authentication::{AuthConfig, Token};

use super::database;

/// Id of the user the request's token was issued for. Missing or invalid
/// tokens resolve to `None`.
pub fn current_user_id(ctx: &Context<'_>) -> Option<i32> {
    let token = ctx.data_opt::<Token>()?;
    let config = ctx.data_opt::<AuthConfig>()?;

    match token.get_user_id(config) {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::debug!(reason = %e, "ignoring unusable token");
            None
        }
    }
}

pub trait RequiresAuth {
    fn current_user_id(&self, ctx: &Context<'_>) -> Option<i32> {
        current_user_id(ctx)
    }

    /// Loads the token's user. `None` when the token is missing, invalid,
    /// or names a user that no longer exists; errors only on store failure.
    async fn require_authenticate_as_user<'a>(
        &self,
        ctx: &Context<'a>,
    ) -> Result<Option<models::users::Model>> {
        let Some(token) = ctx.data_opt::<Token>() else {
            return Ok(None);
        };
        let config = ctx.data::<AuthConfig>()?;
        let db = database(ctx)?;

        match get_user(db, config, token).await {
            Ok(user) => Ok(Some(user)),
            Err(AuthenticationError::BadCredentials(e)) => {
                tracing::debug!(reason = %e.message, "token did not resolve to a user");
                Ok(None)
            }
            Err(AuthenticationError::DbError(e)) => Err(e.message.into()),
        }
    }
}
