use crate::errors::UserError;
use crate::mutations::input_validators::SignUpInput;
use crate::types::AuthPayload;
use async_graphql::{Context, Result};
use repositories::{NewUser, UserRepository};
use crate::utilities::database;
use services::authentication::{generate_token, hash_password, AuthConfig};
use services::validation::input_validator::{InputValidator, ValidationErrorsExt};

pub(super) async fn sign_up(ctx: &Context<'_>, input: SignUpInput) -> Result<AuthPayload> {
    // nothing may touch the store until the input is known to be acceptable
    if let Err(errors) = input.validate() {
        return Ok(AuthPayload::failures(
            errors.messages().into_iter().map(UserError::from).collect(),
        ));
    }

    let db = database(ctx)?;
    let config = ctx.data::<AuthConfig>()?;

    let password_hash = match hash_password(&input.credentials.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "password hashing failed");
            return Ok(AuthPayload::failure(e));
        }
    };

    let new_user = NewUser {
        name: input.name.trim().to_string(),
        email: input.credentials.normalized_email().to_string(),
        password_hash,
        bio: input.bio,
    };

    let (user, _profile) = match UserRepository::create_with_profile(db, new_user).await {
        Ok(created) => created,
        Err(e) => return Ok(AuthPayload::failure(e)),
    };

    match generate_token(config, user.id) {
        Ok(token) => {
            tracing::info!(user_id = %user.id, "signup success");
            Ok(AuthPayload::success(token))
        }
        Err(e) => Ok(AuthPayload::failure(e)),
    }
}
