use crate::mutations::input_validators::CredentialInput;
use crate::types::AuthPayload;
use async_graphql::{Context, Result};
use repositories::UserRepository;
use crate::utilities::database;
use services::authentication::{generate_token, verify_password, AuthConfig};
use services::validation::input_validator::InputValidator;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub(super) async fn sign_in(ctx: &Context<'_>, input: CredentialInput) -> Result<AuthPayload> {
    if !input.is_valid() {
        return Ok(AuthPayload::failure(INVALID_CREDENTIALS));
    }

    let db = database(ctx)?;
    let config = ctx.data::<AuthConfig>()?;

    let user = match UserRepository::find_by_email(db, input.normalized_email()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!("signin failed: email not found");
            return Ok(AuthPayload::failure(INVALID_CREDENTIALS));
        }
        Err(e) => return Ok(AuthPayload::failure(e)),
    };

    if !verify_password(&input.password, &user.password) {
        tracing::warn!(user_id = %user.id, "signin failed: wrong password");
        return Ok(AuthPayload::failure(INVALID_CREDENTIALS));
    }

    match generate_token(config, user.id) {
        Ok(token) => {
            tracing::info!(user_id = %user.id, "signin success");
            Ok(AuthPayload::success(token))
        }
        Err(e) => Ok(AuthPayload::failure(e)),
    }
}
