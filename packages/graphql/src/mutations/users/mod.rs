use crate::mutations::input_validators::{CredentialInput, SignUpInput};
use crate::types::AuthPayload;
use async_graphql::{Context, Object, Result};

mod sign_in;
mod sign_up;

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Creates a user with its profile and returns a token for them.
    #[graphql(name = "signup")]
    async fn sign_up(
        &self,
        ctx: &Context<'_>,
        name: String,
        bio: String,
        credentials: CredentialInput,
    ) -> Result<AuthPayload> {
        sign_up::sign_up(ctx, SignUpInput { name, bio, credentials }).await
    }

    #[graphql(name = "signin")]
    async fn sign_in(&self, ctx: &Context<'_>, credentials: CredentialInput) -> Result<AuthPayload> {
        sign_in::sign_in(ctx, credentials).await
    }
}
