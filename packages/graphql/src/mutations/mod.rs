use async_graphql::MergedObject;
mod input_validators;
mod posts;
mod users;

pub use input_validators::{CredentialInput, PostInput};

#[derive(MergedObject, Default)]
pub struct Mutations(
    posts::PostMutation,
    users::UserMutation,
);
