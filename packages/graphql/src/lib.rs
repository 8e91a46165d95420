pub mod errors;
pub mod loaders;
pub mod mutations;
pub mod queries;
pub mod types;
pub mod utilities;

#[cfg(test)]
pub mod test_helpers;

use async_graphql::{EmptySubscription, Request, Schema};
use sea_orm::DatabaseConnection;
use services::authentication::{AuthConfig, Token};
use std::sync::Arc;

use crate::loaders::UserLoader;
use crate::mutations::Mutations;
use crate::queries::Queries;

pub type AppSchema = Schema<Queries, Mutations, EmptySubscription>;

/// Process-wide schema; per-request state is attached by [`with_request_context`].
pub fn build_schema(db: Arc<DatabaseConnection>, auth_config: AuthConfig) -> AppSchema {
    Schema::build(Queries::default(), Mutations::default(), EmptySubscription)
        .data(db)
        .data(auth_config)
        .finish()
}

/// Attaches the caller's credential (if any) and a fresh user loader, so
/// loader caches never outlive the request.
pub fn with_request_context(
    request: Request,
    db: &Arc<DatabaseConnection>,
    token: Option<Token>,
) -> Request {
    let request = request.data(UserLoader::request_scoped(Arc::clone(db)));
    match token {
        Some(token) => request.data(token),
        None => request,
    }
}
