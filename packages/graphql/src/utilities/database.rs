use async_graphql::{Context, Result};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// The connection shared through the schema data.
pub fn database<'a>(ctx: &Context<'a>) -> Result<&'a DatabaseConnection> {
    Ok(ctx.data::<Arc<DatabaseConnection>>()?.as_ref())
}
