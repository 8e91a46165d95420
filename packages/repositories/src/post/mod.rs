mod create;
mod delete;
mod read;
mod update;

/// Post persistence. Ownership is checked by the caller before any of the
/// write paths here are reached.
pub struct PostRepository;

fn db_error(e: sea_orm::DbErr) -> String {
    tracing::error!(error = %e, "post query failed");
    crate::STORE_FAILURE_MESSAGE.to_string()
}
