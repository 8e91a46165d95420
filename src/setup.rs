use models::prelude::{Posts, Profiles, Users};
use sea_orm::*;

pub(super) async fn set_up_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(database_url.to_owned());
    opts.sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    let db = Database::connect(opts).await?;
    tracing::info!("DB connected");

    create_tables(&db).await?;
    Ok(db)
}

/// Creates any missing table from the entity definitions. Parents first so
/// foreign keys resolve.
pub(super) async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = [
        schema.create_table_from_entity(Users),
        schema.create_table_from_entity(Profiles),
        schema.create_table_from_entity(Posts),
    ];
    for statement in statements.iter_mut() {
        statement.if_not_exists();
        db.execute(backend.build(&*statement)).await?;
    }

    tracing::info!("DB schema ready");
    Ok(())
}
