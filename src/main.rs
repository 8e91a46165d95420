mod config;
mod logging;
mod routes;
mod setup;

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use graphql::build_schema;
use services::authentication::AuthConfig;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use config::ServerConfig;
use setup::set_up_db;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    logging::init_logging(config.log_format);

    let db = Arc::new(set_up_db(&config.database_url).await.map_err(|e| {
        tracing::error!(error = %e, "database setup failed");
        std::io::Error::other(e)
    })?);

    let auth_config = AuthConfig::from_env();
    tracing::debug!(?auth_config, "auth configured");

    let schema = build_schema(db.clone(), auth_config);
    let allowed_origin = config.cors_allowed_origin.clone();

    tracing::info!(host = %config.host, port = config.port, "starting server");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::from(db.clone()))
            .wrap(cors)
            .wrap(TracingLogger::default())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
