use actix_web::{http::header, web, HttpRequest, HttpResponse};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use graphql::{with_request_context, AppSchema};
use sea_orm::DatabaseConnection;
use services::authentication::Token;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/graphql", web::post().to(graphql_request))
        .route("/graphql", web::get().to(graphql_playground))
        .route("/health", web::get().to(health));
}

/// The raw `Authorization` value; `Token` strips an optional `Bearer ` itself.
fn authorization_token(req: &HttpRequest) -> Option<Token> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| Token::new(value.to_string()))
}

async fn graphql_request(
    schema: web::Data<AppSchema>,
    db: web::Data<DatabaseConnection>,
    http_request: HttpRequest,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let token = authorization_token(&http_request);
    let request = with_request_context(request.into_inner(), &db.into_inner(), token);
    schema.execute(request).await.into()
}

async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn health() -> &'static str {
    "ok"
}
