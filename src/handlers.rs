use actix_web::{guard, web, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use tracing::{warn, Instrument};
use uuid::Uuid;

use crate::config::GRAPHQL_PATH;
use crate::graphql::SocialSchema;

/// Execute one GraphQL request (POST body or GET query string).
pub async fn graphql(schema: web::Data<SocialSchema>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "graphql",
        %request_id,
        operation = request.operation_name.as_deref().unwrap_or("-"),
    );

    let response = schema.execute(request).instrument(span.clone()).await;
    if response.is_err() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        span.in_scope(|| warn!(errors = ?messages, "request completed with errors"));
    }
    response.into()
}

pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Plain `GET` with the explorer switched off: there is nothing to execute.
pub async fn missing_query() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({"error": "GET requests must carry a query string"}))
}

/// A browser opening the endpoint sends no query string.
fn wants_explorer(ctx: &guard::GuardContext<'_>) -> bool {
    ctx.head().uri.query().map_or(true, str::is_empty)
}

/// Register the GraphQL endpoint. A plain `GET` gets the explorer when
/// `explorer` is set and a 400 otherwise.
pub fn configure(cfg: &mut web::ServiceConfig, explorer: bool) {
    let plain_get = web::get().guard(guard::fn_guard(wants_explorer));
    let plain_get = if explorer {
        plain_get.to(graphiql)
    } else {
        plain_get.to(missing_query)
    };

    cfg.service(
        web::resource(GRAPHQL_PATH)
            .route(web::post().to(graphql))
            .route(plain_get)
            .route(web::get().to(graphql)),
    );
}
