use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use tracing::info;

use socialgraph::config::{self, GRAPHQL_PATH};
use socialgraph::core::telemetry;
use socialgraph::models::Seed;
use socialgraph::{build_schema, handlers, SocialGraph};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_subscriber()?;

    let bind = config::bind_address()?;
    let explorer = config::graphiql_enabled();

    let seed = match config::seed_file() {
        Some(path) => {
            info!(path = %path.display(), "loading seed data");
            Seed::from_path(&path)?
        }
        None => Seed::builtin()?,
    };
    let store = Arc::new(SocialGraph::from_seed(seed));
    info!(
        users = store.user_count(),
        posts = store.post_count(),
        "social graph ready"
    );

    let schema = build_schema(store);

    info!("GraphQL server listening on http://{}{}", bind, GRAPHQL_PATH);
    if explorer {
        info!("GraphiQL explorer enabled at GET {}", GRAPHQL_PATH);
    }

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(schema.clone()))
            .configure(|cfg| handlers::configure(cfg, explorer))
    })
    .bind(bind)
    .with_context(|| format!("Failed to bind {}", bind))?
    .run()
    .await
    .context("HTTP server terminated with an error")?;

    Ok(())
}
