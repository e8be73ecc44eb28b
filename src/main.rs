//! SWAPI GraphQL server
//!
//! Serves the Relay-style GraphQL API over a SQLite database.

use std::net::SocketAddr;

use anyhow::Result;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swapi_graphql::graphql::service;
use swapi_graphql::{Config, Database, build_schema};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swapi_graphql=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting SWAPI GraphQL server");

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let db = Database::connect_with_max(&config.database_url, config.database_max_connections)
        .await?;
    db.migrate().await?;
    tracing::info!(url = %config.database_url, "Database connected");

    let schema = build_schema(db);
    tracing::info!("GraphQL schema built");

    let app = service::router(schema)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);
    tracing::info!("GraphQL playground: {}/graphql", config.public_url());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
