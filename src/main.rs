//! Catalog service entry point.
//!
//! All operations are exposed via GraphQL at /graphql.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use catalog::app::{AppState, build_app};
use catalog::catalog::CatalogStore;
use catalog::cli::CliOptions;
use catalog::config::Config;
use catalog::graphql::build_schema;
use catalog::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = CliOptions::from_args();

    let mut config = Config::from_env()?;
    if let Some(port) = cli.port_override {
        config.port = port;
    }
    if cli.no_seed {
        config.seed_data = false;
    }

    if cli.print_schema {
        let schema = build_schema(Arc::new(CatalogStore::new()));
        println!("{}", schema.sdl());
        return Ok(());
    }

    init_tracing(config.log_format);
    tracing::info!("Starting catalog service");

    let store = if config.seed_data {
        CatalogStore::seeded()
    } else {
        CatalogStore::new()
    };
    let store = Arc::new(store);
    tracing::info!(
        books = store.book_count(),
        authors = store.author_count(),
        seeded = config.seed_data,
        "Catalog loaded"
    );

    let app = build_app(AppState::new(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("Server ready at {}", config.graphql_url());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
