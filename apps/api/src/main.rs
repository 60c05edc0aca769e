mod assistant;
mod chat;
mod config;
mod contact;
mod db;
mod errors;
mod llm_client;
mod models;
mod portfolio;
mod routes;
mod seed;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::Assistant;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::routes::{build_router, with_static_files};
use crate::seed::seed_portfolio;
use crate::state::AppState;
use crate::storage::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config.database_url).await?;
    ensure_schema(&pool).await?;
    let store = Arc::new(PgStore::new(pool));

    if std::env::args().nth(1).as_deref() == Some("seed") {
        seed_portfolio(store.as_ref()).await?;
        return Ok(());
    }

    // Initialize the chat assistant
    let assistant =
        Assistant::from_credentials(config.openai_api_key.clone(), &config.openai_api_base);
    if assistant.is_available() {
        info!("Chat assistant online (model: {})", llm_client::MODEL);
    } else {
        warn!("No OPENAI_API_KEY set; chat assistant will answer with the unavailability notice");
    }

    // Build app state
    let state = AppState { store, assistant };

    // Build router
    let app = with_static_files(
        build_router(state),
        &config.assets_dir,
        config.static_dir.as_deref(),
    )
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
