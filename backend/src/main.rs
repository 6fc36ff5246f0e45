use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod rest;

use config::ServerConfig;
use rest::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;
    info!("Serving frontend from {}", config.static_dir.display());
    if !config.index_file().exists() {
        tracing::warn!(
            "{} not found; build the frontend first or set {}",
            config.index_file().display(),
            config::STATIC_DIR_VAR
        );
    }

    let addr = config.addr;
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
