//! Phenorank API server.
//!
//! Run with: cargo run -p phenorank-web

use phenorank_web::{config::Config, router::build_router, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("Phenorank starting up, version {}", env!("CARGO_PKG_VERSION"));
    match &config.loaded_from {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => tracing::warn!(
            "No {} found, using built-in defaults. Copy phenorank.example.toml to customise.",
            phenorank_web::config::DEFAULT_CONFIG_FILE
        ),
    }
    info!(
        association_file = %config.data.association_file.display(),
        phenopacket_dir = %config.data.phenopacket_dir.display(),
        "Data sources"
    );

    let addr = config.server.bind_addr();
    let state = AppState::bootstrap(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
