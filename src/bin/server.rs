//! Holiday Analyzer HTTP Server Binary
//!
//! This is the main entry point for the holiday analyzer REST API server.
//! It loads configuration, initializes the repository with seed data, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin holiday-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `ADMIN_USERNAME` / `ADMIN_PASSWORD_SHA256`: Admin credentials
//! - `JWT_SECRET`: Token signing secret
//! - `NAGER_BASE_URL`: Public holiday provider base URL
//! - `SEED_ON_START`: Load reference data on startup (default: true)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use holiday_analyzer::auth::TokenService;
use holiday_analyzer::clients::NagerClient;
use holiday_analyzer::config::AppConfig;
use holiday_analyzer::db::repository::FullRepository;
use holiday_analyzer::db::{self, LocalRepository};
use holiday_analyzer::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Holiday Analyzer HTTP Server");

    let config = AppConfig::load().map_err(|e| anyhow::anyhow!(e))?;

    let repository: Arc<dyn FullRepository> = Arc::new(LocalRepository::new());
    if config.seed.enabled {
        db::seed_reference_data(repository.as_ref())
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    info!("Repository initialized successfully");

    let provider = Arc::new(NagerClient::new(&config.import.base_url));
    let tokens = Arc::new(TokenService::new(
        &config.auth.jwt_secret,
        config.auth.token_ttl_seconds,
    ));

    let addr: SocketAddr = config.bind_address().parse()?;

    // Create application state and router
    let state = AppState::new(repository, provider, tokens, Arc::new(config));
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
