//! Pomodoro Server - Timer sessions driven by caller-supplied timestamps
//!
//! This is the main entry point for the pomodoro-server application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use pomodoro_server::{
    config::Config,
    state::AppState,
    api::create_router,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_server={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pomodoro-server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, frontend={}",
          config.host, config.port, config.frontend_dir.display());

    if !config.frontend_dir.join("index.html").is_file() {
        warn!("No index.html in {}, frontend will not be served", config.frontend_dir.display());
    }

    let state = Arc::new(AppState::new(config.port, config.host.clone()));
    let app = create_router(state, &config.frontend_dir);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST  /api/v1/sessions      - Create and start a session");
    info!("  GET   /api/v1/sessions/:id  - Query a session (?now_ms=)");
    info!("  PATCH /api/v1/sessions/:id  - pause | resume | stop | skip");
    info!("  GET   /api/v1/health        - Health check");
    info!("  GET   /                     - Frontend");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
