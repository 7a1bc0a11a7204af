//! Receipt Processor HTTP server.

use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use receipt_processor::api::{AppState, create_router};
use receipt_processor::config::{ConfigLoader, ServerConfig};

/// Initialize logging and tracing.
///
/// `RUST_LOG` wins when set; otherwise the configured filter applies.
fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

async fn run(config: ServerConfig) -> std::io::Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(address = %address, "Server is running");

    let router = create_router(AppState::in_memory());
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ConfigLoader::from_env() {
        Ok(loader) => loader.server().clone(),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::from(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        error!("Server error: {}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
