//! FileShelf Server: read-only file metadata service
//!
//! Main entry point that loads configuration, sets up logging, and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use fileshelf_core::config::AppConfig;
use fileshelf_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Starting FileShelf v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = fileshelf_api::run_server(config).await {
        tracing::error!(error = ?e, "Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("FILESHELF_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("FILESHELF_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
