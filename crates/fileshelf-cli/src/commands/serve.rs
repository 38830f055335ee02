//! Run the HTTP server.

use clap::Args;

use fileshelf_core::config::AppConfig;
use fileshelf_core::error::AppError;

use crate::output;

/// Overrides applied on top of the loaded configuration
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen on this port instead of `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind this address instead of `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Document store backend to read from
    #[arg(long, value_parser = ["memory", "postgres"])]
    pub store: Option<String>,

    /// Skip applying migrations at startup
    #[arg(long)]
    pub no_migrate: bool,
}

impl ServeArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(store) = &self.store {
            config.database.provider.clone_from(store);
        }
        if self.no_migrate {
            config.database.auto_migrate = false;
        }
    }
}

/// Serve `GET /files` and `GET /files/{id}` until shutdown
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    args.apply(&mut config);

    output::print_kv("Listening on", &format!("{}:{}", config.server.host, config.server.port));
    output::print_kv("Document store", &config.database.provider);
    output::print_kv("Session cache", &config.cache.provider);

    fileshelf_api::run_server(config).await
}
