//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use fileshelf_auth::{AuthResolver, CacheSessionLookup};
use fileshelf_cache::CacheManager;
use fileshelf_core::config::AppConfig;
use fileshelf_core::result::AppResult;
use fileshelf_database::FileStore;
use fileshelf_service::{FileAccessService, FileListingService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Document store (PostgreSQL or in-memory)
    pub store: FileStore,
    /// Cache manager (Redis or in-memory), shared with the Auth Service
    pub cache: Arc<CacheManager>,

    // ── Services ─────────────────────────────────────────────
    /// Single-document reads
    pub file_access: Arc<FileAccessService>,
    /// Paged folder listings
    pub file_listing: Arc<FileListingService>,
}

impl AppState {
    /// Wires the services over an already-initialized store and cache.
    pub fn new(config: AppConfig, store: FileStore, cache: Arc<CacheManager>) -> Self {
        let sessions = CacheSessionLookup::from_config(Arc::clone(&cache), &config.auth);
        let auth = Arc::new(AuthResolver::new(Arc::new(sessions)));
        let files = Arc::new(store.clone());

        Self {
            file_access: Arc::new(FileAccessService::new(Arc::clone(&auth), files.clone())),
            file_listing: Arc::new(FileListingService::new(auth, files)),
            config: Arc::new(config),
            store,
            cache,
        }
    }

    /// Initializes the configured cache and document store, then wires the services.
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        tracing::info!(provider = %config.cache.provider, "Initializing cache");
        let cache = Arc::new(CacheManager::new(&config.cache).await?);

        tracing::info!(provider = %config.database.provider, "Initializing document store");
        let store = FileStore::new(&config.database).await?;

        Ok(Self::new(config, store, cache))
    }
}
