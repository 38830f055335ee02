//! File store that dispatches to the configured document store backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use fileshelf_core::config::DatabaseConfig;
use fileshelf_core::error::AppError;
use fileshelf_core::result::AppResult;
use fileshelf_core::traits::repository::Repository;
use fileshelf_core::types::pagination::PageRequest;
use fileshelf_entity::file::{FileDocument, FileFilter};

use crate::connection::DatabasePool;
use crate::repositories::PgFileRepository;

/// Handle to the file documents, whatever backend holds them.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct FileStore {
    inner: Arc<dyn Repository<FileDocument, FileFilter>>,
    pool: Option<DatabasePool>,
}

impl FileStore {
    /// Create a file store from configuration.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL document store");
                let pool = DatabasePool::connect(config).await?;
                if config.auto_migrate {
                    pool.migrate().await?;
                }
                let repo = PgFileRepository::new(pool.pool().clone());
                Ok(Self {
                    inner: Arc::new(repo),
                    pool: Some(pool),
                })
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory document store");
                Ok(Self::from_repository(Arc::new(
                    crate::memory::MemoryFileRepository::new(),
                )))
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Create a file store from an existing repository (for testing).
    pub fn from_repository(repo: Arc<dyn Repository<FileDocument, FileFilter>>) -> Self {
        Self {
            inner: repo,
            pool: None,
        }
    }

    /// The PostgreSQL pool, when that backend is in use.
    pub fn pool(&self) -> Option<&DatabasePool> {
        self.pool.as_ref()
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

#[async_trait]
impl Repository<FileDocument, FileFilter> for FileStore {
    async fn find_one(&self, filter: &FileFilter) -> AppResult<Option<FileDocument>> {
        self.inner.find_one(filter).await
    }

    async fn find_many(
        &self,
        filter: &FileFilter,
        window: &PageRequest,
    ) -> AppResult<Vec<FileDocument>> {
        self.inner.find_many(filter, window).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
