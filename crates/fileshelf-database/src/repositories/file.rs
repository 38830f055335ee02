//! File document repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use fileshelf_core::error::{AppError, ErrorKind};
use fileshelf_core::result::AppResult;
use fileshelf_core::traits::repository::Repository;
use fileshelf_core::types::pagination::PageRequest;
use fileshelf_entity::file::{FileDocument, FileFilter};

const SELECT_FILES: &str = "SELECT id, user_id, name, kind, is_public, parent_id, extra FROM files";

/// Owner-scoped, read-only queries over the `files` table.
#[derive(Debug, Clone)]
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build `SELECT ... WHERE <filter>` with every condition bound.
    fn filtered(filter: &FileFilter) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new(SELECT_FILES);
        query.push(" WHERE user_id = ").push_bind(filter.user_id);
        if let Some(id) = filter.id {
            query.push(" AND id = ").push_bind(id);
        }
        if let Some(parent) = filter.parent_id {
            query.push(" AND parent_id = ").push_bind(parent);
        }
        query.push(" ORDER BY seq ASC");
        query
    }
}

#[async_trait]
impl Repository<FileDocument, FileFilter> for PgFileRepository {
    async fn find_one(&self, filter: &FileFilter) -> AppResult<Option<FileDocument>> {
        let mut query = Self::filtered(filter);
        query.push(" LIMIT 1");

        query
            .build_query_as::<FileDocument>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn find_many(
        &self,
        filter: &FileFilter,
        window: &PageRequest,
    ) -> AppResult<Vec<FileDocument>> {
        let limit = i64::try_from(window.limit()).unwrap_or(i64::MAX);
        let offset = i64::try_from(window.offset()).unwrap_or(i64::MAX);

        let mut query = Self::filtered(filter);
        query
            .push(" LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        query
            .build_query_as::<FileDocument>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
