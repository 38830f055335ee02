//! In-memory file document repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use fileshelf_core::result::AppResult;
use fileshelf_core::traits::repository::Repository;
use fileshelf_core::types::pagination::PageRequest;
use fileshelf_entity::file::{FileDocument, FileFilter};

/// File documents kept in insertion order behind a read/write lock.
///
/// Clones share the same underlying collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileRepository {
    documents: Arc<RwLock<Vec<FileDocument>>>,
}

impl MemoryFileRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with `documents`, in order.
    pub fn with_documents(documents: impl IntoIterator<Item = FileDocument>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents.into_iter().collect())),
        }
    }

    /// Append a document. Later documents sort after earlier ones.
    pub async fn insert(&self, document: FileDocument) {
        debug!(file_id = %document.id, user_id = %document.user_id, "Inserting file document");
        self.documents.write().await.push(document);
    }
}

#[async_trait]
impl Repository<FileDocument, FileFilter> for MemoryFileRepository {
    async fn find_one(&self, filter: &FileFilter) -> AppResult<Option<FileDocument>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|doc| filter.matches(doc)).cloned())
    }

    async fn find_many(
        &self,
        filter: &FileFilter,
        window: &PageRequest,
    ) -> AppResult<Vec<FileDocument>> {
        let skip = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(window.limit()).unwrap_or(usize::MAX);

        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
