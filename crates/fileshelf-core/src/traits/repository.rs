//! Generic read-only repository trait for the document store.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::PageRequest;

/// Filtered read access to one collection of the document store.
///
/// `Filter` describes the match conditions; implementations must apply
/// every condition it carries. `find_many` returns matches in a stable
/// order (insertion order), so identical calls against unchanged data
/// return identical windows.
#[async_trait]
pub trait Repository<Entity, Filter>: Send + Sync + std::fmt::Debug + 'static
where
    Entity: Send + Sync + 'static,
    Filter: Send + Sync + 'static,
{
    /// Find the first entity matching `filter`.
    async fn find_one(&self, filter: &Filter) -> AppResult<Option<Entity>>;

    /// Find the entities matching `filter`, skipping `window.offset()` and
    /// taking at most `window.limit()`.
    async fn find_many(&self, filter: &Filter, window: &PageRequest) -> AppResult<Vec<Entity>>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
