//! Owner-scoped query filters over file documents.

use fileshelf_core::types::{FileId, UserId};

use super::model::FileDocument;
use super::parent::ParentRef;

/// Match conditions for file document queries.
///
/// The owner is mandatory, so every query built from a filter is
/// owner-scoped. The remaining conditions are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    /// Required owner.
    pub user_id: UserId,
    /// Exact document id, if set.
    pub id: Option<FileId>,
    /// Exact parent, if set.
    pub parent_id: Option<ParentRef>,
}

impl FileFilter {
    /// Match every document owned by `user_id`.
    pub fn owned_by(user_id: UserId) -> Self {
        Self {
            user_id,
            id: None,
            parent_id: None,
        }
    }

    /// Restrict to the document with `id`.
    pub fn with_id(mut self, id: FileId) -> Self {
        self.id = Some(id);
        self
    }

    /// Restrict to the children of `parent`.
    pub fn with_parent(mut self, parent: ParentRef) -> Self {
        self.parent_id = Some(parent);
        self
    }

    /// Evaluate the filter against a document.
    pub fn matches(&self, doc: &FileDocument) -> bool {
        doc.user_id == self.user_id
            && self.id.is_none_or(|id| doc.id == id)
            && self.parent_id.is_none_or(|parent| doc.parent_id == parent)
    }
}
