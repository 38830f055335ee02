//! File document entity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

use fileshelf_core::types::{FileId, UserId};

use super::kind::FileKind;
use super::parent::ParentRef;

/// A file or folder record owned by exactly one user.
///
/// Serialized with the wire names clients expect: `id`, `userId`,
/// `name`, `type`, `isPublic`, `parentId`. Any other stored field is kept
/// in `extra` and written back at the top level untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FileDocument {
    /// Unique document identifier.
    pub id: FileId,
    /// The owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Folder, file or image.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Whether the document is published.
    pub is_public: bool,
    /// Position in the hierarchy.
    pub parent_id: ParentRef,
    /// Descriptive fields owned by other services.
    #[serde(flatten)]
    #[sqlx(json)]
    pub extra: Map<String, Value>,
}
