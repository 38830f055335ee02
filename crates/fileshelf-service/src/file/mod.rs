//! File document services.

pub mod access;
pub mod listing;

pub use access::FileAccessService;
pub use listing::FileListingService;

use fileshelf_core::traits::repository::Repository;
use fileshelf_entity::file::{FileDocument, FileFilter};

/// Read access to file documents, whatever store backs them.
pub type FileRepository = dyn Repository<FileDocument, FileFilter>;

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;

    use fileshelf_auth::AuthResolver;
    use fileshelf_core::result::AppResult;
    use fileshelf_core::traits::session::SessionLookup;
    use fileshelf_core::types::{FileId, UserId};
    use fileshelf_entity::file::{FileDocument, FileKind, ParentRef};

    /// Session lookup answering from a fixed token table.
    #[derive(Debug, Default)]
    pub struct FixedSessions(pub HashMap<String, String>);

    #[async_trait]
    impl SessionLookup for FixedSessions {
        async fn lookup(&self, token: &str) -> AppResult<Option<String>> {
            Ok(self.0.get(token).cloned())
        }
    }

    /// Resolver knowing `tokens` as `(token, user id)` pairs.
    pub fn resolver(tokens: &[(&str, &str)]) -> Arc<AuthResolver> {
        let table = tokens
            .iter()
            .map(|(t, u)| (t.to_string(), u.to_string()))
            .collect();
        Arc::new(AuthResolver::new(Arc::new(FixedSessions(table))))
    }

    pub fn document(owner: UserId, parent: ParentRef, name: &str) -> FileDocument {
        FileDocument {
            id: FileId::random(),
            user_id: owner,
            name: name.to_string(),
            kind: FileKind::File,
            is_public: false,
            parent_id: parent,
            extra: Default::default(),
        }
    }
}
