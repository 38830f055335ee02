//! Paged listing of a folder's children.

use std::sync::Arc;

use tracing::debug;

use fileshelf_auth::AuthResolver;
use fileshelf_core::result::AppResult;
use fileshelf_core::types::UserId;
use fileshelf_core::types::pagination::PageRequest;
use fileshelf_entity::file::{FileDocument, FileFilter, ParentRef};

use super::FileRepository;
use crate::context::{Credentials, resolve_caller};

/// Lists the caller's documents under one parent, a page at a time.
#[derive(Debug, Clone)]
pub struct FileListingService {
    /// Caller identity resolution.
    auth: Arc<AuthResolver>,
    /// Document store.
    files: Arc<FileRepository>,
}

impl FileListingService {
    /// Creates a new file listing service.
    pub fn new(auth: Arc<AuthResolver>, files: Arc<FileRepository>) -> Self {
        Self { auth, files }
    }

    /// Resolves the caller without touching the store.
    pub async fn authenticate(&self, credentials: &Credentials) -> AppResult<UserId> {
        resolve_caller(&self.auth, credentials).await
    }

    /// Returns one page of the caller's documents whose parent is `parent_id`.
    ///
    /// An absent or empty `parent_id` means the root (`"0"`); any other
    /// value must be a valid identifier or the call fails with
    /// `InvalidArgument`. `page` never fails: unparseable values select
    /// page 0. A parent with no children, or a page past the end, yields
    /// an empty list.
    pub async fn list(
        &self,
        credentials: &Credentials,
        parent_id: Option<&str>,
        page: Option<&str>,
    ) -> AppResult<Vec<FileDocument>> {
        let caller = self.authenticate(credentials).await?;
        let parent = ParentRef::from_query(parent_id)?;
        let window = PageRequest::from_query(page);

        let filter = FileFilter::owned_by(caller).with_parent(parent);
        let documents = self.files.find_many(&filter, &window).await?;

        debug!(
            user_id = %caller,
            parent_id = %parent,
            page = window.page,
            count = documents.len(),
            "Listed files"
        );
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fileshelf_core::error::ErrorKind;
    use fileshelf_core::types::FileId;
    use fileshelf_database::memory::MemoryFileRepository;
    use fileshelf_entity::file::FileKind;

    use crate::file::test_support::{document, resolver};

    struct Fixture {
        service: FileListingService,
        folder: FileDocument,
        root_names: Vec<String>,
    }

    async fn fixture() -> Fixture {
        let owner = UserId::random();
        let stranger = UserId::random();
        let repo = MemoryFileRepository::new();

        let mut folder = document(owner, ParentRef::Root, "photos");
        folder.kind = FileKind::Folder;
        repo.insert(folder.clone()).await;
        let mut root_names = vec![folder.name.clone()];

        for i in 0..24 {
            let doc = document(owner, ParentRef::Root, &format!("file-{i:02}"));
            root_names.push(doc.name.clone());
            repo.insert(doc).await;
        }
        for i in 0..3 {
            repo.insert(document(owner, folder.id.into(), &format!("photo-{i}")))
                .await;
        }
        repo.insert(document(stranger, ParentRef::Root, "foreign"))
            .await;

        let owner_hex = owner.to_string();
        let auth = resolver(&[("owner-token", owner_hex.as_str())]);
        Fixture {
            service: FileListingService::new(auth, Arc::new(repo)),
            folder,
            root_names,
        }
    }

    fn names(docs: &[FileDocument]) -> Vec<String> {
        docs.iter().map(|d| d.name.clone()).collect()
    }

    fn creds() -> Credentials {
        Credentials::with_token("owner-token")
    }

    #[tokio::test]
    async fn test_root_pages_of_twenty() {
        let f = fixture().await;
        assert_eq!(f.root_names.len(), 25);

        let first = f.service.list(&creds(), Some("0"), Some("0")).await.unwrap();
        assert_eq!(names(&first), f.root_names[..20]);

        let second = f.service.list(&creds(), Some("0"), Some("1")).await.unwrap();
        assert_eq!(names(&second), f.root_names[20..]);

        let third = f.service.list(&creds(), Some("0"), Some("2")).await.unwrap();
        assert!(third.is_empty());
    }

    #[tokio::test]
    async fn test_missing_parent_means_root() {
        let f = fixture().await;
        let implicit = f.service.list(&creds(), None, None).await.unwrap();
        let empty = f.service.list(&creds(), Some(""), None).await.unwrap();
        let explicit = f.service.list(&creds(), Some("0"), None).await.unwrap();
        assert_eq!(implicit, explicit);
        assert_eq!(empty, explicit);
    }

    #[tokio::test]
    async fn test_non_numeric_page_is_page_zero() {
        let f = fixture().await;
        let baseline = f.service.list(&creds(), None, Some("0")).await.unwrap();
        for raw in ["abc", "", "-3", "NaN"] {
            let listed = f.service.list(&creds(), None, Some(raw)).await.unwrap();
            assert_eq!(listed, baseline, "page {raw:?}");
        }
    }

    #[tokio::test]
    async fn test_huge_page_is_empty() {
        let f = fixture().await;
        let listed = f
            .service
            .list(&creds(), None, Some("99999999999999999999999"))
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_folder_children() {
        let f = fixture().await;
        let parent = f.folder.id.to_string();
        let listed = f.service.list(&creds(), Some(&parent), None).await.unwrap();
        assert_eq!(names(&listed), ["photo-0", "photo-1", "photo-2"]);
        assert!(listed.iter().all(|d| d.parent_id == ParentRef::Folder(f.folder.id)));
    }

    #[tokio::test]
    async fn test_unknown_parent_is_empty() {
        let f = fixture().await;
        let parent = FileId::random().to_string();
        let listed = f.service.list(&creds(), Some(&parent), None).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_parent_is_invalid_argument() {
        let f = fixture().await;
        for bad in ["root", "00", "5f1e9b2c3d4a5b6c7d8e9f0z"] {
            let err = f.service.list(&creds(), Some(bad), None).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidArgument, "parent {bad:?}");
            assert_eq!(err.message, "Invalid parentId");
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_is_unauthorized() {
        let f = fixture().await;
        let err = f
            .service
            .list(&Credentials::anonymous(), Some("not-valid"), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);

        let err = f
            .service
            .list(&Credentials::with_token("nope"), None, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let f = fixture().await;
        let a = f.service.list(&creds(), None, Some("1")).await.unwrap();
        let b = f.service.list(&creds(), None, Some("1")).await.unwrap();
        assert_eq!(a, b);
    }
}
