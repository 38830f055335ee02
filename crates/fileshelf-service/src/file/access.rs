//! Single-document reads.

use std::sync::Arc;

use tracing::debug;

use fileshelf_auth::AuthResolver;
use fileshelf_core::error::AppError;
use fileshelf_core::result::AppResult;
use fileshelf_core::types::{FileId, UserId};
use fileshelf_entity::file::{FileDocument, FileFilter};

use super::FileRepository;
use crate::context::{Credentials, resolve_caller};

/// Message for a missing, malformed, or foreign file id.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Fetches one file document owned by the caller.
#[derive(Debug, Clone)]
pub struct FileAccessService {
    /// Caller identity resolution.
    auth: Arc<AuthResolver>,
    /// Document store.
    files: Arc<FileRepository>,
}

impl FileAccessService {
    /// Creates a new file access service.
    pub fn new(auth: Arc<AuthResolver>, files: Arc<FileRepository>) -> Self {
        Self { auth, files }
    }

    /// Resolves the caller without touching the store.
    pub async fn authenticate(&self, credentials: &Credentials) -> AppResult<UserId> {
        resolve_caller(&self.auth, credentials).await
    }

    /// Returns the document with `file_id` if the caller owns it.
    ///
    /// A malformed id, an unknown id, and another user's id all produce
    /// the same `NotFound` error.
    pub async fn get_one(
        &self,
        credentials: &Credentials,
        file_id: &str,
    ) -> AppResult<FileDocument> {
        let caller = self.authenticate(credentials).await?;

        let Ok(id) = FileId::parse_str(file_id) else {
            debug!(user_id = %caller, "Malformed file id");
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        };

        let filter = FileFilter::owned_by(caller).with_id(id);
        match self.files.find_one(&filter).await? {
            Some(document) => Ok(document),
            None => {
                debug!(user_id = %caller, file_id = %id, "File not found for caller");
                Err(AppError::not_found(NOT_FOUND_MESSAGE))
            }
        }
    }
}
