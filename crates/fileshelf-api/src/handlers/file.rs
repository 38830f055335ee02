//! File read handlers.
//!
//! Path and query values are taken as fallible extractions so that a
//! request axum cannot decode still authenticates first and then fails
//! with a JSON error.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use tracing::debug;

use fileshelf_core::error::AppError;
use fileshelf_entity::file::FileDocument;
use fileshelf_entity::file::parent::INVALID_PARENT_MESSAGE;
use fileshelf_service::file::access::NOT_FOUND_MESSAGE;

use crate::error::ApiError;
use crate::extractors::{ListFilesQuery, SessionCredentials};
use crate::state::AppState;

/// GET /files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    credentials: SessionCredentials,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<FileDocument>, ApiError> {
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => {
            let caller = state.file_access.authenticate(&credentials).await?;
            debug!(user_id = %caller, %rejection, "Undecodable file id");
            return Err(AppError::not_found(NOT_FOUND_MESSAGE).into());
        }
    };

    let file = state.file_access.get_one(&credentials, &id).await?;
    Ok(Json(file))
}

/// GET /files?parentId=...&page=...
pub async fn list_files(
    State(state): State<AppState>,
    credentials: SessionCredentials,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<FileDocument>>, ApiError> {
    let query = match query {
        Ok(Query(pairs)) => ListFilesQuery::from_pairs(pairs),
        Err(rejection) => {
            let caller = state.file_listing.authenticate(&credentials).await?;
            debug!(user_id = %caller, %rejection, "Undecodable listing query");
            return Err(AppError::invalid_argument(INVALID_PARENT_MESSAGE).into());
        }
    };

    let files = state
        .file_listing
        .list(
            &credentials,
            query.parent_id.as_deref(),
            query.page.as_deref(),
        )
        .await?;
    Ok(Json(files))
}
