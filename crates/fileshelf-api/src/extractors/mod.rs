//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::SessionCredentials;
pub use pagination::ListFilesQuery;
