//! # fileshelf-api
//!
//! HTTP API layer for FileShelf built on Axum.
//!
//! Provides the read-only file endpoints and the health check, plus
//! middleware (CORS, compression, request logging), extractors, DTOs,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
