//! Convenience result type alias for FileShelf.

use crate::error::AppError;

/// A specialized `Result` type for FileShelf operations.
pub type AppResult<T> = Result<T, AppError>;
