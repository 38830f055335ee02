//! Core type definitions used across the FileShelf workspace.

pub mod id;
pub mod pagination;

pub use id::*;
pub use pagination::{PAGE_SIZE, PageRequest};
