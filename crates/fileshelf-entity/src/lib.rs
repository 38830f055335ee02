//! # fileshelf-entity
//!
//! Domain entity models for FileShelf. Every struct in this crate
//! represents a stored document or a query over stored documents.
//! Stored entities derive `sqlx::FromRow`.

pub mod file;
