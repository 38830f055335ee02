//! # fileshelf-service
//!
//! Read-only use cases over file documents. Every operation takes the
//! caller's [`Credentials`] explicitly and runs the same pipeline:
//! authenticate, validate identifiers, query the owner-scoped store.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod file;

pub use context::Credentials;
pub use file::{FileAccessService, FileListingService, FileRepository};
