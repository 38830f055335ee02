//! Core traits defined in `fileshelf-core` and implemented by other crates.

pub mod cache;
pub mod repository;
pub mod session;

pub use cache::CacheProvider;
pub use repository::Repository;
pub use session::SessionLookup;
