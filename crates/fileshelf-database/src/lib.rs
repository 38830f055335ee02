//! # fileshelf-database
//!
//! Document store access for FileShelf: PostgreSQL connection management,
//! migrations, and the owner-scoped file repositories (PostgreSQL and
//! in-memory) behind the [`FileStore`] dispatcher.

pub mod connection;
#[cfg(feature = "memory")]
pub mod memory;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::FileStore;
