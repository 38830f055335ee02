//! PostgreSQL repository implementations.

pub mod file;

pub use file::PgFileRepository;
