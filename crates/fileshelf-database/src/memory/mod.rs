//! In-process document store used for development and tests.

pub mod file;

pub use file::MemoryFileRepository;
