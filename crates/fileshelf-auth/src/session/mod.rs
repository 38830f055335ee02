//! Session token lookups.

pub mod store;

pub use store::CacheSessionLookup;
