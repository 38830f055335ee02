//! # fileshelf-auth
//!
//! Resolves session tokens to the users they are bound to.
//!
//! Tokens are minted and expired by the external Auth Service, which keeps
//! them in the shared key/value cache. This crate only reads them.
//!
//! ## Modules
//!
//! - `session`: token lookups against the cache
//! - `resolver`: turns a request credential into a caller identity

pub mod resolver;
pub mod session;

pub use resolver::AuthResolver;
pub use session::CacheSessionLookup;
