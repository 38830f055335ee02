//! HTTP integration tests against the full router with in-memory backends.

mod files_test;
mod health_test;
mod helpers;
