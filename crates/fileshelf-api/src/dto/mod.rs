//! Request and response DTOs.

pub mod response;
