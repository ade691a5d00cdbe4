//! # Postboard Shared
//!
//! Wire types for the HTTP API: request bodies, response bodies and the
//! error body.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
