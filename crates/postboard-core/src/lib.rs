//! # Postboard Core
//!
//! The domain layer of the Postboard service.
//! Entities, error types and the ports that infrastructure implements.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
