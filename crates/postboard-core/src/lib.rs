//! # Postboard Core
//!
//! The domain layer of the Postboard service.
//! This crate contains the post model, its update rules and the storage port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
