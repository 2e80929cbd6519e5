//! Middleware modules.

pub mod body;
pub mod error;
