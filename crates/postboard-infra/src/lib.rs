//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//! Posts live in process memory only: the store starts empty and is
//! discarded with the process.

pub mod memory;

pub use memory::InMemoryPostRepository;
