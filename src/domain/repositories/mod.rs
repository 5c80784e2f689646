//! Store trait definitions for the domain layer.
//!
//! This module defines the interface that abstracts reads from the remote
//! content store. It is implemented by concrete stores in the infrastructure
//! layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::stores`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod content_store;

pub use content_store::{ContentStore, ObjectPage, ObjectQuery, RelationFilter, StoreError};

#[cfg(test)]
pub use content_store::MockContentStore;
