//! Infrastructure layer for external integrations.
//!
//! Implements the [`crate::domain::repositories::ContentStore`] trait against
//! concrete backends.
//!
//! # Modules
//!
//! - [`stores`] - Cosmic HTTP and in-memory fixture stores

pub mod stores;
