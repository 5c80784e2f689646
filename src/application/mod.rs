//! Application layer services.
//!
//! Services consume the [`crate::domain::repositories::ContentStore`] trait and
//! give HTTP handlers and the CLI a typed, error-classified API.
//!
//! # Available Services
//!
//! - [`services::content_repository::ContentRepository`] - Content listing and lookup

pub mod services;
