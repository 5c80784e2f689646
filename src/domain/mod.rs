//! Domain layer containing content entities and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Content data model and typed views
//! - [`repositories`] - Store trait definitions
//! - [`normalize`] - Raw object normalization and relation depth enforcement
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Store traits define contracts implemented by the infrastructure layer
//! - Retrieval rules live in services (see [`crate::application::services`])

pub mod entities;
pub mod normalize;
pub mod repositories;
