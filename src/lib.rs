//! # Content Site
//!
//! A blog and car catalog served from a headless CMS (Cosmic), built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Content entities, relation schema, store trait
//! - **Application Layer** ([`application`]) - The content repository
//! - **Infrastructure Layer** ([`infrastructure`]) - Cosmic HTTP and fixture stores
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered pages
//!
//! ## Features
//!
//! - Blog (posts, authors, categories) and catalog (cars, brands, categories) variants
//! - Explicit relation depth on every store query
//! - Catalog listings ordered by ascending price
//! - Offline development against a fixture file
//!
//! ## Quick Start
//!
//! ```bash
//! export COSMIC_BUCKET_SLUG="premium-motors"
//! export COSMIC_READ_KEY="..."
//! export SITE_VARIANT="catalog"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ContentRepository;
    pub use crate::domain::entities::{
        ContentItem, ContentType, Relation, RelationDepth, SiteVariant,
    };
    pub use crate::domain::repositories::{ContentStore, ObjectPage, ObjectQuery, StoreError};
    pub use crate::error::{AppError, ContentError, Operation};
    pub use crate::infrastructure::stores::{CosmicStore, InMemoryStore};
    pub use crate::state::{AppState, SiteContext};
}
