//! Content store backends.
//!
//! Provides two [`ContentStore`] implementations:
//! - [`CosmicStore`] - Cosmic REST API over HTTPS
//! - [`InMemoryStore`] - Fixture file loaded at startup

mod cosmic_store;
mod memory_store;

pub use cosmic_store::{CosmicSetupError, CosmicStore, OBJECT_PROPS, query_json};
pub use memory_store::{FixtureError, InMemoryStore};

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::domain::repositories::ContentStore;

/// Builds the store selected by the configuration.
///
/// A fixture path selects [`InMemoryStore`]; otherwise [`CosmicStore`] is used.
///
/// # Errors
///
/// Returns an error if the fixture file cannot be loaded or the HTTP client
/// cannot be built.
pub fn from_config(config: &Config) -> Result<Arc<dyn ContentStore>> {
    if let Some(ref path) = config.fixtures_path {
        let store = InMemoryStore::from_path(path)
            .with_context(|| format!("Failed to load fixtures from {}", path.display()))?;
        tracing::info!("Content store: fixtures ({} objects)", store.len());
        return Ok(Arc::new(store));
    }

    let store = CosmicStore::new(&config.store).context("Failed to set up Cosmic store")?;
    tracing::info!("Content store: Cosmic ({})", store.endpoint());
    Ok(Arc::new(store))
}
