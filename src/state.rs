//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ContentRepository;
use crate::domain::entities::SiteVariant;
use crate::domain::repositories::ContentStore;

/// Which site is being served and under what name.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub variant: SiteVariant,
    pub name: String,
}

impl SiteContext {
    pub fn new(variant: SiteVariant, name: impl Into<String>) -> Self {
        Self {
            variant,
            name: name.into(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentRepository<dyn ContentStore>>,
    pub site: SiteContext,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, site: SiteContext) -> Self {
        Self {
            content: Arc::new(ContentRepository::new(store)),
            site,
        }
    }

    /// Uses a pre-configured repository (for custom depth policies).
    pub fn with_repository(content: ContentRepository<dyn ContentStore>, site: SiteContext) -> Self {
        Self {
            content: Arc::new(content),
            site,
        }
    }
}
