//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response for the running site.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub variant: String,
    pub site_name: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreCheck,
}

/// Result of probing the content store with one listing.
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub status: String,
    pub backend: String,

    /// Number of primary-type items the probe returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StoreCheck {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
