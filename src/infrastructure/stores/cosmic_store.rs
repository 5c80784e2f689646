//! Cosmic REST API (v3) store.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::config::StoreConfig;
use crate::domain::repositories::{ContentStore, ObjectPage, ObjectQuery, StoreError};
use crate::utils::api_url::{ApiUrlError, objects_endpoint};

/// Object properties requested from Cosmic on every read.
pub const OBJECT_PROPS: &str = "id,slug,title,type,content,metadata,created_at,modified_at";

/// Errors raised while constructing a [`CosmicStore`].
#[derive(Debug, thiserror::Error)]
pub enum CosmicSetupError {
    #[error("invalid Cosmic endpoint: {0}")]
    Endpoint(#[from] ApiUrlError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Reads objects from a Cosmic bucket over HTTPS.
///
/// One HTTP client is built at construction and shared by every request. Each
/// trait method issues exactly one `GET {api}/buckets/{bucket}/objects`; a 404
/// response is reported as [`StoreError::NotFound`].
pub struct CosmicStore {
    client: Client,
    endpoint: Url,
    read_key: String,
}

impl CosmicStore {
    /// Builds the store for the configured bucket.
    ///
    /// # Errors
    ///
    /// Returns [`CosmicSetupError`] if the endpoint cannot be derived from the
    /// API URL or the HTTP client cannot be built.
    pub fn new(config: &StoreConfig) -> Result<Self, CosmicSetupError> {
        let endpoint = objects_endpoint(&config.api_url, &config.bucket_slug)?;

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            endpoint,
            read_key: config.read_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch(&self, query: &ObjectQuery, limit: Option<u32>) -> Result<ObjectPage, StoreError> {
        let params = query_params(query, &self.read_key, limit);

        debug!(
            content_type = %query.content_type,
            depth = %query.depth,
            slug = query.slug.as_deref(),
            "Querying Cosmic"
        );

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&params)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(format!("read body failed: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            return Err(StoreError::from_status(status.as_u16(), message));
        }

        serde_json::from_str::<ObjectPage>(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ContentStore for CosmicStore {
    async fn find(&self, query: &ObjectQuery) -> Result<ObjectPage, StoreError> {
        self.fetch(query, None).await
    }

    async fn find_one(&self, query: &ObjectQuery) -> Result<Value, StoreError> {
        self.fetch(query, Some(1))
            .await?
            .objects
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound("No objects found".to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "cosmic"
    }
}

/// Cosmic `query` parameter: `{"type": ..., "slug"?: ..., "metadata.<field>"?: ...}`.
pub fn query_json(query: &ObjectQuery) -> Value {
    let mut filter = Map::new();
    filter.insert("type".into(), Value::from(query.content_type.as_str()));
    if let Some(ref slug) = query.slug {
        filter.insert("slug".into(), Value::from(slug.as_str()));
    }
    if let Some(ref relation) = query.relation {
        filter.insert(
            relation.field_path(),
            Value::from(relation.related_id.as_str()),
        );
    }
    Value::Object(filter)
}

fn query_params(query: &ObjectQuery, read_key: &str, limit: Option<u32>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("read_key", read_key.to_string()),
        ("query", query_json(query).to_string()),
        ("props", OBJECT_PROPS.to_string()),
        ("depth", query.depth.levels().to_string()),
    ];
    if let Some(limit) = limit {
        params.push(("limit", limit.to_string()));
    }
    params
}
