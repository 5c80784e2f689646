//! Fixture-backed store for local development and tests.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

use crate::domain::entities::{ContentType, RelationDepth};
use crate::domain::repositories::{ContentStore, ObjectPage, ObjectQuery, StoreError};
use crate::utils::slug::is_url_safe;

/// Errors raised while loading a fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("fixture is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("object #{index}: {reason}")]
    Invalid { index: usize, reason: String },
}

impl FixtureError {
    fn invalid(index: usize, reason: impl Into<String>) -> Self {
        Self::Invalid {
            index,
            reason: reason.into(),
        }
    }
}

#[derive(Deserialize)]
struct Fixture {
    objects: Vec<Value>,
}

/// An in-memory bucket answering queries the way Cosmic does.
///
/// Objects are stored with relations as bare ids and expanded by id lookup
/// to the depth each query requests. A query matching nothing fails with
/// [`StoreError::NotFound`], mirroring Cosmic's 404.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    objects: Vec<Value>,
    by_id: HashMap<String, usize>,
}

impl InMemoryStore {
    /// Builds a store from raw objects.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Invalid`] if an object has an unknown type, an
    /// empty id, a slug that is not URL-safe, or duplicates another object's
    /// id or `(type, slug)` pair.
    pub fn new(objects: Vec<Value>) -> Result<Self, FixtureError> {
        let mut by_id = HashMap::with_capacity(objects.len());
        let mut slugs = HashSet::with_capacity(objects.len());

        for (index, object) in objects.iter().enumerate() {
            let content_type = object
                .get("type")
                .and_then(Value::as_str)
                .ok_or_else(|| FixtureError::invalid(index, "missing type"))?
                .parse::<ContentType>()
                .map_err(|e| FixtureError::invalid(index, e.to_string()))?;

            let id = object
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.trim().is_empty())
                .ok_or_else(|| FixtureError::invalid(index, "missing id"))?;

            let slug = object.get("slug").and_then(Value::as_str).unwrap_or_default();
            if !is_url_safe(slug) {
                return Err(FixtureError::invalid(
                    index,
                    format!("slug '{slug}' is not URL-safe"),
                ));
            }

            if by_id.insert(id.to_string(), index).is_some() {
                return Err(FixtureError::invalid(index, format!("duplicate id '{id}'")));
            }
            if !slugs.insert((content_type, slug.to_string())) {
                return Err(FixtureError::invalid(
                    index,
                    format!("duplicate slug '{slug}' for {content_type}"),
                ));
            }
        }

        Ok(Self { objects, by_id })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a fixture document of the form `{"objects": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let fixture: Fixture = serde_json::from_str(json)?;
        Self::new(fixture.objects)
    }

    /// Reads and parses a fixture file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let store = Self::from_json(&std::fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            objects = store.len(),
            "Loaded content fixtures"
        );
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn matching(&self, query: &ObjectQuery) -> Vec<Value> {
        self.objects
            .iter()
            .filter(|object| {
                object.get("type").and_then(Value::as_str) == Some(query.content_type.as_str())
                    && query.matches(object)
            })
            .map(|object| self.expand(object, query.depth))
            .collect()
    }

    /// Replaces bare relation ids with the referenced objects, `depth` levels deep.
    fn expand(&self, object: &Value, depth: RelationDepth) -> Value {
        let mut object = object.clone();
        if depth.is_none() {
            return object;
        }

        let Some(content_type) = object
            .get("type")
            .and_then(Value::as_str)
            .and_then(|t| t.parse::<ContentType>().ok())
        else {
            return object;
        };

        if let Some(metadata) = object.get_mut("metadata").and_then(Value::as_object_mut) {
            for relation in content_type.relations() {
                let Some(slot) = metadata.get_mut(relation.as_str()) else {
                    continue;
                };
                let Some(target) = slot
                    .as_str()
                    .and_then(|id| self.by_id.get(id))
                    .map(|&index| &self.objects[index])
                else {
                    continue;
                };
                *slot = self.expand(target, depth.descend());
            }
        }

        object
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn find(&self, query: &ObjectQuery) -> Result<ObjectPage, StoreError> {
        let objects = self.matching(query);
        if objects.is_empty() {
            return Err(StoreError::NotFound("No objects found".to_string()));
        }
        Ok(ObjectPage {
            total: objects.len() as u64,
            objects,
        })
    }

    async fn find_one(&self, query: &ObjectQuery) -> Result<Value, StoreError> {
        self.matching(query)
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound("No objects found".to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
