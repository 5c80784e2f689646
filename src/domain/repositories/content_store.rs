//! Store trait for reading raw objects from the remote content store.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{ContentType, Relation, RelationDepth, relation_id};

/// Restricts a query to objects whose relation field points at one object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationFilter {
    pub relation: Relation,
    pub related_id: String,
}

impl RelationFilter {
    /// Store-side filter key, e.g. `metadata.category`.
    pub fn field_path(&self) -> String {
        format!("metadata.{}", self.relation.as_str())
    }

    /// True if the raw object's relation field holds `related_id`, either as a
    /// bare id or as an expanded object.
    pub fn matches(&self, raw: &Value) -> bool {
        raw.get("metadata")
            .and_then(|metadata| metadata.get(self.relation.as_str()))
            .and_then(relation_id)
            .is_some_and(|id| id == self.related_id)
    }
}

/// A single request against the content store.
///
/// The relation depth is always explicit; the store never falls back to an
/// implicit default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectQuery {
    pub content_type: ContentType,
    pub slug: Option<String>,
    pub relation: Option<RelationFilter>,
    pub depth: RelationDepth,
}

impl ObjectQuery {
    /// All objects of a type.
    pub fn all(content_type: ContentType, depth: RelationDepth) -> Self {
        Self {
            content_type,
            slug: None,
            relation: None,
            depth,
        }
    }

    /// The object of a type with the given slug.
    pub fn by_slug(content_type: ContentType, slug: impl Into<String>, depth: RelationDepth) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::all(content_type, depth)
        }
    }

    /// Objects of a type whose `relation` field references `related_id`.
    pub fn by_relation(
        content_type: ContentType,
        relation: Relation,
        related_id: impl Into<String>,
        depth: RelationDepth,
    ) -> Self {
        Self {
            relation: Some(RelationFilter {
                relation,
                related_id: related_id.into(),
            }),
            ..Self::all(content_type, depth)
        }
    }

    /// True if a raw object satisfies every condition of this query.
    ///
    /// An object without a `type` field is not rejected on type alone.
    pub fn matches(&self, raw: &Value) -> bool {
        let type_matches = raw
            .get("type")
            .and_then(Value::as_str)
            .is_none_or(|t| t == self.content_type.as_str());

        let slug_matches = self
            .slug
            .as_deref()
            .is_none_or(|slug| raw.get("slug").and_then(Value::as_str) == Some(slug));

        let relation_matches = self
            .relation
            .as_ref()
            .is_none_or(|filter| filter.matches(raw));

        type_matches && slug_matches && relation_matches
    }
}

/// One page of raw objects as the store returned them, in store order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ObjectPage {
    #[serde(default)]
    pub objects: Vec<Value>,
    #[serde(default)]
    pub total: u64,
}

/// Errors reported by a content store backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store answered 404. Cosmic uses this both for "no objects match"
    /// and for a missing bucket, so callers cannot tell the two apart.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("store responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed store response: {0}")]
    Decode(String),
}

impl StoreError {
    /// Classifies an HTTP error status. Only 404 counts as not-found.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == 404 {
            Self::NotFound(message)
        } else {
            Self::Status { status, message }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Short machine-readable code for logs and error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Status { status: 401 | 403, .. } => "unauthorized",
            Self::Status { .. } => "upstream_status",
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
        }
    }
}

/// Read access to the remote content store.
///
/// Implementations perform exactly one remote call per method and report a
/// store-side 404 as [`StoreError::NotFound`].
///
/// # Implementations
///
/// - [`crate::infrastructure::stores::CosmicStore`] - Cosmic REST API
/// - [`crate::infrastructure::stores::InMemoryStore`] - fixture-backed store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Finds all objects matching the query, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when nothing matches; other variants on
    /// transport, status, or decoding failures.
    async fn find(&self, query: &ObjectQuery) -> Result<ObjectPage, StoreError>;

    /// Finds the first object matching the query.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when nothing matches.
    async fn find_one(&self, query: &ObjectQuery) -> Result<Value, StoreError>;

    /// Backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_404_is_not_found() {
        assert!(StoreError::from_status(404, "No objects found").is_not_found());
        assert!(!StoreError::from_status(401, "Unauthorized").is_not_found());
        assert!(!StoreError::from_status(500, "boom").is_not_found());
        assert!(!StoreError::Transport("reset".into()).is_not_found());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(StoreError::from_status(403, "x").code(), "unauthorized");
        assert_eq!(StoreError::from_status(400, "x").code(), "upstream_status");
        assert_eq!(StoreError::Decode("x".into()).code(), "decode");
    }

    #[test]
    fn test_query_matches_type_and_slug() {
        let query = ObjectQuery::by_slug(ContentType::Posts, "hello", RelationDepth::ONE);

        assert!(query.matches(&json!({ "type": "posts", "slug": "hello" })));
        assert!(query.matches(&json!({ "slug": "hello" })));
        assert!(!query.matches(&json!({ "type": "posts", "slug": "other" })));
        assert!(!query.matches(&json!({ "type": "authors", "slug": "hello" })));
    }

    #[test]
    fn test_relation_filter_accepts_bare_and_expanded_ids() {
        let query = ObjectQuery::by_relation(
            ContentType::Posts,
            Relation::Category,
            "cat-1",
            RelationDepth::ONE,
        );

        assert!(query.matches(&json!({ "type": "posts", "metadata": { "category": "cat-1" } })));
        assert!(query.matches(&json!({
            "type": "posts",
            "metadata": { "category": { "id": "cat-1", "slug": "rust" } }
        })));
        assert!(!query.matches(&json!({ "type": "posts", "metadata": { "category": "cat-2" } })));
        assert!(!query.matches(&json!({ "type": "posts", "metadata": {} })));
        assert!(!query.matches(&json!({ "type": "posts" })));
    }

    #[test]
    fn test_field_path() {
        let filter = RelationFilter {
            relation: Relation::Brand,
            related_id: "b1".into(),
        };
        assert_eq!(filter.field_path(), "metadata.brand");
    }
}
