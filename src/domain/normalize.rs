//! Normalization of raw store objects into [`ContentItem`]s.
//!
//! Relation fields within the requested depth are kept only when the store
//! returned them expanded. Relation fields beyond the depth are removed, so a
//! bare identifier never reaches the rendering layer.

use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{ContentItem, ContentType, RelationDepth};

/// A raw object that cannot be read as a content item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed {content_type} object: {reason}")]
pub struct MalformedObject {
    pub content_type: ContentType,
    pub reason: String,
}

impl MalformedObject {
    fn new(content_type: ContentType, reason: impl Into<String>) -> Self {
        Self {
            content_type,
            reason: reason.into(),
        }
    }
}

/// Reads a raw object of `content_type`, expanding relations to `depth`.
///
/// A missing `type` is filled in from `content_type`.
///
/// # Errors
///
/// Returns [`MalformedObject`] if the object does not deserialize or has an
/// empty `id` or `slug`.
pub fn normalize_object(
    raw: Value,
    content_type: ContentType,
    depth: RelationDepth,
) -> Result<ContentItem, MalformedObject> {
    let mut item: ContentItem = serde_json::from_value(raw)
        .map_err(|e| MalformedObject::new(content_type, e.to_string()))?;

    if item.id.trim().is_empty() {
        return Err(MalformedObject::new(content_type, "missing id"));
    }
    if item.slug.trim().is_empty() {
        return Err(MalformedObject::new(content_type, "missing slug"));
    }
    if item.object_type.is_empty() {
        item.object_type = content_type.as_str().to_string();
    }

    for relation in content_type.relations() {
        let key = relation.as_str();
        let Some(value) = item.metadata.remove(key) else {
            continue;
        };
        if depth.is_none() {
            continue;
        }

        match expand(value, relation.target(), depth.descend()) {
            Some(nested) => {
                item.metadata.insert(key.to_string(), nested);
            }
            None => debug!(
                content_type = %content_type,
                slug = %item.slug,
                relation = key,
                "Dropping unexpanded relation"
            ),
        }
    }

    Ok(item)
}

/// Normalizes an expanded relation value; bare ids, nulls and malformed
/// objects yield `None`.
fn expand(value: Value, target: ContentType, depth: RelationDepth) -> Option<Value> {
    if !value.is_object() {
        return None;
    }
    let nested = normalize_object(value, target, depth).ok()?;
    serde_json::to_value(nested).ok()
}
