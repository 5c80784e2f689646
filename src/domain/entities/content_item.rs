//! ContentItem entity: a single object read from the content store.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DefaultOnNull, serde_as};

use super::content_type::Relation;
use super::entry::Entry;

/// An object as returned by the content store, after normalization.
///
/// `metadata` is the open, type-specific field map. Relation fields inside it
/// are either fully expanded objects or absent; see
/// [`crate::domain::normalize::normalize_object`].
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub object_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl ContentItem {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Reads a numeric metadata field, accepting numbers and numeric strings.
    ///
    /// Non-finite values are treated as missing.
    pub fn number(&self, key: &str) -> Option<f64> {
        let value = match self.metadata.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        value.is_finite().then_some(value)
    }

    /// Price used for catalog ordering; a missing price counts as `0`.
    pub fn price(&self) -> f64 {
        self.number("price").unwrap_or(0.0)
    }

    /// The expanded object behind a relation field, if present.
    pub fn related(&self, relation: Relation) -> Option<ContentItem> {
        let value = self.metadata.get(relation.as_str())?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Id of the object a relation field points at.
    pub fn related_id(&self, relation: Relation) -> Option<&str> {
        relation_id(self.metadata.get(relation.as_str())?)
    }

    /// Site path of the item, `/{type}/{slug}`.
    pub fn url_path(&self) -> String {
        format!("/{}/{}", self.object_type, self.slug)
    }

    /// Converts into a typed view with metadata shape `M`.
    ///
    /// Null metadata values, at any nesting level, are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when the metadata does not fit `M`.
    pub fn into_typed<M: DeserializeOwned>(self) -> Result<Entry<M>, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let Some(metadata) = value.get_mut("metadata") {
            strip_nulls(metadata);
        }
        serde_json::from_value(value)
    }
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

/// Id carried by a relation value: either a bare id string or an expanded object.
pub fn relation_id(value: &Value) -> Option<&str> {
    match value {
        Value::String(id) => Some(id.as_str()),
        Value::Object(object) => object.get("id").and_then(Value::as_str),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn car(metadata: Value) -> ContentItem {
        serde_json::from_value(json!({
            "id": "car-1",
            "slug": "porsche-911",
            "title": "Porsche 911",
            "type": "cars",
            "metadata": metadata,
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_tolerates_null_metadata_and_missing_timestamps() {
        let item: ContentItem = serde_json::from_value(json!({
            "id": "c1",
            "slug": "suv",
            "title": "SUV",
            "metadata": null,
        }))
        .unwrap();

        assert!(item.metadata.is_empty());
        assert!(item.created_at.is_none());
        assert_eq!(item.object_type, "");
    }

    #[test]
    fn test_deserialize_timestamps() {
        let item: ContentItem = serde_json::from_value(json!({
            "id": "c1",
            "slug": "suv",
            "title": "SUV",
            "type": "categories",
            "metadata": {},
            "created_at": "2024-03-01T10:00:00.000Z",
            "modified_at": "2024-03-02T12:30:00.000Z",
        }))
        .unwrap();

        assert!(item.created_at.unwrap() < item.modified_at.unwrap());
    }

    #[test]
    fn test_price_accepts_numbers_and_numeric_strings() {
        assert_eq!(car(json!({ "price": 30000 })).price(), 30000.0);
        assert_eq!(car(json!({ "price": "25000.50" })).price(), 25000.5);
        assert_eq!(car(json!({})).price(), 0.0);
        assert_eq!(car(json!({ "price": null })).price(), 0.0);
        assert_eq!(car(json!({ "price": "call us" })).price(), 0.0);
        assert_eq!(car(json!({ "price": "NaN" })).price(), 0.0);
    }

    #[test]
    fn test_related_reads_expanded_objects_only() {
        let expanded = car(json!({
            "brand": { "id": "b1", "slug": "porsche", "title": "Porsche", "metadata": { "name": "Porsche" } }
        }));
        let brand = expanded.related(Relation::Brand).unwrap();
        assert_eq!(brand.slug, "porsche");
        assert_eq!(expanded.related_id(Relation::Brand), Some("b1"));

        let bare = car(json!({ "brand": "b1" }));
        assert!(bare.related(Relation::Brand).is_none());
        assert_eq!(bare.related_id(Relation::Brand), Some("b1"));
    }

    #[test]
    fn test_into_typed_treats_nulls_as_absent() {
        use crate::domain::entities::PostMetadata;

        let item: ContentItem = serde_json::from_value(json!({
            "id": "p1",
            "slug": "hello",
            "title": "Hello",
            "type": "posts",
            "metadata": {
                "excerpt": null,
                "featured_image": { "url": "https://cdn.example.com/a.jpg", "imgix_url": null }
            }
        }))
        .unwrap();

        let post = item.into_typed::<PostMetadata>().unwrap();
        assert_eq!(post.metadata.excerpt, "");
        assert_eq!(post.metadata.featured_image.unwrap().imgix_url, "");
    }

    #[test]
    fn test_url_path() {
        assert_eq!(car(json!({})).url_path(), "/cars/porsche-911");
    }
}
