//! Typed views over normalized content items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content item whose metadata has been read into a concrete shape `M`.
///
/// Built from a [`super::ContentItem`] via
/// [`super::ContentItem::into_typed`]; templates render these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry<M> {
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub object_type: String,
    #[serde(default)]
    pub content: Option<String>,
    pub metadata: M,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

impl<M> Entry<M> {
    pub fn url_path(&self) -> String {
        format!("/{}/{}", self.object_type, self.slug)
    }
}

/// An uploaded media file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    pub url: String,
    pub imgix_url: String,
}

impl Media {
    /// Image URL with imgix transformation parameters, e.g. `w=64&h=64&fit=crop`.
    pub fn sized(&self, params: &str) -> String {
        let base = if self.imgix_url.is_empty() {
            &self.url
        } else {
            &self.imgix_url
        };
        format!("{base}?{params}&auto=format,compress")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryMetadata {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Shared taxonomy used by both site variants.
pub type Category = Entry<CategoryMetadata>;

impl Entry<CategoryMetadata> {
    /// Display name, falling back to the object title.
    pub fn label(&self) -> &str {
        if self.metadata.name.is_empty() {
            &self.title
        } else {
            &self.metadata.name
        }
    }

    pub fn badge_color(&self) -> &str {
        self.metadata.color.as_deref().unwrap_or("#6b7280")
    }
}
