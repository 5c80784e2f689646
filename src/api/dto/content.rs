//! DTOs for content endpoints.

use serde::Serialize;

use crate::domain::entities::ContentItem;

/// A list of content items in repository order.
#[derive(Debug, Serialize)]
pub struct ContentListResponse {
    pub content_type: String,
    pub total: usize,
    pub items: Vec<ContentItem>,
}

impl ContentListResponse {
    pub fn new(content_type: impl Into<String>, items: Vec<ContentItem>) -> Self {
        Self {
            content_type: content_type.into(),
            total: items.len(),
            items,
        }
    }
}
