//! Blog content: posts and their authors.

use serde::{Deserialize, Serialize};

use super::entry::{Category, Entry, Media};
use crate::utils::format::format_date_label;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorMetadata {
    pub full_name: String,
    pub bio: String,
    pub avatar: Option<Media>,
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
}

pub type Author = Entry<AuthorMetadata>;

impl Entry<AuthorMetadata> {
    pub fn display_name(&self) -> &str {
        if self.metadata.full_name.is_empty() {
            &self.title
        } else {
            &self.metadata.full_name
        }
    }

    pub fn twitter_url(&self) -> Option<String> {
        self.metadata
            .twitter
            .as_deref()
            .filter(|handle| !handle.is_empty())
            .map(|handle| format!("https://twitter.com/{}", handle.trim_start_matches('@')))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMetadata {
    pub content: String,
    pub excerpt: String,
    pub featured_image: Option<Media>,
    pub author: Option<Author>,
    pub category: Option<Category>,
    pub tags: Option<String>,
    pub published_date: Option<String>,
}

pub type Post = Entry<PostMetadata>;

impl Entry<PostMetadata> {
    /// Comma-separated tags, trimmed, empties dropped.
    pub fn tag_list(&self) -> Vec<String> {
        self.metadata
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Publication date as `Month D, YYYY`, when it parses.
    pub fn published_label(&self) -> Option<String> {
        self.metadata
            .published_date
            .as_deref()
            .and_then(format_date_label)
    }
}
