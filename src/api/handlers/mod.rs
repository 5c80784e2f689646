//! HTTP request handlers for API endpoints.

pub mod content;
pub mod health;

pub use content::{get_content_handler, list_content_handler, related_content_handler};
pub use health::health_handler;
