//! Data Transfer Objects for API responses.

pub mod content;
pub mod health;
