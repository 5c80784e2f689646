//! Server-rendered site pages.
//!
//! Uses Askama templates under `templates/`. Every page fetches its content
//! per request through [`crate::application::services::ContentRepository`].
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers and error pages
//! - [`routes`] - Route tables for the blog and catalog variants
//! - [`views`] - Flat view models passed to templates

pub mod handlers;
pub mod routes;
pub mod views;
