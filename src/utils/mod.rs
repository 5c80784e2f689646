//! Utility functions for endpoint handling, slugs, and display formatting.
//!
//! This module provides helper functions used across the application:
//!
//! - [`api_url`] - Store API URL parsing and endpoint construction
//! - [`slug`] - URL-safe slug validation
//! - [`format`] - Price and date formatting for templates

pub mod api_url;
pub mod format;
pub mod slug;
