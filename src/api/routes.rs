//! API route configuration.

use crate::api::handlers::{get_content_handler, list_content_handler, related_content_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only content routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /content/{type}`                       - All items of a type
/// - `GET /content/{type}/{slug}`                - One item by slug
/// - `GET /content/{type}/related/{field}/{id}`  - Items referencing an id
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/content/{content_type}", get(list_content_handler))
        .route("/content/{content_type}/{slug}", get(get_content_handler))
        .route(
            "/content/{content_type}/related/{field}/{related_id}",
            get(related_content_handler),
        )
}
