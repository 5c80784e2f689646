//! Top-level router configuration combining API and site routes.
//!
//! # Route Structure
//!
//! - `GET  /`, `/{type}/{slug}` - Site pages for the configured variant
//! - `GET  /health`             - Health check: content store reachability
//! - `/api/content/*`           - Read-only JSON API
//! - `/static/*`                - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::RateLimitConfig;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::fallback_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `limits` - when set, `/api` is rate limited per peer IP; the server
///   must then provide `ConnectInfo<SocketAddr>`
pub fn app_router(state: AppState, limits: Option<RateLimitConfig>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(site_router(state, limits))
}

/// The router without path normalization.
pub fn site_router(state: AppState, limits: Option<RateLimitConfig>) -> Router {
    let limiter = limits.as_ref().and_then(rate_limit::layer);
    let api_router = match limiter {
        Some(limiter) => api::routes::content_routes().layer(limiter),
        None => api::routes::content_routes(),
    };

    Router::new()
        .merge(web::routes::site_routes(state.site.variant))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
}
