//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthChecks, HealthResponse, StoreCheck};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Content store reachable
/// - **503 Service Unavailable**: Content store failing
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "variant": "catalog",
///   "site_name": "Premium Motors",
///   "checks": {
///     "store": {
///       "status": "ok",
///       "backend": "cosmic",
///       "items": 12,
///       "message": "cosmic reachable, 12 cars"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let healthy = store_check.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        variant: state.site.variant.to_string(),
        site_name: state.site.name.clone(),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Lists the variant's primary type; an empty bucket still counts as reachable.
async fn check_store(state: &AppState) -> StoreCheck {
    let primary = state.site.variant.primary_type();
    let backend = state.content.backend_name();

    match state.content.list_all(primary).await {
        Ok(items) => StoreCheck {
            status: "ok".to_string(),
            backend: backend.to_string(),
            items: Some(items.len()),
            message: Some(format!("{backend} reachable, {} {primary}", items.len())),
        },
        Err(e) => StoreCheck {
            status: "error".to_string(),
            backend: backend.to_string(),
            items: None,
            message: Some(format!("{backend}: {e}")),
        },
    }
}
