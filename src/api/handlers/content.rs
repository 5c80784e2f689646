//! Handlers for read-only content endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::content::ContentListResponse;
use crate::domain::entities::{ContentItem, ContentType, Relation};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every item of a content type.
///
/// # Endpoint
///
/// `GET /api/content/{type}`
///
/// Cars are ordered by ascending price; other types keep store order.
///
/// # Errors
///
/// - 400 if the type is unknown or not served by this site
/// - 502 if the content store fails
pub async fn list_content_handler(
    State(state): State<AppState>,
    Path(content_type): Path<String>,
) -> Result<Json<ContentListResponse>, AppError> {
    let content_type = served_type(&state, &content_type)?;
    let items = state.content.list_all(content_type).await?;
    Ok(Json(ContentListResponse::new(content_type.as_str(), items)))
}

/// Fetches one item by slug.
///
/// # Endpoint
///
/// `GET /api/content/{type}/{slug}`
///
/// # Errors
///
/// - 400 if the type is unknown
/// - 404 if no item has the slug
/// - 502 if the content store fails
pub async fn get_content_handler(
    State(state): State<AppState>,
    Path((content_type, slug)): Path<(String, String)>,
) -> Result<Json<ContentItem>, AppError> {
    let content_type = served_type(&state, &content_type)?;

    state
        .content
        .get_one(content_type, &slug)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::not_found(
                format!("No {content_type} with slug '{slug}'"),
                json!({ "content_type": content_type.as_str(), "slug": slug }),
            )
        })
}

/// Lists items whose relation field references an id.
///
/// # Endpoint
///
/// `GET /api/content/{type}/related/{field}/{id}`
///
/// # Errors
///
/// - 400 if the type or field is unknown, or the type does not declare the field
/// - 502 if the content store fails
pub async fn related_content_handler(
    State(state): State<AppState>,
    Path((content_type, field, related_id)): Path<(String, String, String)>,
) -> Result<Json<ContentListResponse>, AppError> {
    let content_type = served_type(&state, &content_type)?;
    let relation = field.parse::<Relation>().map_err(|e| {
        AppError::bad_request(e.to_string(), json!({ "field": field }))
    })?;

    let items = state
        .content
        .list_by_relation(content_type, relation, &related_id)
        .await?;

    Ok(Json(ContentListResponse::new(content_type.as_str(), items)))
}

fn served_type(state: &AppState, raw: &str) -> Result<ContentType, AppError> {
    let content_type = raw
        .parse::<ContentType>()
        .map_err(|e| AppError::bad_request(e.to_string(), json!({ "content_type": raw })))?;

    if !state.site.variant.content_types().contains(&content_type) {
        return Err(AppError::bad_request(
            format!("{content_type} are not served by the {} site", state.site.variant),
            json!({ "content_type": raw }),
        ));
    }

    Ok(content_type)
}
