//! Site route configuration per variant.

use crate::domain::entities::SiteVariant;
use crate::state::AppState;
use crate::web::handlers::{
    author_handler, blog_category_handler, blog_home_handler, brand_handler, car_handler,
    catalog_category_handler, catalog_home_handler, post_handler,
};
use axum::{Router, routing::get};

/// Blog pages.
///
/// # Endpoints
///
/// - `GET /`                   - Latest posts and categories
/// - `GET /posts/{slug}`       - Single post
/// - `GET /authors/{slug}`     - Author profile with their posts
/// - `GET /categories/{slug}`  - Category with its posts
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(blog_home_handler))
        .route("/posts/{slug}", get(post_handler))
        .route("/authors/{slug}", get(author_handler))
        .route("/categories/{slug}", get(blog_category_handler))
}

/// Catalog pages.
///
/// # Endpoints
///
/// - `GET /`                   - Inventory by ascending price, and categories
/// - `GET /cars/{slug}`        - Single car
/// - `GET /brands/{slug}`      - Brand with its cars
/// - `GET /categories/{slug}`  - Category with its cars
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog_home_handler))
        .route("/cars/{slug}", get(car_handler))
        .route("/brands/{slug}", get(brand_handler))
        .route("/categories/{slug}", get(catalog_category_handler))
}

pub fn site_routes(variant: SiteVariant) -> Router<AppState> {
    match variant {
        SiteVariant::Blog => blog_routes(),
        SiteVariant::Catalog => catalog_routes(),
    }
}
