mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use content_site::domain::entities::SiteVariant;
use content_site::infrastructure::stores::InMemoryStore;
use content_site::routes::site_router;
use std::sync::Arc;

fn server(state: content_site::state::AppState) -> TestServer {
    TestServer::new(site_router(state, None)).unwrap()
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in page"))
}

#[tokio::test]
async fn test_blog_home_lists_posts_and_categories() {
    let server = server(common::blog_state());

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Building Services with Axum"));
    assert!(html.contains("Modern CSS Layouts"));
    assert!(html.contains("Error Handling in Rust"));
    assert!(html.contains("/categories/rust"));
    assert!(html.contains("/posts/modern-css-layouts"));
}

#[tokio::test]
async fn test_post_page_renders_body_and_author() {
    let server = server(common::blog_state());

    let response = server.get("/posts/building-services-with-axum").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<p>Axum keeps handlers as plain async functions.</p>"));
    assert!(html.contains("Jane Doe"));
    assert!(html.contains("/authors/jane-doe"));
    assert!(html.contains("March 12, 2024"));
    assert!(html.contains("#axum"));
}

#[tokio::test]
async fn test_missing_post_is_404_page() {
    let server = server(common::blog_state());

    let response = server.get("/posts/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not found"));
}

#[tokio::test]
async fn test_author_page_lists_only_their_posts() {
    let server = server(common::blog_state());

    let response = server.get("/authors/jane-doe").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Building Services with Axum"));
    assert!(html.contains("Error Handling in Rust"));
    assert!(!html.contains("Modern CSS Layouts"));
}

#[tokio::test]
async fn test_blog_category_page() {
    let server = server(common::blog_state());

    let response = server.get("/categories/web").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Modern CSS Layouts"));
    assert!(!html.contains("Error Handling in Rust"));
}

#[tokio::test]
async fn test_catalog_routes_are_not_served_by_blog() {
    let server = server(common::blog_state());

    let response = server.get("/cars/porsche-911-carrera").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalog_home_orders_cars_by_price() {
    let server = server(common::catalog_state());

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    let concept = position(&html, "Porsche Concept Study");
    let cayenne = position(&html, "2022 Porsche Cayenne");
    let carrera = position(&html, "2023 Porsche 911 Carrera");
    let roma = position(&html, "2024 Ferrari Roma");
    assert!(concept < cayenne);
    assert!(cayenne < carrera);
    assert!(carrera < roma);
    assert!(html.contains("Price on request"));
}

#[tokio::test]
async fn test_car_page_shows_price_and_specs() {
    let server = server(common::catalog_state());

    let response = server.get("/cars/porsche-911-carrera").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("$119,500"));
    assert!(html.contains("1,200 mi"));
    assert!(html.contains("3.0L Twin-Turbo Flat-6"));
    assert!(html.contains("Sport Chrono"));
    assert!(html.contains("/brands/porsche"));
}

#[tokio::test]
async fn test_brand_page_lists_brand_cars() {
    let server = server(common::catalog_state());

    let response = server.get("/brands/ferrari").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("2024 Ferrari Roma"));
    assert!(!html.contains("Porsche Cayenne"));
}

#[tokio::test]
async fn test_catalog_category_page() {
    let server = server(common::catalog_state());

    let response = server.get("/categories/suv").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("2022 Porsche Cayenne"));
    assert!(!html.contains("Ferrari Roma"));
}

#[tokio::test]
async fn test_unknown_path_renders_404_page() {
    let server = server(common::catalog_state());

    let response = server.get("/nowhere/at/all").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not found"));
}

#[tokio::test]
async fn test_store_failure_renders_502_page() {
    let state = common::create_test_state(
        Arc::new(common::FailingStore(common::unauthorized())),
        SiteVariant::Catalog,
    );
    let server = server(state);

    let response = server.get("/").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let server = server(common::blog_state());

    let response = server.get("/static/site.css").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_catalog_home_renders_cars_with_blank_numbers() {
    let store = InMemoryStore::from_json(
        r#"{"objects": [
            {"id": "car-a", "slug": "porsche-taycan", "title": "Porsche Taycan", "type": "cars",
             "metadata": {"make": "Porsche", "model": "Taycan", "year": "", "price": "",
                          "horsepower": "", "mileage": ""}},
            {"id": "car-b", "slug": "ferrari-296", "title": "Ferrari 296", "type": "cars",
             "metadata": {"make": "Ferrari", "model": "296", "year": 2023, "price": 320000}}
        ]}"#,
    )
    .unwrap();
    let server = server(common::create_test_state(
        Arc::new(store),
        SiteVariant::Catalog,
    ));

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(position(&html, "Porsche Taycan") < position(&html, "2023 Ferrari 296"));
    assert!(html.contains("Price on request"));
    assert!(html.contains("$320,000"));

    server.get("/cars/porsche-taycan").await.assert_status_ok();
}
