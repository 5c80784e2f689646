mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use content_site::domain::entities::SiteVariant;
use content_site::routes::site_router;
use content_site::state::AppState;
use serde_json::Value;
use std::sync::Arc;

fn server(state: AppState) -> TestServer {
    TestServer::new(site_router(state, None)).unwrap()
}

fn failing_state(variant: SiteVariant) -> AppState {
    common::create_test_state(
        Arc::new(common::FailingStore(common::unauthorized())),
        variant,
    )
}

fn slugs(body: &Value) -> Vec<&str> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["slug"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_reports_store_reachable() {
    let server = server(common::catalog_state());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["variant"], "catalog");
    assert_eq!(body["site_name"], "Premium Motors");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert_eq!(body["checks"]["store"]["backend"], "memory");
    assert_eq!(body["checks"]["store"]["items"], 4);
    assert_eq!(
        body["checks"]["store"]["message"],
        "memory reachable, 4 cars"
    );
}

#[tokio::test]
async fn test_health_degraded_when_store_fails() {
    let server = server(failing_state(SiteVariant::Blog));

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["store"]["status"], "error");
    assert_eq!(body["checks"]["store"]["backend"], "failing");
    assert!(body["checks"]["store"].get("items").is_none());
}

#[tokio::test]
async fn test_list_cars_by_price() {
    let server = server(common::catalog_state());

    let response = server.get("/api/content/cars").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["content_type"], "cars");
    assert_eq!(body["total"], 4);
    assert_eq!(
        slugs(&body),
        vec![
            "porsche-concept",
            "porsche-cayenne",
            "porsche-911-carrera",
            "ferrari-roma"
        ]
    );
    assert_eq!(body["items"][1]["metadata"]["brand"]["slug"], "porsche");
}

#[tokio::test]
async fn test_get_post_by_slug() {
    let server = server(common::blog_state());

    let response = server.get("/api/content/posts/error-handling-in-rust").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], "post-errors");
    assert_eq!(body["type"], "posts");
    assert_eq!(body["metadata"]["author"]["metadata"]["full_name"], "Jane Doe");
    assert_eq!(body["metadata"]["category"]["slug"], "rust");
}

#[tokio::test]
async fn test_get_missing_item_is_404() {
    let server = server(common::blog_state());

    let response = server.get("/api/content/authors/nobody").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["slug"], "nobody");
}

#[tokio::test]
async fn test_related_posts_by_category() {
    let server = server(common::blog_state());

    let response = server
        .get("/api/content/posts/related/category/cat-rust")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        slugs(&body),
        vec!["building-services-with-axum", "error-handling-in-rust"]
    );
}

#[tokio::test]
async fn test_related_with_unknown_id_is_empty() {
    let server = server(common::catalog_state());

    let response = server
        .get("/api/content/cars/related/brand/brand-lotus")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_unknown_type_is_400() {
    let server = server(common::blog_state());

    let response = server.get("/api/content/widgets").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_type_of_other_site_is_400() {
    let server = server(common::blog_state());

    let response = server.get("/api/content/cars").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_undeclared_relation_is_400() {
    let server = server(common::blog_state());

    let response = server
        .get("/api/content/authors/related/category/cat-rust")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_unknown_relation_field_is_400() {
    let server = server(common::blog_state());

    let response = server.get("/api/content/posts/related/editor/x").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["field"], "editor");
}

#[tokio::test]
async fn test_store_failure_is_502() {
    let server = server(failing_state(SiteVariant::Catalog));

    let response = server.get("/api/content/brands").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "upstream_error");
    assert_eq!(body["error"]["details"]["reason"], "unauthorized");
    assert_eq!(body["error"]["details"]["operation"], "list_all");
    assert_eq!(body["error"]["details"]["content_type"], "brands");
}
