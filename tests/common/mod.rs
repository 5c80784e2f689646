#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use content_site::domain::entities::{ContentType, Relation, RelationDepth, SiteVariant};
use content_site::domain::repositories::{ContentStore, ObjectPage, ObjectQuery, StoreError};
use content_site::infrastructure::stores::InMemoryStore;
use content_site::state::{AppState, SiteContext};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const READ_KEY: &str = "test-read-key";
pub const BUCKET: &str = "test-bucket";

pub fn blog_store() -> InMemoryStore {
    InMemoryStore::from_path("fixtures/blog.json").unwrap()
}

pub fn catalog_store() -> InMemoryStore {
    InMemoryStore::from_path("fixtures/catalog.json").unwrap()
}

pub fn create_test_state(store: Arc<dyn ContentStore>, variant: SiteVariant) -> AppState {
    AppState::new(
        store,
        SiteContext::new(variant, variant.default_site_name()),
    )
}

pub fn blog_state() -> AppState {
    create_test_state(Arc::new(blog_store()), SiteVariant::Blog)
}

pub fn catalog_state() -> AppState {
    create_test_state(Arc::new(catalog_store()), SiteVariant::Catalog)
}

/// A store whose every call fails with the given error.
pub struct FailingStore(pub StoreError);

#[async_trait]
impl ContentStore for FailingStore {
    async fn find(&self, _query: &ObjectQuery) -> Result<ObjectPage, StoreError> {
        Err(self.0.clone())
    }

    async fn find_one(&self, _query: &ObjectQuery) -> Result<Value, StoreError> {
        Err(self.0.clone())
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

pub fn unauthorized() -> StoreError {
    StoreError::from_status(401, "Unauthorized")
}

/// Query parameters of every request the fake Cosmic API received.
pub type RequestLog = Arc<Mutex<Vec<HashMap<String, String>>>>;

#[derive(Clone)]
struct FakeCosmic {
    store: Arc<InMemoryStore>,
    requests: RequestLog,
    status_override: Option<StatusCode>,
}

/// Starts a local stand-in for the Cosmic v3 objects endpoint backed by a fixture.
///
/// Returns the API base URL and the request log.
pub async fn spawn_fake_cosmic(store: InMemoryStore) -> (String, RequestLog) {
    spawn(store, None).await
}

/// Starts a fake Cosmic API that answers every request with `status`.
pub async fn spawn_failing_cosmic(status: StatusCode) -> (String, RequestLog) {
    spawn(InMemoryStore::empty(), Some(status)).await
}

async fn spawn(store: InMemoryStore, status_override: Option<StatusCode>) -> (String, RequestLog) {
    let requests = RequestLog::default();
    let fake = FakeCosmic {
        store: Arc::new(store),
        requests: requests.clone(),
        status_override,
    };

    let app = Router::new()
        .route("/v3/buckets/{bucket}/objects", get(objects_handler))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v3"), requests)
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "status": status.as_u16(), "message": message })),
    )
        .into_response()
}

async fn objects_handler(
    State(fake): State<FakeCosmic>,
    Path(bucket): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    fake.requests.lock().unwrap().push(params.clone());

    if let Some(status) = fake.status_override {
        return (status, "upstream exploded").into_response();
    }
    if bucket != BUCKET {
        return error(StatusCode::NOT_FOUND, "Bucket not found");
    }
    if params.get("read_key").map(String::as_str) != Some(READ_KEY) {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    let Some(query) = parse_query(&params) else {
        return error(StatusCode::BAD_REQUEST, "Invalid query");
    };

    match fake.store.find(&query).await {
        Ok(mut page) => {
            if let Some(limit) = params.get("limit").and_then(|l| l.parse::<usize>().ok()) {
                page.objects.truncate(limit);
            }
            Json(json!({ "objects": page.objects, "total": page.total })).into_response()
        }
        Err(e) if e.is_not_found() => error(StatusCode::NOT_FOUND, "No objects found"),
        Err(e) => error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}

fn parse_query(params: &HashMap<String, String>) -> Option<ObjectQuery> {
    let filter: Value = serde_json::from_str(params.get("query")?).ok()?;
    let content_type: ContentType = filter.get("type")?.as_str()?.parse().ok()?;
    let depth = RelationDepth::new(params.get("depth")?.parse().ok()?);

    if let Some(slug) = filter.get("slug").and_then(Value::as_str) {
        return Some(ObjectQuery::by_slug(content_type, slug, depth));
    }

    for relation in Relation::ALL {
        let key = format!("metadata.{}", relation.as_str());
        if let Some(id) = filter.get(&key).and_then(Value::as_str) {
            return Some(ObjectQuery::by_relation(content_type, relation, id, depth));
        }
    }

    Some(ObjectQuery::all(content_type, depth))
}
