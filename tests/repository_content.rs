mod common;

use content_site::application::services::ContentRepository;
use content_site::domain::entities::{ContentType, PostMetadata, Relation, RelationDepth};
use content_site::domain::repositories::{ContentStore, StoreError};
use content_site::error::{ContentError, Operation};
use std::sync::Arc;

fn repository(store: impl ContentStore + 'static) -> ContentRepository<dyn ContentStore> {
    ContentRepository::new(Arc::new(store) as Arc<dyn ContentStore>)
}

fn slugs(items: &[content_site::domain::entities::ContentItem]) -> Vec<&str> {
    items.iter().map(|item| item.slug.as_str()).collect()
}

#[tokio::test]
async fn test_list_all_cars_cheapest_first() {
    let repo = repository(common::catalog_store());

    let cars = repo.list_all(ContentType::Cars).await.unwrap();

    assert_eq!(
        slugs(&cars),
        vec![
            "porsche-concept",
            "porsche-cayenne",
            "porsche-911-carrera",
            "ferrari-roma"
        ]
    );
}

#[tokio::test]
async fn test_list_all_posts_keeps_store_order() {
    let repo = repository(common::blog_store());

    let posts = repo.list_all(ContentType::Posts).await.unwrap();

    assert_eq!(
        slugs(&posts),
        vec![
            "building-services-with-axum",
            "modern-css-layouts",
            "error-handling-in-rust"
        ]
    );
}

#[tokio::test]
async fn test_list_all_of_absent_type_is_empty() {
    let repo = repository(common::blog_store());

    let cars = repo.list_all(ContentType::Cars).await.unwrap();

    assert!(cars.is_empty());
}

#[tokio::test]
async fn test_get_one_expands_author() {
    let repo = repository(common::blog_store());

    let post = repo
        .get_one(ContentType::Posts, "building-services-with-axum")
        .await
        .unwrap()
        .unwrap();

    let author = post.related(Relation::Author).unwrap();
    assert_eq!(author.metadata["full_name"], "Jane Doe");

    let typed = post.into_typed::<PostMetadata>().unwrap();
    assert_eq!(typed.metadata.author.unwrap().display_name(), "Jane Doe");
    assert_eq!(typed.metadata.category.unwrap().label(), "Rust");
}

#[tokio::test]
async fn test_get_one_missing_slug_is_none() {
    let repo = repository(common::blog_store());

    let post = repo
        .get_one(ContentType::Posts, "nonexistent-slug")
        .await
        .unwrap();

    assert!(post.is_none());
}

#[tokio::test]
async fn test_list_by_relation_returns_matching_posts_in_store_order() {
    let repo = repository(common::blog_store());

    let posts = repo
        .list_by_relation(ContentType::Posts, Relation::Category, "cat-rust")
        .await
        .unwrap();

    assert_eq!(
        slugs(&posts),
        vec!["building-services-with-axum", "error-handling-in-rust"]
    );
    assert!(
        posts
            .iter()
            .all(|p| p.related_id(Relation::Category) == Some("cat-rust"))
    );
}

#[tokio::test]
async fn test_list_by_relation_sorts_brand_cars_by_price() {
    let repo = repository(common::catalog_store());

    let cars = repo
        .list_by_relation(ContentType::Cars, Relation::Brand, "brand-porsche")
        .await
        .unwrap();

    assert_eq!(
        slugs(&cars),
        vec!["porsche-concept", "porsche-cayenne", "porsche-911-carrera"]
    );
}

#[tokio::test]
async fn test_list_by_relation_unknown_id_is_empty() {
    let repo = repository(common::catalog_store());

    let cars = repo
        .list_by_relation(ContentType::Cars, Relation::Category, "cat-missing")
        .await
        .unwrap();

    assert!(cars.is_empty());
}

#[tokio::test]
async fn test_depth_zero_override_removes_relations() {
    let repo = repository(common::blog_store()).with_depth(ContentType::Posts, RelationDepth::NONE);

    let posts = repo.list_all(ContentType::Posts).await.unwrap();

    assert!(posts.iter().all(|p| p.field("author").is_none()));
    assert!(posts.iter().all(|p| p.field("category").is_none()));

    // Filtering by relation always expands at least one level
    let posts = repo
        .list_by_relation(ContentType::Posts, Relation::Author, "aut-omar")
        .await
        .unwrap();
    assert!(posts[0].related(Relation::Author).is_some());
}

#[tokio::test]
async fn test_unauthorized_store_is_fetch_failure() {
    let repo = repository(common::FailingStore(common::unauthorized()));

    let err = repo.list_all(ContentType::Posts).await.unwrap_err();

    assert_eq!(
        err,
        ContentError::FetchFailure {
            operation: Operation::ListAll,
            content_type: ContentType::Posts,
            source: StoreError::from_status(401, "Unauthorized"),
        }
    );

    let err = repo
        .get_one(ContentType::Authors, "jane-doe")
        .await
        .unwrap_err();
    assert!(err.is_fetch_failure());
}

#[tokio::test]
async fn test_store_not_found_is_never_an_error() {
    let repo = repository(common::FailingStore(StoreError::NotFound(
        "Bucket not found".into(),
    )));

    assert!(repo.list_all(ContentType::Cars).await.unwrap().is_empty());
    assert!(
        repo.get_one(ContentType::Cars, "anything")
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        repo.list_by_relation(ContentType::Cars, Relation::Brand, "b1")
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_invalid_requests_are_rejected() {
    let repo = repository(common::blog_store());

    assert!(matches!(
        repo.get_one(ContentType::Posts, "").await,
        Err(ContentError::InvalidRequest(_))
    ));
    assert!(matches!(
        repo.list_by_relation(ContentType::Authors, Relation::Category, "cat-rust")
            .await,
        Err(ContentError::InvalidRequest(_))
    ));
}
