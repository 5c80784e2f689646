//! Blog page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use super::error::PageError;
use crate::domain::entities::{CategoryMetadata, ContentType, PostMetadata, Relation};
use crate::state::AppState;
use crate::web::views::{
    AuthorCard, CategoryLink, PostCard, PostView, author_card, category_links, post_cards,
};

#[derive(Template, WebTemplate)]
#[template(path = "blog/home.html")]
pub struct BlogHomeTemplate {
    pub site_name: String,
    pub posts: Vec<PostCard>,
    pub categories: Vec<CategoryLink>,
}

#[derive(Template, WebTemplate)]
#[template(path = "blog/post.html")]
pub struct PostTemplate {
    pub site_name: String,
    pub post: PostView,
}

#[derive(Template, WebTemplate)]
#[template(path = "blog/author.html")]
pub struct AuthorTemplate {
    pub site_name: String,
    pub author: AuthorCard,
    pub posts: Vec<PostCard>,
}

#[derive(Template, WebTemplate)]
#[template(path = "blog/category.html")]
pub struct BlogCategoryTemplate {
    pub site_name: String,
    pub category: CategoryLink,
    pub posts: Vec<PostCard>,
}

/// Renders the blog home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Posts and categories are fetched concurrently.
pub async fn blog_home_handler(State(state): State<AppState>) -> Result<impl IntoResponse, PageError> {
    let site = &state.site;
    let (posts, categories) = tokio::try_join!(
        state.content.list_all(ContentType::Posts),
        state.content.list_all(ContentType::Categories),
    )
    .map_err(|e| PageError::content(site, e))?;

    Ok(BlogHomeTemplate {
        site_name: site.name.clone(),
        posts: post_cards(posts).map_err(|e| PageError::malformed(site, e))?,
        categories: category_links(categories).map_err(|e| PageError::malformed(site, e))?,
    })
}

/// Renders a single post.
///
/// # Endpoint
///
/// `GET /posts/{slug}`
pub async fn post_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, PageError> {
    let site = &state.site;
    let post = state
        .content
        .get_one(ContentType::Posts, &slug)
        .await
        .map_err(|e| PageError::content(site, e))?
        .ok_or_else(|| PageError::not_found(site, format!("No post named '{slug}'")))?
        .into_typed::<PostMetadata>()
        .map_err(|e| PageError::malformed(site, e))?;

    Ok(PostTemplate {
        site_name: site.name.clone(),
        post: PostView::from(&post),
    })
}

/// Renders an author and their posts.
///
/// # Endpoint
///
/// `GET /authors/{slug}`
pub async fn author_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, PageError> {
    let site = &state.site;
    let author = state
        .content
        .get_one(ContentType::Authors, &slug)
        .await
        .map_err(|e| PageError::content(site, e))?
        .ok_or_else(|| PageError::not_found(site, format!("No author named '{slug}'")))?;

    let posts = state
        .content
        .list_by_relation(ContentType::Posts, Relation::Author, &author.id)
        .await
        .map_err(|e| PageError::content(site, e))?;

    Ok(AuthorTemplate {
        site_name: site.name.clone(),
        author: author_card(author).map_err(|e| PageError::malformed(site, e))?,
        posts: post_cards(posts).map_err(|e| PageError::malformed(site, e))?,
    })
}

/// Renders a category and its posts.
///
/// # Endpoint
///
/// `GET /categories/{slug}`
pub async fn blog_category_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, PageError> {
    let site = &state.site;
    let category = state
        .content
        .get_one(ContentType::Categories, &slug)
        .await
        .map_err(|e| PageError::content(site, e))?
        .ok_or_else(|| PageError::not_found(site, format!("No category named '{slug}'")))?;

    let posts = state
        .content
        .list_by_relation(ContentType::Posts, Relation::Category, &category.id)
        .await
        .map_err(|e| PageError::content(site, e))?;

    let category = category
        .into_typed::<CategoryMetadata>()
        .map_err(|e| PageError::malformed(site, e))?;

    Ok(BlogCategoryTemplate {
        site_name: site.name.clone(),
        category: CategoryLink::from(&category),
        posts: post_cards(posts).map_err(|e| PageError::malformed(site, e))?,
    })
}
