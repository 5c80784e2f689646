//! Car catalog page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use super::error::PageError;
use crate::domain::entities::{CarMetadata, CategoryMetadata, ContentType, Relation};
use crate::state::AppState;
use crate::web::views::{
    BrandLink, CarCard, CarView, CategoryLink, brand_link, car_cards, category_links,
};

#[derive(Template, WebTemplate)]
#[template(path = "catalog/home.html")]
pub struct CatalogHomeTemplate {
    pub site_name: String,
    pub cars: Vec<CarCard>,
    pub categories: Vec<CategoryLink>,
}

#[derive(Template, WebTemplate)]
#[template(path = "catalog/car.html")]
pub struct CarTemplate {
    pub site_name: String,
    pub car: CarView,
}

#[derive(Template, WebTemplate)]
#[template(path = "catalog/brand.html")]
pub struct BrandTemplate {
    pub site_name: String,
    pub brand: BrandLink,
    pub cars: Vec<CarCard>,
}

#[derive(Template, WebTemplate)]
#[template(path = "catalog/category.html")]
pub struct CatalogCategoryTemplate {
    pub site_name: String,
    pub category: CategoryLink,
    pub cars: Vec<CarCard>,
}

/// Renders the catalog home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Cars (cheapest first) and categories are fetched concurrently.
pub async fn catalog_home_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PageError> {
    let site = &state.site;
    let (cars, categories) = tokio::try_join!(
        state.content.list_all(ContentType::Cars),
        state.content.list_all(ContentType::Categories),
    )
    .map_err(|e| PageError::content(site, e))?;

    Ok(CatalogHomeTemplate {
        site_name: site.name.clone(),
        cars: car_cards(cars).map_err(|e| PageError::malformed(site, e))?,
        categories: category_links(categories).map_err(|e| PageError::malformed(site, e))?,
    })
}

/// Renders a single car.
///
/// # Endpoint
///
/// `GET /cars/{slug}`
pub async fn car_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, PageError> {
    let site = &state.site;
    let car = state
        .content
        .get_one(ContentType::Cars, &slug)
        .await
        .map_err(|e| PageError::content(site, e))?
        .ok_or_else(|| PageError::not_found(site, format!("No car listed as '{slug}'")))?
        .into_typed::<CarMetadata>()
        .map_err(|e| PageError::malformed(site, e))?;

    Ok(CarTemplate {
        site_name: site.name.clone(),
        car: CarView::from(&car),
    })
}

/// Renders a brand and its cars.
///
/// # Endpoint
///
/// `GET /brands/{slug}`
pub async fn brand_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, PageError> {
    let site = &state.site;
    let brand = state
        .content
        .get_one(ContentType::Brands, &slug)
        .await
        .map_err(|e| PageError::content(site, e))?
        .ok_or_else(|| PageError::not_found(site, format!("No brand named '{slug}'")))?;

    let cars = state
        .content
        .list_by_relation(ContentType::Cars, Relation::Brand, &brand.id)
        .await
        .map_err(|e| PageError::content(site, e))?;

    Ok(BrandTemplate {
        site_name: site.name.clone(),
        brand: brand_link(brand).map_err(|e| PageError::malformed(site, e))?,
        cars: car_cards(cars).map_err(|e| PageError::malformed(site, e))?,
    })
}

/// Renders a category and its cars.
///
/// # Endpoint
///
/// `GET /categories/{slug}`
pub async fn catalog_category_handler(
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

    let cars = state
        .content
        .list_by_relation(ContentType::Cars, Relation::Category, &category.id)
        .await
        .map_err(|e| PageError::content(site, e))?;

    let category = category
        .into_typed::<CategoryMetadata>()
        .map_err(|e| PageError::malformed(site, e))?;

    Ok(CatalogCategoryTemplate {
        site_name: site.name.clone(),
        category: CategoryLink::from(&category),
        cars: car_cards(cars).map_err(|e| PageError::malformed(site, e))?,
    })
}
