//! Flat view models handed to templates.
//!
//! Templates only see plain strings and flags; optional values are already
//! resolved to empty strings here.

use crate::domain::entities::{
    Author, AuthorMetadata, Brand, BrandMetadata, Car, CarMetadata, Category, CategoryMetadata,
    ContentItem, Post, PostMetadata,
};
use crate::utils::format::format_count;

#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub label: String,
    pub url: String,
    pub color: String,
    pub description: String,
}

impl From<&Category> for CategoryLink {
    fn from(category: &Category) -> Self {
        Self {
            label: category.label().to_string(),
            url: category.url_path(),
            color: category.badge_color().to_string(),
            description: category.metadata.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorCard {
    pub name: String,
    pub url: String,
    pub bio: String,
    pub avatar: String,
    pub twitter_url: String,
    pub linkedin_url: String,
}

impl From<&Author> for AuthorCard {
    fn from(author: &Author) -> Self {
        Self {
            name: author.display_name().to_string(),
            url: author.url_path(),
            bio: author.metadata.bio.clone(),
            avatar: author
                .metadata
                .avatar
                .as_ref()
                .map(|m| m.sized("w=128&h=128&fit=crop"))
                .unwrap_or_default(),
            twitter_url: author.twitter_url().unwrap_or_default(),
            linkedin_url: author.metadata.linkedin.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostCard {
    pub title: String,
    pub url: String,
    pub excerpt: String,
    pub image: String,
    pub date_label: String,
    pub author_name: String,
    pub author_url: String,
    pub category: Option<CategoryLink>,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        let author = post.metadata.author.as_ref();
        Self {
            title: post.title.clone(),
            url: post.url_path(),
            excerpt: post.metadata.excerpt.clone(),
            image: post
                .metadata
                .featured_image
                .as_ref()
                .map(|m| m.sized("w=800&h=450&fit=crop"))
                .unwrap_or_default(),
            date_label: post.published_label().unwrap_or_default(),
            author_name: author.map(|a| a.display_name().to_string()).unwrap_or_default(),
            author_url: author.map(|a| a.url_path()).unwrap_or_default(),
            category: post.metadata.category.as_ref().map(CategoryLink::from),
        }
    }
}

/// Full post page.
#[derive(Debug, Clone)]
pub struct PostView {
    pub card: PostCard,
    pub body_html: String,
    pub hero_image: String,
    pub tags: Vec<String>,
    pub author: Option<AuthorCard>,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        let body_html = if post.metadata.content.is_empty() {
            post.content.clone().unwrap_or_default()
        } else {
            post.metadata.content.clone()
        };
        Self {
            card: PostCard::from(post),
            body_html,
            hero_image: post
                .metadata
                .featured_image
                .as_ref()
                .map(|m| m.sized("w=1600&h=800&fit=crop"))
                .unwrap_or_default(),
            tags: post.tag_list(),
            author: post.metadata.author.as_ref().map(AuthorCard::from),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrandLink {
    pub label: String,
    pub url: String,
    pub logo: String,
    pub description: String,
    pub country: String,
}

impl From<&Brand> for BrandLink {
    fn from(brand: &Brand) -> Self {
        Self {
            label: brand.label().to_string(),
            url: brand.url_path(),
            logo: brand
                .metadata
                .logo
                .as_ref()
                .map(|m| m.sized("w=48&h=48&fit=crop"))
                .unwrap_or_default(),
            description: brand.metadata.description.clone().unwrap_or_default(),
            country: brand.metadata.country.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CarCard {
    pub title: String,
    pub url: String,
    pub image: String,
    pub price_label: String,
    pub mileage_label: String,
    pub availability: String,
    pub available: bool,
    pub condition: String,
    pub fuel_type: String,
    pub brand: Option<BrandLink>,
    pub category: Option<CategoryLink>,
}

impl From<&Car> for CarCard {
    fn from(car: &Car) -> Self {
        let meta = &car.metadata;
        let title = [
            meta.year.map(|y| y.to_string()).unwrap_or_default(),
            meta.make.clone(),
            meta.model.clone(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

        Self {
            title: if title.is_empty() { car.title.clone() } else { title },
            url: car.url_path(),
            image: meta
                .main_image
                .as_ref()
                .or(meta.images.first())
                .map(|m| m.sized("w=800&h=600&fit=crop"))
                .unwrap_or_default(),
            price_label: car.price_label(),
            mileage_label: meta
                .mileage
                .map(|m| format!("{} mi", format_count(m)))
                .unwrap_or_else(|| "N/A".to_string()),
            availability: meta.availability.clone(),
            available: car.is_available(),
            condition: meta.condition.clone(),
            fuel_type: meta.fuel_type.clone(),
            brand: meta.brand.as_ref().map(BrandLink::from),
            category: meta.category.as_ref().map(CategoryLink::from),
        }
    }
}

/// A label/value row in the car specification table.
#[derive(Debug, Clone)]
pub struct Spec {
    pub label: &'static str,
    pub value: String,
}

/// Full car page.
#[derive(Debug, Clone)]
pub struct CarView {
    pub card: CarCard,
    pub description: String,
    pub gallery: Vec<String>,
    pub specs: Vec<Spec>,
    pub features: Vec<String>,
}

impl From<&Car> for CarView {
    fn from(car: &Car) -> Self {
        let meta = &car.metadata;
        let specs = [
            ("Engine", meta.engine.clone()),
            ("Horsepower", meta.horsepower.map(|hp| format!("{hp} HP")).unwrap_or_default()),
            ("Top speed", meta.top_speed.map(|s| format!("{s} mph")).unwrap_or_default()),
            ("0-60", meta.acceleration.clone()),
            ("Transmission", meta.transmission.clone()),
            ("Fuel", meta.fuel_type.clone()),
            ("Exterior", meta.exterior_color.clone()),
            ("Interior", meta.interior_color.clone()),
            ("VIN", meta.vin.clone().unwrap_or_default()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| Spec { label, value })
        .collect();

        Self {
            card: CarCard::from(car),
            description: meta.description.clone(),
            gallery: meta
                .images
                .iter()
                .map(|m| m.sized("w=1200&h=800&fit=crop"))
                .collect(),
            specs,
            features: car.feature_list(),
        }
    }
}

/// Converts normalized items into typed entries and then into view models.
///
/// # Errors
///
/// Returns the first item whose metadata does not fit the typed view.
pub fn post_cards(items: Vec<ContentItem>) -> Result<Vec<PostCard>, serde_json::Error> {
    items
        .into_iter()
        .map(|item| Ok(PostCard::from(&item.into_typed::<PostMetadata>()?)))
        .collect()
}

pub fn car_cards(items: Vec<ContentItem>) -> Result<Vec<CarCard>, serde_json::Error> {
    items
        .into_iter()
        .map(|item| Ok(CarCard::from(&item.into_typed::<CarMetadata>()?)))
        .collect()
}

pub fn category_links(items: Vec<ContentItem>) -> Result<Vec<CategoryLink>, serde_json::Error> {
    items
        .into_iter()
        .map(|item| Ok(CategoryLink::from(&item.into_typed::<CategoryMetadata>()?)))
        .collect()
}

pub fn author_card(item: ContentItem) -> Result<AuthorCard, serde_json::Error> {
    Ok(AuthorCard::from(&item.into_typed::<AuthorMetadata>()?))
}

pub fn brand_link(item: ContentItem) -> Result<BrandLink, serde_json::Error> {
    Ok(BrandLink::from(&item.into_typed::<BrandMetadata>()?))
}
