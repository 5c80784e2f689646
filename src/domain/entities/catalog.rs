//! Catalog content: cars and brands.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};

use super::entry::{Category, Entry, Media};
use crate::utils::format::format_price;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandMetadata {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<Media>,
    pub color: Option<String>,
    pub country: Option<String>,
}

pub type Brand = Entry<BrandMetadata>;

impl Entry<BrandMetadata> {
    pub fn label(&self) -> &str {
        if self.metadata.name.is_empty() {
            &self.title
        } else {
            &self.metadata.name
        }
    }
}

/// Car metadata. Numeric fields accept numbers or numeric strings; blank or
/// unparseable values read as `None`.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarMetadata {
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub price: Option<f64>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub year: Option<u32>,
    pub make: String,
    pub model: String,
    pub engine: String,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub horsepower: Option<u32>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub top_speed: Option<u32>,
    pub acceleration: String,
    pub transmission: String,
    pub fuel_type: String,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub mileage: Option<f64>,
    pub exterior_color: String,
    pub interior_color: String,
    pub features: String,
    pub description: String,
    pub images: Vec<Media>,
    pub main_image: Option<Media>,
    pub brand: Option<Brand>,
    pub category: Option<Category>,
    pub condition: String,
    pub availability: String,
    pub vin: Option<String>,
}

pub type Car = Entry<CarMetadata>;

impl Entry<CarMetadata> {
    pub fn price_label(&self) -> String {
        match self.metadata.price {
            Some(price) if price > 0.0 => format_price(price),
            _ => "Price on request".to_string(),
        }
    }

    /// Comma-separated feature list, trimmed, empties dropped.
    pub fn feature_list(&self) -> Vec<String> {
        self.metadata
            .features
            .split(',')
            .map(str::trim)
            .filter(|feature| !feature.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_available(&self) -> bool {
        self.metadata.availability.is_empty()
            || self.metadata.availability.eq_ignore_ascii_case("available")
    }
}
