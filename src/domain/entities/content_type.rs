//! Content type tags, relation schema, and list ordering rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Object types served by the content store.
///
/// The blog variant reads `posts`, `authors` and `categories`; the catalog
/// variant reads `cars`, `brands` and `categories`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Posts,
    Authors,
    Categories,
    Cars,
    Brands,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Posts,
        ContentType::Authors,
        ContentType::Categories,
        ContentType::Cars,
        ContentType::Brands,
    ];

    /// Type slug as used by the store and in URLs (`/{type}/{slug}`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Authors => "authors",
            Self::Categories => "categories",
            Self::Cars => "cars",
            Self::Brands => "brands",
        }
    }

    /// Metadata fields of this type that reference another object.
    pub const fn relations(self) -> &'static [Relation] {
        match self {
            Self::Posts => &[Relation::Author, Relation::Category],
            Self::Cars => &[Relation::Brand, Relation::Category],
            Self::Authors | Self::Categories | Self::Brands => &[],
        }
    }

    pub fn declares(self, relation: Relation) -> bool {
        self.relations().contains(&relation)
    }

    /// Relation depth requested when nothing overrides it.
    ///
    /// Content items embed their references one level deep; taxonomy types
    /// carry no relations and are fetched flat.
    pub fn default_depth(self) -> RelationDepth {
        if self.relations().is_empty() {
            RelationDepth::NONE
        } else {
            RelationDepth::ONE
        }
    }

    pub const fn list_order(self) -> ListOrder {
        match self {
            Self::Cars => ListOrder::AscendingBy("price"),
            _ => ListOrder::StoreDefault,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type: {0}")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

/// A metadata field holding a reference to another object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Author,
    Category,
    Brand,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Relation::Author, Relation::Category, Relation::Brand];

    /// Metadata key of the relation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Category => "category",
            Self::Brand => "brand",
        }
    }

    /// Type of the referenced object.
    pub const fn target(self) -> ContentType {
        match self {
            Self::Author => ContentType::Authors,
            Self::Category => ContentType::Categories,
            Self::Brand => ContentType::Brands,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown relation field: {0}")]
pub struct UnknownRelation(pub String);

impl FromStr for Relation {
    type Err = UnknownRelation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRelation(s.to_string()))
    }
}

/// How many levels of referenced objects are inlined into a result.
///
/// Depth 0 leaves no relation expanded, depth 1 inlines the referenced
/// objects but not their own references, and so on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelationDepth(u8);

impl RelationDepth {
    pub const NONE: RelationDepth = RelationDepth(0);
    pub const ONE: RelationDepth = RelationDepth(1);

    pub const fn new(levels: u8) -> Self {
        Self(levels)
    }

    pub const fn levels(self) -> u8 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Depth remaining for an object nested one level down.
    pub const fn descend(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl fmt::Display for RelationDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordering applied to list results after they arrive from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Keep whatever order the store returned.
    StoreDefault,
    /// Stable ascending sort on a numeric metadata field; missing values sort as `0`.
    AscendingBy(&'static str),
}

/// Which of the two sites is being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteVariant {
    Blog,
    Catalog,
}

impl SiteVariant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Catalog => "catalog",
        }
    }

    /// The content type listed on the home page.
    pub const fn primary_type(self) -> ContentType {
        match self {
            Self::Blog => ContentType::Posts,
            Self::Catalog => ContentType::Cars,
        }
    }

    pub const fn content_types(self) -> &'static [ContentType] {
        match self {
            Self::Blog => &[
                ContentType::Posts,
                ContentType::Authors,
                ContentType::Categories,
            ],
            Self::Catalog => &[
                ContentType::Cars,
                ContentType::Brands,
                ContentType::Categories,
            ],
        }
    }

    pub const fn default_site_name(self) -> &'static str {
        match self {
            Self::Blog => "TechBlog Pro",
            Self::Catalog => "Premium Motors",
        }
    }
}

impl fmt::Display for SiteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blog" => Ok(Self::Blog),
            "catalog" => Ok(Self::Catalog),
            other => Err(format!("unknown site variant: {other}")),
        }
    }
}
