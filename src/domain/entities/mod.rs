//! Core domain entities representing the content data model.
//!
//! Entities are read-only snapshots of objects owned by the remote content
//! store. This crate never creates, mutates, or deletes them.
//!
//! # Entity Types
//!
//! - [`ContentItem`] - A normalized object with open metadata
//! - [`ContentType`] - Type tags, relation schema, and ordering rules
//! - [`Entry`] - Typed view over a [`ContentItem`]
//!
//! # Typed Views
//!
//! - Blog: [`Post`], [`Author`], [`Category`]
//! - Catalog: [`Car`], [`Brand`], [`Category`]

pub mod blog;
pub mod catalog;
pub mod content_item;
pub mod content_type;
pub mod entry;

pub use blog::{Author, AuthorMetadata, Post, PostMetadata};
pub use catalog::{Brand, BrandMetadata, Car, CarMetadata};
pub use content_item::{ContentItem, relation_id};
pub use content_type::{
    ContentType, ListOrder, Relation, RelationDepth, SiteVariant, UnknownContentType,
    UnknownRelation,
};
pub use entry::{Category, CategoryMetadata, Entry, Media};
