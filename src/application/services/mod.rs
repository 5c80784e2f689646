//! Business logic services for the application layer.

pub mod content_repository;

pub use content_repository::ContentRepository;
