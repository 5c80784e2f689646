//! HTML template rendering handlers for the site.

mod blog;
mod catalog;
mod error;

pub use blog::{author_handler, blog_category_handler, blog_home_handler, post_handler};
pub use catalog::{brand_handler, car_handler, catalog_category_handler, catalog_home_handler};
pub use error::{ErrorTemplate, PageError, fallback_handler};
