//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Content source
//!
//! ### Remote: Cosmic bucket
//!
//! ```bash
//! export COSMIC_BUCKET_SLUG="premium-motors-production"
//! export COSMIC_READ_KEY="..."
//! export COSMIC_API_URL="https://api.cosmicjs.com/v3"   # optional
//! ```
//!
//! ### Local: fixture file
//!
//! ```bash
//! export CONTENT_FIXTURES="fixtures/catalog.json"
//! ```
//!
//! When `CONTENT_FIXTURES` is set the in-memory store is used and the Cosmic
//! credentials become optional.
//!
//! ## Optional Variables
//!
//! - `COSMIC_WRITE_KEY` - Accepted for parity with other Cosmic tooling; never sent
//! - `SITE_VARIANT` - `blog` or `catalog` (default: `blog`)
//! - `SITE_NAME` - Display name (default depends on the variant)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `API_RATE_PER_SECOND` - Token refill rate for `/api`, per client IP (default: `5`)
//! - `API_RATE_BURST` - Token bucket size for `/api` (default: `50`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

use crate::domain::entities::SiteVariant;
use crate::utils::api_url::parse_api_url;
use crate::utils::slug::is_url_safe;

pub const DEFAULT_API_URL: &str = "https://api.cosmicjs.com/v3";

/// Credentials and location of the Cosmic bucket.
///
/// Built once at startup and handed to the store constructor; never mutated.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub api_url: Url,
    pub bucket_slug: String,
    pub read_key: String,
    /// Loaded from `COSMIC_WRITE_KEY`. Reads never send it.
    pub write_key: Option<String>,
}

/// Per-IP token bucket applied to the JSON API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained requests per second once the burst is spent.
    pub per_second: u64,
    /// Requests a client may send back to back.
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 5,
            burst: 50,
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    /// Fixture file for the in-memory store; `None` selects the Cosmic store.
    pub fixtures_path: Option<PathBuf>,
    pub variant: SiteVariant,
    pub site_name: String,
    pub listen_addr: String,
    pub rate_limit: RateLimitConfig,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the Cosmic credentials are missing while no fixture
    /// file is configured, or if a value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let fixtures_path = env::var("CONTENT_FIXTURES")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let store = Self::load_store_config(fixtures_path.is_some())
            .context("Failed to load Cosmic configuration")?;

        let variant = match env::var("SITE_VARIANT") {
            Ok(v) => v.parse::<SiteVariant>().map_err(anyhow::Error::msg)?,
            Err(_) => SiteVariant::Blog,
        };

        let site_name = env::var("SITE_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| variant.default_site_name().to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let defaults = RateLimitConfig::default();
        let rate_limit = RateLimitConfig {
            per_second: env::var("API_RATE_PER_SECOND")
                .ok()
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("API_RATE_PER_SECOND must be a positive integer")?
                .unwrap_or(defaults.per_second),
            burst: env::var("API_RATE_BURST")
                .ok()
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("API_RATE_BURST must be a positive integer")?
                .unwrap_or(defaults.burst),
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            store,
            fixtures_path,
            variant,
            site_name,
            listen_addr,
            rate_limit,
            log_level,
            log_format,
        })
    }

    /// Loads the Cosmic bucket settings.
    ///
    /// Bucket slug and read key are required unless `fixtures` is true.
    fn load_store_config(fixtures: bool) -> Result<StoreConfig> {
        let api_url = env::var("COSMIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = parse_api_url(&api_url).context("COSMIC_API_URL is not a valid API URL")?;

        let (bucket_slug, read_key) = if fixtures {
            (
                env::var("COSMIC_BUCKET_SLUG").unwrap_or_default(),
                env::var("COSMIC_READ_KEY").unwrap_or_default(),
            )
        } else {
            (
                env::var("COSMIC_BUCKET_SLUG").context("COSMIC_BUCKET_SLUG must be set")?,
                env::var("COSMIC_READ_KEY").context("COSMIC_READ_KEY must be set")?,
            )
        };

        let write_key = env::var("COSMIC_WRITE_KEY")
            .ok()
            .filter(|v| !v.is_empty());

        Ok(StoreConfig {
            api_url,
            bucket_slug,
            read_key,
            write_key,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the Cosmic store is selected and the bucket slug or read key is empty
    /// - the bucket slug is not URL-safe
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - either rate limit value is zero
    pub fn validate(&self) -> Result<()> {
        if !self.uses_fixtures() {
            if self.store.bucket_slug.trim().is_empty() {
                anyhow::bail!("COSMIC_BUCKET_SLUG must not be empty");
            }
            if self.store.read_key.trim().is_empty() {
                anyhow::bail!("COSMIC_READ_KEY must not be empty");
            }
        }

        if !self.store.bucket_slug.is_empty() && !is_url_safe(&self.store.bucket_slug) {
            anyhow::bail!(
                "COSMIC_BUCKET_SLUG must be lowercase letters, digits and hyphens, got '{}'",
                self.store.bucket_slug
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.rate_limit.per_second == 0 || self.rate_limit.burst == 0 {
            anyhow::bail!(
                "API_RATE_PER_SECOND and API_RATE_BURST must be greater than 0, got {} and {}",
                self.rate_limit.per_second,
                self.rate_limit.burst
            );
        }

        if self.site_name.trim().is_empty() {
            anyhow::bail!("SITE_NAME must not be empty");
        }

        Ok(())
    }

    /// Returns whether content is served from a local fixture file.
    pub fn uses_fixtures(&self) -> bool {
        self.fixtures_path.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Site: {} ({})", self.site_name, self.variant);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  API rate limit: {}/s, burst {}",
            self.rate_limit.per_second,
            self.rate_limit.burst
        );

        if let Some(ref path) = self.fixtures_path {
            tracing::info!("  Content: fixtures at {}", path.display());
        } else {
            tracing::info!("  Content: Cosmic at {}", self.store.api_url);
            tracing::info!("  Bucket: {}", self.store.bucket_slug);
            tracing::info!("  Read key: {}", mask_secret(&self.store.read_key));
        }

        if self.store.write_key.is_some() {
            tracing::info!("  Write key: set (unused)");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only a short prefix.
///
/// - `abcdef123456` → `abcd***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    match secret.char_indices().nth(4) {
        Some((end, _)) if secret.chars().count() > 8 => format!("{}***", &secret[..end]),
        _ => "***".to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
