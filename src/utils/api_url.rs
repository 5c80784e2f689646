//! Content store endpoint parsing and construction.
//!
//! Ensures the configured API base URL has a consistent form before bucket
//! paths are appended to it.

use url::Url;

/// Errors that can occur while parsing the store API URL.
#[derive(Debug, thiserror::Error)]
pub enum ApiUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL cannot be used as an API base: {0}")]
    NotABase(String),
}

/// Parses the store API base URL into a canonical form.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Converted to lowercase
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Query and fragment**: Removed
/// 5. **Path**: Trailing slash removed
///
/// # Errors
///
/// Returns [`ApiUrlError::InvalidFormat`] for malformed URLs and
/// [`ApiUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn parse_api_url(input: &str) -> Result<Url, ApiUrlError> {
    let mut url = Url::parse(input.trim()).map_err(|e| ApiUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(ApiUrlError::UnsupportedProtocol),
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase))
            .map_err(|e| ApiUrlError::InvalidFormat(e.to_string()))?;
    }

    url.set_fragment(None);
    url.set_query(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None)
            .map_err(|_| ApiUrlError::NotABase(input.to_string()))?;
    }

    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&trimmed);

    Ok(url)
}

/// Builds `{base}/buckets/{bucket_slug}/objects`.
///
/// The bucket slug is percent-encoded as a single path segment.
///
/// # Errors
///
/// Returns [`ApiUrlError::NotABase`] if the base URL cannot carry a path.
pub fn objects_endpoint(base: &Url, bucket_slug: &str) -> Result<Url, ApiUrlError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiUrlError::NotABase(base.to_string()))?
        .pop_if_empty()
        .extend(["buckets", bucket_slug, "objects"]);
    Ok(url)
}
