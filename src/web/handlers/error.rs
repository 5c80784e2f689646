//! Error pages for the site.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::error::ContentError;
use crate::state::{AppState, SiteContext};

/// Template for error pages.
///
/// Renders `templates/error.html` inside the site layout.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub site_name: String,
    pub status: u16,
    pub heading: String,
    pub message: String,
}

/// A page-level failure, rendered as an HTML error page.
///
/// - [`PageError::NotFound`] renders 404
/// - [`PageError::Unavailable`] renders 502; content failures never produce an
///   empty page
#[derive(Debug)]
pub enum PageError {
    NotFound { site_name: String, what: String },
    Unavailable { site_name: String, reason: String },
}

impl PageError {
    pub fn not_found(site: &SiteContext, what: impl Into<String>) -> Self {
        Self::NotFound {
            site_name: site.name.clone(),
            what: what.into(),
        }
    }

    /// Maps a repository error. An invalid request can only come from a
    /// malformed URL, so it renders as not-found.
    pub fn content(site: &SiteContext, error: ContentError) -> Self {
        match error {
            ContentError::InvalidRequest(message) => Self::not_found(site, message),
            error @ ContentError::FetchFailure { .. } => Self::Unavailable {
                site_name: site.name.clone(),
                reason: error.to_string(),
            },
        }
    }

    /// An item whose metadata does not fit its typed view.
    pub fn malformed(site: &SiteContext, error: serde_json::Error) -> Self {
        Self::Unavailable {
            site_name: site.name.clone(),
            reason: format!("malformed content: {error}"),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, template) = match self {
            PageError::NotFound { site_name, what } => (
                StatusCode::NOT_FOUND,
                ErrorTemplate {
                    site_name,
                    status: 404,
                    heading: "Page not found".to_string(),
                    message: what,
                },
            ),
            PageError::Unavailable { site_name, reason } => {
                warn!("Rendering error page: {}", reason);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorTemplate {
                        site_name,
                        status: 502,
                        heading: "Content unavailable".to_string(),
                        message: "We could not load this page right now. Please try again shortly."
                            .to_string(),
                    },
                )
            }
        };

        (status, template).into_response()
    }
}

/// Renders the 404 page for unrouted paths.
pub async fn fallback_handler(State(state): State<AppState>) -> PageError {
    PageError::not_found(&state.site, "There is nothing at this address.")
}
