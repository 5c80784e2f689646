//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span, info_span};

type MakeSpan = fn(&Request<Body>) -> Span;

/// Creates a tracing middleware for site and API requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Opens an `INFO` span named `request` with the method and path. The query
///   string is left out of the span.
///
/// **On Response:**
/// - Logs status and latency in milliseconds at `INFO`
///
/// **On Failure:**
/// - 5xx responses (store failures render as 502) are logged again at `WARN`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET path=/cars/porsche-911}: finished processing request latency=41 ms status=200
/// WARN request{method=GET path=/}: response failed classification=Status code: 502 Bad Gateway latency=12 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpan> {
    TraceLayer::new_for_http()
        .make_span_with(request_span as MakeSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}
