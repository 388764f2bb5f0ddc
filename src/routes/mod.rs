//! HTTP route handlers.
//!
//! A single liveness route plus a catch-all 404. Matching is exact: query
//! strings are ignored, but trailing slashes and case variants are not the
//! health route. Requests with the wrong method on `/health` receive the
//! same 404 as unknown paths rather than a 405; there is one fallback
//! response and no error taxonomy behind it.

pub mod health;

use axum::{routing::get, Router};
use http::StatusCode;
use tower_http::trace::TraceLayer;

/// Body of the fallback response.
const NOT_FOUND_BODY: &str = "Not Found\n";

/// Fallback handler for unmatched paths and unmatched methods.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// Creates the Axum router with the health route and the 404 fallback.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
