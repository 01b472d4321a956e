//! Preview server
//!
//! Renders pages on request from the same components the static export
//! uses. Any path that is not a page gets the not-found document.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use site_core::sitemap::{build_sitemap, to_xml};
use site_core::Site;
use tower_http::trace::TraceLayer;

use crate::components::{STYLESHEET, STYLESHEET_PATH};
use crate::render::render_path;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn sitemap_handler(State(site): State<Arc<Site>>) -> Response {
    let today = chrono::Local::now().date_naive();
    let xml = to_xml(&build_sitemap(&site.config, &site.content, today));
    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}

pub async fn stylesheet_handler() -> Response {
    ([(header::CONTENT_TYPE, "text/css")], STYLESHEET).into_response()
}

/// Render the page at the request path
pub async fn page_handler(State(site): State<Arc<Site>>, uri: Uri) -> Response {
    match render_path(&site, uri.path()) {
        Ok(page) => (page.status, Html(page.html)).into_response(),
        Err(e) => {
            tracing::error!(path = %uri.path(), error = ?e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Build the preview router
pub fn router(site: Arc<Site>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route(STYLESHEET_PATH, get(stylesheet_handler))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(site)
}
