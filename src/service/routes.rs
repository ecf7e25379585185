//! HTTP surface of the counter service.
//!
//! One counting endpoint (`/view-count`) plus a health probe. Every
//! response, including errors and the method-not-allowed fallback,
//! carries permissive CORS headers so the display widget can call the
//! service from any rendered page.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::service::error::ServiceError;
use crate::store::CounterStore;

/// Response body for both read and increment.
#[derive(Debug, Serialize, Deserialize)]
pub struct ViewCountBody {
    pub slug: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn CounterStore>,
}

#[derive(Debug, Deserialize)]
struct SlugQuery {
    #[serde(default)]
    slug: Option<String>,
}

pub fn build_router(store: Arc<dyn CounterStore>) -> Router {
    let state = AppState { store };
    Router::new()
        .route(
            "/view-count",
            get(read_count)
                .post(increment_count)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .layer(map_response(apply_common_headers))
        .with_state(state)
}

/// `GET /view-count?slug=...`: current count, no side effects.
async fn read_count(
    State(state): State<AppState>,
    Query(query): Query<SlugQuery>,
) -> Result<Json<ViewCountBody>, ServiceError> {
    let slug = validate_slug(query.slug)?;
    let count = state.store.get(&slug)?.unwrap_or(0);
    tracing::debug!(%slug, count, "read view count");
    Ok(Json(ViewCountBody { slug, count }))
}

/// `POST /view-count?slug=...`: read-modify-write, returns the new count.
///
/// Not atomic against a concurrent increment for the same slug: both
/// writers can observe the same base value and one increment is lost.
/// Accepted tradeoff of the store's consistency model.
async fn increment_count(
    State(state): State<AppState>,
    Query(query): Query<SlugQuery>,
) -> Result<Json<ViewCountBody>, ServiceError> {
    let slug = validate_slug(query.slug)?;
    let current = state.store.get(&slug)?.unwrap_or(0);
    let count = current + 1;
    state.store.set(&slug, count)?;
    tracing::info!(%slug, count, "incremented view count");
    Ok(Json(ViewCountBody { slug, count }))
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn method_not_allowed() -> Response {
    let body = serde_json::json!({ "error": "Method not allowed" });
    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "viewcount".to_string(),
    })
}

fn validate_slug(slug: Option<String>) -> Result<String, ServiceError> {
    match slug {
        Some(slug) if !slug.is_empty() => Ok(slug),
        _ => Err(ServiceError::missing_slug()),
    }
}

async fn apply_common_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
