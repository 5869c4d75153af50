use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::proxy::error::ProxyError;
use crate::proxy::health::health_check;
use crate::proxy::upstream::UpstreamClient;

/// Shared handler state. Holds nothing mutable.
#[derive(Clone)]
pub struct AppState {
    upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    query: Option<String>,
    page: Option<String>,
}

pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/api/movies/search", get(search_movies))
        .route("/api/movies/{id}", get(movie_details))
        .route("/api/health", get(health_check))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(server)),
        )
        .with_state(state)
}

async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ProxyError> {
    // Forwarded as received; trimming is only for the blank check.
    let query = params
        .query
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .ok_or(ProxyError::MissingQuery)?;
    let page = parse_page(params.page.as_deref())?;

    let body = state.upstream.search(query, page).await?;
    Ok(Json(body))
}

async fn movie_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ProxyError> {
    let body = state.upstream.details(&id).await?;
    Ok(Json(body))
}

async fn not_found() -> ProxyError {
    ProxyError::NotFound
}

/// Absent or blank means page 1.
fn parse_page(raw: Option<&str>) -> Result<u32, ProxyError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(1),
        Some(value) => value
            .parse::<u32>()
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(|| ProxyError::InvalidPage(value.to_string())),
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
