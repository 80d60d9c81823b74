//! API endpoint handlers
//!
//! This module implements the HTTP endpoints of the downloader proxy: one
//! downloader route per platform, the formatting route, the form UI and a
//! health check.

use crate::api::error::ApiError;
use crate::api::ui::serve_index;
use crate::conversion::envelope::wrap_upstream;
use crate::conversion::result_formatter::format_response;
use crate::core::config::Config;
use crate::core::constants::{route, service};
use crate::core::provider::Scraper;
use crate::models::platform::Platform;
use crate::models::response::{ApiEnvelope, FormattedResult};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub scraper: Arc<dyn Scraper>,
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(route::INDEX, get(serve_index))
        .route(route::HEALTH, get(health_check))
        .route(route::DOWNLOADER, get(download))
        .route(route::FORMAT, post(render_result))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn parse_platform(slug: &str) -> Result<Platform, ApiError> {
    Platform::from_slug(slug).ok_or_else(|| ApiError::UnknownPlatform(slug.to_string()))
}

/// GET /api/downloader/{platform} - Scrape a URL or run a search
async fn download(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ApiEnvelope>, ApiError> {
    let platform = parse_platform(&slug)?;

    let input = params
        .get(platform.query_param())
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ApiError::MissingInput(platform.missing_input_message()))?;

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        "📥 Downloader request: id={}, platform={}, {}={}",
        request_id,
        platform,
        platform.query_param(),
        input
    );

    match state.scraper.scrape(platform, input).await {
        Ok(upstream) => {
            debug!("Scraper result for {}: {}", request_id, upstream);
            info!("✅ Downloader request {} completed", request_id);
            Ok(Json(wrap_upstream(platform, upstream)))
        }
        Err(e) => {
            error!(
                "Scraper error: id={}, platform={}, scraper={}: {}",
                request_id,
                platform,
                state.scraper.scraper_name(),
                e
            );
            Err(ApiError::from(e))
        }
    }
}

/// POST /api/format/{platform} - Render a downloader response as text
async fn render_result(
    Path(slug): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<FormattedResult>, ApiError> {
    let platform = parse_platform(&slug)?;
    Ok(Json(format_response(platform, &body)))
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": service::NAME,
        "version": service::VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "scraper": state.scraper.scraper_name(),
        "scraper_url": state.config.scraper_base_url,
        "scraper_auth": state.config.scraper_api_key.is_some(),
        "platforms": Platform::ALL.iter().map(|p| p.slug()).collect::<Vec<_>>(),
    }))
}
