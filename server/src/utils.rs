use std::sync::Arc;

use app::ImageDescriptor;
use app::types::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Json, Response};
use manifest::{ManifestError, catalog_json, load_macros, with_base_path};
use serde_json::json;
use tracing::{error, info};

use crate::config::ServerConfig;

fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

/// Builds the catalog served at `/data.json`, if one is configured.
///
/// Returns `Ok(None)` when no macro file is set; `data.json` is then whatever
/// static file sits in the site root.
pub fn load_catalog(
    config: &ServerConfig,
) -> Result<Option<Arc<Vec<ImageDescriptor>>>, ManifestError> {
    let Some(path) = &config.macros else {
        return Ok(None);
    };
    let descriptors = with_base_path(load_macros(path)?, &config.image_base);
    info!(count = descriptors.len(), path = %path.display(), "Generated gallery catalog");
    Ok(Some(Arc::new(descriptors)))
}

pub async fn catalog_handler(State(state): State<AppState>) -> Response<String> {
    let Some(catalog) = state.catalog else {
        return build_response(String::new(), "text/plain", StatusCode::NOT_FOUND);
    };
    match catalog_json(&catalog) {
        Ok(body) => build_response(body, "application/json", StatusCode::OK),
        Err(encode_error) => {
            error!(%encode_error, "Failed to encode gallery catalog");
            build_response(String::new(), "text/plain", StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "gallery",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
