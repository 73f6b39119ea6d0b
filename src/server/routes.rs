//! Route handlers

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info};
use serde_json::json;

use super::AppState;
use crate::generate_solmap_image;

/// `GET /v1/block/:num` — render the solmap image for one solmap number.
///
/// Always responds 200 with a complete PNG when the ledger is reachable; a
/// solmap number with no block behind it renders as pure background. The
/// pipeline defines no HTTP mapping for fetch failures, so the translation
/// to 502 lives here.
pub async fn block_image(State(state): State<AppState>, Path(num): Path<u64>) -> Response {
    info!("Rendering solmap {}", num);

    match generate_solmap_image(&state.config.rpc_url, num).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(err) => {
            error!("Failed to render solmap {}: {}", num, err);
            (StatusCode::BAD_GATEWAY, "Failed to reach the ledger RPC endpoint.").into_response()
        }
    }
}

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found.")
}
