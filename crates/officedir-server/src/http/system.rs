// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use officedir_api::{VersionDto, API_VERSION};
use serde_json::json;
use std::sync::atomic::Ordering;

pub(crate) async fn landing_handler() -> impl IntoResponse {
    Json(json!({
        "service": crate::CRATE_NAME,
        "api_version": API_VERSION,
        "endpoints": [
            "/v1/buildings",
            "/v1/submarkets",
            "/v1/coworking",
            "/v1/companies",
            "/v1/references",
            "/v1/posts",
            "/v1/insights",
            "/v1/contact",
            "/v1/geocode",
            "/v1/calculator/estimate",
            "/v1/markers",
        ],
    }))
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Ready once the data root exists; the store treats absent collections
/// as empty, so an empty directory is still ready.
pub(crate) async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    if state.ready.load(Ordering::Relaxed) && state.store.root().exists() {
        (StatusCode::OK, Json(json!({"ready": true})))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"ready": false})),
        )
    }
}

pub(crate) async fn version_handler() -> impl IntoResponse {
    Json(VersionDto {
        name: crate::CRATE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        api_version: API_VERSION.to_string(),
    })
}
