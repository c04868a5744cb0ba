// SPDX-License-Identifier: Apache-2.0

use crate::request_id::propagated_request_id;
use crate::response::api_error_response;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use officedir_api::{ApiError, ApiErrorCode};
use officedir_model::BlogPost;
use serde_json::json;
use tracing::{error, info};

pub(crate) async fn list_posts_handler(State(state): State<AppState>) -> Response {
    Json(state.store.posts()).into_response()
}

/// Upsert by id: the dashboard sends the whole post each save.
pub(crate) async fn upsert_post_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(post): Json<BlogPost>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let post = post.prepared(Utc::now());
    info!(request_id = %request_id, post_id = %post.id, "saving post");
    match state.store.upsert_post(post) {
        Ok(post) => Json(post).into_response(),
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to save post");
            api_error_response(
                ApiError::new(ApiErrorCode::Internal, "Failed to save post", json!({}), request_id),
            )
        }
    }
}

pub(crate) async fn delete_post_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    match state.store.delete_post(&id) {
        Ok(()) => Json(json!({"success": true})).into_response(),
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to delete post");
            api_error_response(
                ApiError::new(ApiErrorCode::Internal, "Failed to delete post", json!({}), request_id),
            )
        }
    }
}
