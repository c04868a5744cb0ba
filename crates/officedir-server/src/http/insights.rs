// SPDX-License-Identifier: Apache-2.0

use crate::request_id::propagated_request_id;
use crate::response::{api_error_response, etag_json_response};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use officedir_api::ApiError;

pub(crate) async fn list_insights_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    etag_json_response(&headers, &state.store.insights().all())
}

pub(crate) async fn insight_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    match state.store.insights().load(&slug) {
        Some(insight) => Json(insight).into_response(),
        None => api_error_response(ApiError::not_found("insight").with_request_id(&request_id)),
    }
}
