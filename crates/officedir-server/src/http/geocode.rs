// SPDX-License-Identifier: Apache-2.0

use crate::request_id::propagated_request_id;
use crate::response::api_error_response;
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use officedir_api::ApiError;
use serde_json::json;
use std::collections::HashMap;
use tracing::warn;

/// Proxy for the address-autocomplete field. Short queries return an
/// empty list without an outbound call.
pub(crate) async fn geocode_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let query = params.get("q").map(String::as_str).unwrap_or_default();
    match state.geocoder.search(query).await {
        Ok(suggestions) => {
            let enriched: Vec<_> = suggestions
                .iter()
                .map(|s| {
                    json!({
                        "display_name": s.display_name,
                        "lat": s.lat,
                        "lon": s.lon,
                        "address": s.address,
                        "formatted": s.formatted(),
                    })
                })
                .collect();
            Json(enriched).into_response()
        }
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "address lookup failed");
            api_error_response(
                ApiError::upstream("Address lookup is unavailable. Please try again later.")
                    .with_request_id(&request_id),
            )
        }
    }
}
