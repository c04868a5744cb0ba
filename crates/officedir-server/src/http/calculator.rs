// SPDX-License-Identifier: Apache-2.0

use crate::request_id::propagated_request_id;
use crate::response::api_error_response;
use crate::AppState;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use officedir_api::{ApiError, ApiErrorCode, EstimateResponseDto, LeadSubmissionDto};
use officedir_calc::{estimate, LeadRecord, SpaceKind, SpaceProgram};
use officedir_model::timestamp_id_suffix;
use serde_json::json;
use tracing::{error, info};

/// The space catalog the calculator form is built from.
pub(crate) async fn spaces_handler() -> Response {
    let spaces: Vec<_> = SpaceKind::ALL
        .iter()
        .map(|kind| {
            json!({
                "kind": kind,
                "label": kind.label(),
                "dimensions": kind.dimensions(),
                "sqft": kind.area_sqft(),
                "group": kind.group(),
            })
        })
        .collect();
    Json(spaces).into_response()
}

pub(crate) async fn estimate_handler(Json(program): Json<SpaceProgram>) -> Response {
    let estimate = estimate(&program);
    Json(EstimateResponseDto { program, estimate }).into_response()
}

/// Lead capture behind the "download PDF + deals" modal: validate,
/// price the program, persist the whole package.
pub(crate) async fn lead_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(submission): Json<LeadSubmissionDto>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    if let Err(e) = submission.lead.validate() {
        return api_error_response(
            ApiError::validation_failed(e.to_string()).with_request_id(&request_id),
        );
    }

    let now = Utc::now();
    let record = LeadRecord {
        id: format!("lead-{}", timestamp_id_suffix(now)),
        lead: submission.lead,
        estimate: estimate(&submission.program),
        program: submission.program,
        submitted_at: now.to_rfc3339(),
    };
    info!(request_id = %request_id, lead_id = %record.id, "capturing calculator lead");
    match state.store.add_lead(record.clone()) {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({"success": true, "lead": record.id})),
        )
            .into_response(),
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to store lead");
            api_error_response(ApiError::new(
                ApiErrorCode::Internal,
                "Failed to save your details. Please try again later.",
                json!({}),
                request_id,
            ))
        }
    }
}
