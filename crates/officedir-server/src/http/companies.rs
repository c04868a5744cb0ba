// SPDX-License-Identifier: Apache-2.0

use crate::request_id::propagated_request_id;
use crate::response::api_error_response;
use crate::AppState;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use officedir_api::{ApiError, CompanyCreatedDto};
use officedir_model::{Company, NewCompany};
use tracing::{error, info};

pub(crate) async fn list_companies_handler(State(state): State<AppState>) -> Response {
    // Missing or corrupt file reads as an empty directory.
    Json(state.store.companies()).into_response()
}

pub(crate) async fn create_company_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(submission): Json<NewCompany>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    if let Err(e) = submission.validate() {
        return api_error_response(
            ApiError::validation_failed(e.to_string()).with_request_id(&request_id),
        );
    }

    let company = Company::from_submission(submission, Utc::now());
    info!(request_id = %request_id, company_id = %company.id, "adding business to directory");
    match state.store.add_company(company) {
        Ok(company) => (
            StatusCode::CREATED,
            Json(CompanyCreatedDto {
                success: true,
                company,
                message: "Business added successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to add business");
            api_error_response(
                ApiError::new(
                    officedir_api::ApiErrorCode::Internal,
                    "Failed to add business",
                    serde_json::json!({}),
                    request_id,
                ),
            )
        }
    }
}
