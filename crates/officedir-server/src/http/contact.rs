// SPDX-License-Identifier: Apache-2.0

use crate::request_id::propagated_request_id;
use crate::response::api_error_response;
use crate::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use officedir_api::{ApiError, StatusDto};
use officedir_model::ContactRequest;
use tracing::{error, info};

pub(crate) async fn contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(submission): Json<ContactRequest>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    if let Err(e) = submission.validate() {
        return api_error_response(
            ApiError::validation_failed(e.to_string()).with_request_id(&request_id),
        );
    }

    let Some(mailer) = state.mailer.as_ref() else {
        error!(request_id = %request_id, "contact submission with no mail API key configured");
        return api_error_response(
            ApiError::not_configured("Email service not configured").with_request_id(&request_id),
        );
    };

    info!(request_id = %request_id, "forwarding contact submission");
    match mailer.send_contact(&submission).await {
        Ok(()) => Json(StatusDto {
            success: true,
            message: "Email sent successfully".to_string(),
        })
        .into_response(),
        Err(e) => {
            error!(request_id = %request_id, error = %e, "contact submission failed");
            api_error_response(
                ApiError::upstream("Failed to send email. Please try again later.")
                    .with_request_id(&request_id),
            )
        }
    }
}
