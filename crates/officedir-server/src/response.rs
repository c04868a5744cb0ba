// SPDX-License-Identifier: Apache-2.0

use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use officedir_api::{ApiError, ApiErrorCode};
use serde::Serialize;
use serde_json::json;
use sha2::{Digest, Sha256};

#[must_use]
pub(crate) fn api_error_status(code: ApiErrorCode) -> StatusCode {
    match code {
        ApiErrorCode::InvalidParameter | ApiErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
        ApiErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        // Configuration and upstream failures both read as a generic 500
        // in the browser; the structured code stays in the body.
        ApiErrorCode::NotConfigured | ApiErrorCode::UpstreamUnavailable | ApiErrorCode::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[must_use]
pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status = api_error_status(err.code);
    (status, Json(json!({"error": err.message, "detail": err}))).into_response()
}

#[must_use]
pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn if_none_match(headers: &HeaderMap) -> Option<String> {
    headers
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// JSON response with a content-hash ETag; answers 304 when the client
/// already holds the current body.
#[must_use]
pub(crate) fn etag_json_response<T: Serialize>(headers: &HeaderMap, payload: &T) -> Response {
    let body = serde_json::to_vec(payload).unwrap_or_default();
    let etag = format!("\"{}\"", sha256_hex(&body));
    if if_none_match(headers).as_deref() == Some(etag.as_str()) {
        let mut resp = StatusCode::NOT_MODIFIED.into_response();
        if let Ok(value) = HeaderValue::from_str(&etag) {
            resp.headers_mut().insert("etag", value);
        }
        return resp;
    }
    let mut resp = (
        StatusCode::OK,
        [("content-type", "application/json")],
        body,
    )
        .into_response();
    if let Ok(value) = HeaderValue::from_str(&etag) {
        resp.headers_mut().insert("etag", value);
    }
    resp
}
