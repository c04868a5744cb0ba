// SPDX-License-Identifier: Apache-2.0

use officedir_api::{ApiError, ApiErrorCode, LeadSubmissionDto};

#[test]
fn error_codes_serialize_as_snake_case_strings() {
    let json = serde_json::to_string(&ApiErrorCode::UpstreamUnavailable).expect("serialize");
    assert_eq!(json, "\"upstream_unavailable\"");
    let back: ApiErrorCode = serde_json::from_str("\"validation_failed\"").expect("parse");
    assert_eq!(back, ApiErrorCode::ValidationFailed);
}

#[test]
fn api_error_body_round_trips() {
    let err = ApiError::validation_failed("Email and message are required")
        .with_request_id("req-42");
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(
        json.get("code").and_then(|v| v.as_str()),
        Some("validation_failed")
    );
    assert_eq!(json.get("request_id").and_then(|v| v.as_str()), Some("req-42"));

    let back: ApiError = serde_json::from_value(json).expect("parse");
    assert_eq!(back, err);
}

#[test]
fn not_found_carries_subject_in_message() {
    let err = ApiError::not_found("building");
    assert_eq!(err.code, ApiErrorCode::NotFound);
    assert_eq!(err.message, "building not found");
}

#[test]
fn lead_submission_flattens_contact_fields() {
    let raw = r#"{
        "name": "Robin",
        "email": "robin@example.com",
        "areas": ["downtown-core"],
        "amenities": ["parking"],
        "program": {"ceoOffice": 1}
    }"#;
    let dto: LeadSubmissionDto = serde_json::from_str(raw).expect("parse lead");
    assert_eq!(dto.lead.name, "Robin");
    assert_eq!(dto.program.counts.len(), 1);
}
