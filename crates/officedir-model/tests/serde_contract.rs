use officedir_model::{BlogPost, Company, ContactRequest, Insight, ReferenceEntry, Submarket};

#[test]
fn submarket_wire_format_stays_camel_case() {
    let raw = r#"{
        "id": "downtown-west",
        "name": "Downtown West",
        "lat": 51.0465,
        "lng": -114.0861,
        "buildingFilter": "Downtown West",
        "coworkingFilter": "Downtown West"
    }"#;
    let sub: Submarket = serde_json::from_str(raw).expect("parse submarket");
    assert_eq!(sub.building_filter.as_deref(), Some("Downtown West"));

    let out = serde_json::to_value(&sub).expect("serialize submarket");
    assert!(out.get("buildingFilter").is_some());
    assert!(out.get("building_filter").is_none());
}

#[test]
fn company_wire_format_round_trips() {
    let raw = r#"{
        "id": "prairie-analytics-ltd-lx2",
        "name": "Prairie Analytics Ltd.",
        "address": "604 1 St SW, Calgary",
        "website": "https://prairie.example",
        "phone": "",
        "category": "Business",
        "description": "Business added by Robin",
        "lat": 51.0447,
        "lng": -114.0719,
        "isHiring": true,
        "hiringLink": "https://prairie.example/jobs",
        "contact": {"firstName": "Robin", "lastName": "", "email": "robin@prairie.example"},
        "addedAt": "2024-06-01T12:00:00Z"
    }"#;
    let company: Company = serde_json::from_str(raw).expect("parse company");
    assert!(company.is_hiring);
    assert_eq!(
        company.contact.as_ref().map(|c| c.first_name.as_str()),
        Some("Robin")
    );

    let out = serde_json::to_value(&company).expect("serialize company");
    assert!(out.get("isHiring").is_some());
    assert!(out.get("addedAt").is_some());
}

#[test]
fn legacy_company_without_contact_or_timestamp_parses() {
    let raw = r#"{
        "id": "acme",
        "name": "Acme",
        "address": "1 Street SW",
        "lat": 51.0,
        "lng": -114.0
    }"#;
    let company: Company = serde_json::from_str(raw).expect("parse legacy company");
    assert!(company.contact.is_none());
    assert!(company.added_at.is_none());
    assert_eq!(company.website, "");
}

#[test]
fn blog_post_preserves_unknown_fields() {
    let raw = r#"{"id": "1717243200000", "title": "Q2 market notes", "heroImage": "/img/q2.jpg"}"#;
    let post: BlogPost = serde_json::from_str(raw).expect("parse post");
    assert_eq!(post.extra.get("heroImage").and_then(|v| v.as_str()), Some("/img/q2.jpg"));

    let out = serde_json::to_value(&post).expect("serialize post");
    assert_eq!(out.get("heroImage").and_then(|v| v.as_str()), Some("/img/q2.jpg"));
}

#[test]
fn reference_entry_description_is_optional() {
    let entry: ReferenceEntry =
        serde_json::from_str(r#"{"firm": "North Design Co.", "specialty": "Workplace interiors"}"#)
            .expect("parse entry");
    assert!(entry.description.is_none());
}

#[test]
fn contact_request_validation_matches_form_rules() {
    let ok = ContactRequest {
        name: None,
        email: "tenant@example.com".to_string(),
        company: None,
        message: "Looking for 8,000 sq ft downtown.".to_string(),
    };
    assert!(ok.validate().is_ok());
    assert_eq!(ok.display_name(), "Not provided");

    let bad_email = ContactRequest {
        email: "not-an-email".to_string(),
        message: "hello".to_string(),
        ..ContactRequest::default()
    };
    assert!(bad_email.validate().is_err());

    let missing_message = ContactRequest {
        email: "tenant@example.com".to_string(),
        ..ContactRequest::default()
    };
    assert!(missing_message.validate().is_err());
}

#[test]
fn insight_serializes_all_fields() {
    let insight = Insight::from_markdown("vacancy-q2", "---\ntitle: \"Vacancy, Q2\"\ndate: \"2024-04-02\"\n---\nBody.\n");
    let out = serde_json::to_value(&insight).expect("serialize insight");
    assert_eq!(out.get("title").and_then(|v| v.as_str()), Some("Vacancy, Q2"));
    assert_eq!(out.get("content").and_then(|v| v.as_str()), Some("Body.\n"));
}
