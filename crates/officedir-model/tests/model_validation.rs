use chrono::{TimeZone, Utc};
use officedir_model::{
    Building, Company, CoworkingSpace, MapMarker, NewCompany, Submarket, CITY_CENTER,
};

fn mk_submarket(building_filter: Option<&str>) -> Submarket {
    Submarket {
        id: officedir_model::parse_slug("downtown-core").expect("slug"),
        name: "Downtown Core".to_string(),
        lat: 51.045,
        lng: -114.07,
        description: None,
        building_filter: building_filter.map(str::to_string),
        coworking_filter: None,
    }
}

#[test]
fn submarket_rejects_out_of_range_coordinates() {
    let mut sub = mk_submarket(None);
    sub.lat = 123.0;
    assert!(sub.validate().is_err());
}

#[test]
fn submarket_filter_matches_case_insensitively() {
    let sub = mk_submarket(Some("Downtown Core"));
    assert!(sub.matches_building(Some("downtown core")));
    assert!(sub.matches_building(Some("  DOWNTOWN CORE ")));
    assert!(!sub.matches_building(Some("Beltline")));
    assert!(!sub.matches_building(None));
}

#[test]
fn submarket_without_filter_groups_nothing() {
    let sub = mk_submarket(None);
    assert!(!sub.matches_building(Some("Downtown Core")));
}

#[test]
fn building_marker_requires_both_coordinates() {
    let building = Building {
        id: officedir_model::parse_slug("bankers-hall").expect("slug"),
        name: "Bankers Hall".to_string(),
        address: Some("855 2 St SW".to_string()),
        submarket: Some("Downtown Core".to_string()),
        description: None,
        photo: None,
        amenities: vec![],
        history: None,
        built_reason: None,
        cost: None,
        lat: Some(51.045),
        lng: None,
    };
    assert!(building.marker().is_none());

    let with_lng = Building {
        lng: Some(-114.069),
        ..building
    };
    let marker = with_lng.marker().expect("marker");
    assert_eq!(marker.label, "Bankers Hall");
}

#[test]
fn marker_rejects_non_finite_coordinates() {
    assert!(MapMarker::try_new(Some(f64::NAN), Some(-114.0), "x").is_none());
    assert!(MapMarker::try_new(Some(51.0), Some(f64::INFINITY), "x").is_none());
    assert!(MapMarker::try_new(Some(91.0), Some(-114.0), "x").is_none());
}

#[test]
fn coworking_space_requires_name() {
    let space = CoworkingSpace {
        id: officedir_model::parse_slug("work-nicer").expect("slug"),
        name: "  ".to_string(),
        location: None,
        submarket: None,
        description: None,
        image: None,
        amenities: vec![],
        history: None,
        cost: None,
        lat: None,
        lng: None,
    };
    assert!(space.validate().is_err());
}

#[test]
fn company_submission_fills_directory_defaults() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single().expect("ts");
    let submission = NewCompany {
        name: "Prairie Analytics Ltd.".to_string(),
        address: "604 1 St SW, Calgary".to_string(),
        first_name: Some("Robin".to_string()),
        ..NewCompany::default()
    };
    let company = Company::from_submission(submission, now);

    assert!(company.id.starts_with("prairie-analytics-ltd-"));
    assert_eq!(company.category, "Business");
    assert_eq!(company.description, "Business added by Robin");
    assert_eq!(company.lat, CITY_CENTER.lat);
    assert_eq!(company.lng, CITY_CENTER.lng);
    assert!(!company.is_hiring);
    assert_eq!(company.added_at, Some(now));
    let contact = company.contact.expect("contact");
    assert_eq!(contact.first_name, "Robin");
    assert_eq!(contact.email, "");
}

#[test]
fn company_submission_without_contact_names_credits_user() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single().expect("ts");
    let submission = NewCompany {
        name: "Acme".to_string(),
        address: "1 Street".to_string(),
        ..NewCompany::default()
    };
    let company = Company::from_submission(submission, now);
    assert_eq!(company.description, "Business added by User");
}

#[test]
fn company_submission_requires_name_and_address() {
    let missing_address = NewCompany {
        name: "Acme".to_string(),
        ..NewCompany::default()
    };
    assert!(missing_address.validate().is_err());

    let missing_name = NewCompany {
        address: "1 Street".to_string(),
        ..NewCompany::default()
    };
    assert!(missing_name.validate().is_err());
}

#[test]
fn timestamp_id_suffix_is_base36_of_millis() {
    let now = Utc.timestamp_millis_opt(36).single().expect("ts");
    assert_eq!(officedir_model::timestamp_id_suffix(now), "10");
    let zero = Utc.timestamp_millis_opt(0).single().expect("ts");
    assert_eq!(officedir_model::timestamp_id_suffix(zero), "0");
}
