use officedir_model::{parse_slug, slugify, Coordinates};
use proptest::prelude::*;

proptest! {
    #[test]
    fn slugify_never_produces_invalid_slugs(input in ".{0,120}") {
        let out = slugify(&input);
        if !out.is_empty() {
            prop_assert!(parse_slug(&out).is_ok(), "slugify produced invalid slug: {out:?}");
        }
    }

    #[test]
    fn slugify_is_idempotent(input in ".{0,120}") {
        let once = slugify(&input);
        prop_assert_eq!(slugify(&once), once.clone());
    }

    #[test]
    fn valid_coordinates_round_trip_markers(
        lat in -90.0f64..=90.0,
        lng in -180.0f64..=180.0,
    ) {
        let coords = Coordinates::new(lat, lng);
        prop_assert!(coords.is_valid());
        prop_assert!(Coordinates::from_parts(Some(lat), Some(lng)).is_some());
    }
}
