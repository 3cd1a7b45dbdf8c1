//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{
    MapLinkFields, build_geo_uri, extract_from_map_link, validate_latitude, validate_longitude,
};
use proptest::prelude::*;

/// Decimal text in the accepted shape: optional sign, digits, optional fraction
fn decimal_text(int_range: std::ops::RangeInclusive<u32>) -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("+"), Just("-")],
        int_range,
        prop::option::of(0u32..1_000_000),
    )
        .prop_map(|(sign, int, frac)| match frac {
            Some(frac) => format!("{sign}{int}.{frac}"),
            None => format!("{sign}{int}"),
        })
}

// ============================================================================
// Coordinate Property Tests
// ============================================================================

mod coordinate_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_latitude_is_echoed(text in decimal_text(0..=89)) {
            let lat = validate_latitude(&text);
            prop_assert!(lat.is_ok());
            let lat = lat.unwrap();
            prop_assert_eq!(lat.as_str(), text.as_str());
        }

        #[test]
        fn valid_longitude_is_echoed(text in decimal_text(0..=179)) {
            let lon = validate_longitude(&text);
            prop_assert!(lon.is_ok());
            let lon = lon.unwrap();
            prop_assert_eq!(lon.as_str(), text.as_str());
        }

        #[test]
        fn latitude_beyond_range_rejected(text in decimal_text(91..=100_000)) {
            prop_assert!(validate_latitude(&text).is_err());
        }

        #[test]
        fn longitude_beyond_range_rejected(text in decimal_text(181..=100_000)) {
            prop_assert!(validate_longitude(&text).is_err());
        }

        #[test]
        fn alphabetic_text_rejected(text in "[a-zA-Z ]{0,12}") {
            prop_assert!(validate_latitude(&text).is_err());
            prop_assert!(validate_longitude(&text).is_err());
        }
    }
}

// ============================================================================
// Geo URI Property Tests
// ============================================================================

mod geo_uri_tests {
    use super::*;

    proptest! {
        #[test]
        fn uri_without_query_joins_coordinates(
            lat in decimal_text(0..=89),
            lon in decimal_text(0..=179)
        ) {
            let uri = build_geo_uri(&lat, &lon, "").unwrap();
            prop_assert_eq!(uri.into_string(), format!("geo:{lat},{lon}"));
        }

        #[test]
        fn query_never_contains_raw_ampersand(query in "[a-z &]{1,20}") {
            let uri = build_geo_uri("1", "2", &query).unwrap();
            let rendered = uri.as_str();
            prop_assert!(!rendered.contains('&'));
            prop_assert!(rendered.starts_with("geo:1,2?q="));
        }

        #[test]
        fn non_empty_query_defaults_empty_coordinates(query in "[a-z]{1,20}") {
            let uri = build_geo_uri("", "", &query).unwrap();
            prop_assert_eq!(uri.into_string(), format!("geo:0,0?q={query}"));
        }
    }
}

// ============================================================================
// Maps Link Property Tests
// ============================================================================

mod map_link_tests {
    use super::*;

    proptest! {
        #[test]
        fn extraction_never_panics(link in ".{0,80}") {
            let _ = extract_from_map_link(&link);
        }

        #[test]
        fn foreign_links_yield_empty_fields(path in "[a-z0-9&=,.?]{0,40}") {
            let link = format!("https://example.org/{path}");
            prop_assert_eq!(extract_from_map_link(&link), MapLinkFields::default());
        }

        #[test]
        fn coordinates_round_trip_through_link(
            lat in decimal_text(0..=89),
            lon in decimal_text(0..=179)
        ) {
            let link = format!("http://maps.google.com/?ie=UTF8&ll={lat},{lon}&z=12");
            let fields = extract_from_map_link(&link);
            prop_assert_eq!(&fields.latitude, &lat);
            prop_assert_eq!(&fields.longitude, &lon);
            prop_assert!(build_geo_uri(&fields.latitude, &fields.longitude, "").is_ok());
        }

        #[test]
        fn query_words_round_trip_through_link(words in prop::collection::vec("[a-z]{1,8}", 1..4)) {
            let raw = words.join("+");
            let link = format!("http://maps.google.com/?ie=UTF8&q={raw}&ll=1,2&z=12");
            let fields = extract_from_map_link(&link);
            prop_assert_eq!(fields.query, words.join(" "));
        }
    }
}
