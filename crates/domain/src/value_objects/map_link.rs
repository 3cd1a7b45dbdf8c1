//! Maps link value object
//!
//! Pulls latitude, longitude and query text out of a pasted maps link,
//! for example:
//!
//! `http://maps.google.com/?ie=UTF8&ll=40.741404,-74.00322&spn=0.001484,0.003101&z=18`
//!
//! Only the `&q=`, `&sll=` and `&ll=` markers are recognized. Anything that
//! is not a maps link, or lacks the markers, yields empty fields.
//! Extracted coordinates are not validated.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::geo_query::GeoQuery;

/// Links accepted for extraction. The dots are unescaped, like the
/// coordinate pattern, so they match any character except a line
/// terminator (`\n`, `\r`, U+0085, U+2028, U+2029).
const MAPS_LINK_PATTERN: &str = concat!(
    r"^http://maps[^\r\n\x{85}\x{2028}\x{2029}]google[^\r\n\x{85}\x{2028}\x{2029}]com/",
    r"[^\r\n\x{85}\x{2028}\x{2029}]*$",
);

/// A query segment only counts when another parameter follows it
const QUERY_SEGMENT_PATTERN: &str = "&q=[^&]*&";

/// Same rule for the coordinate segment
const COORDINATES_SEGMENT_PATTERN: &str = "&s?ll=[^&]*&";

const QUERY_MARKER: &str = "&q=";
const SEARCH_COORDINATES_MARKER: &str = "&sll=";
const COORDINATES_MARKER: &str = "&ll=";

#[allow(clippy::expect_used)] // Infallible with valid static patterns
static MAPS_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MAPS_LINK_PATTERN).expect("Failed to compile maps link pattern"));

#[allow(clippy::expect_used)]
static QUERY_SEGMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(QUERY_SEGMENT_PATTERN).expect("Failed to compile query segment pattern")
});

#[allow(clippy::expect_used)]
static COORDINATES_SEGMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(COORDINATES_SEGMENT_PATTERN).expect("Failed to compile coordinates segment pattern")
});

/// Raw field values extracted from a maps link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLinkFields {
    /// Latitude text, unvalidated
    pub latitude: String,
    /// Longitude text, unvalidated
    pub longitude: String,
    /// Decoded query text
    pub query: String,
}

impl MapLinkFields {
    /// True when nothing could be extracted
    pub fn is_empty(&self) -> bool {
        self.latitude.is_empty() && self.longitude.is_empty() && self.query.is_empty()
    }
}

/// A link recognized as coming from the maps service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLink<'a> {
    link: &'a str,
}

impl<'a> MapLink<'a> {
    /// Recognize a maps link, or `None` for anything else
    pub fn parse(link: &'a str) -> Option<Self> {
        MAPS_LINK_REGEX.is_match(link).then_some(Self { link })
    }

    /// Decoded query text, empty when no terminated `&q=` segment exists
    pub fn query(&self) -> GeoQuery {
        if !QUERY_SEGMENT_REGEX.is_match(self.link) {
            return GeoQuery::default();
        }

        segment_after(self.link, QUERY_MARKER)
            .map(GeoQuery::from_link_segment)
            .unwrap_or_default()
    }

    /// Raw `(latitude, longitude)` text, empty when no terminated
    /// `&sll=`/`&ll=` segment exists
    ///
    /// `&sll=` wins over `&ll=`. The value is split at its first comma;
    /// without a comma everything is latitude.
    pub fn coordinates(&self) -> (String, String) {
        if !COORDINATES_SEGMENT_REGEX.is_match(self.link) {
            return (String::new(), String::new());
        }

        let value = segment_after(self.link, SEARCH_COORDINATES_MARKER)
            .or_else(|| segment_after(self.link, COORDINATES_MARKER))
            .unwrap_or_default();

        match value.split_once(',') {
            Some((lat, lon)) => (lat.to_string(), lon.to_string()),
            None => (value.to_string(), String::new()),
        }
    }

    /// All three fields at once
    pub fn fields(&self) -> MapLinkFields {
        let (latitude, longitude) = self.coordinates();
        MapLinkFields {
            latitude,
            longitude,
            query: self.query().as_str().to_string(),
        }
    }
}

/// Text following the first occurrence of `marker`, up to the next `&`
/// or the end of the link
fn segment_after<'a>(link: &'a str, marker: &str) -> Option<&'a str> {
    let start = link.find(marker)? + marker.len();
    let rest = &link[start..];
    Some(rest.find('&').map_or(rest, |end| &rest[..end]))
}

/// Extract latitude, longitude and query from a pasted maps link
///
/// Never fails: a link from any other host comes back as empty fields.
///
/// # Examples
///
/// ```
/// use domain::extract_from_map_link;
///
/// let fields = extract_from_map_link(
///     "http://maps.google.com/?ie=UTF8&ll=40.741404,-74.00322&spn=0.001484,0.003101&z=18",
/// );
/// assert_eq!(fields.latitude, "40.741404");
/// assert_eq!(fields.longitude, "-74.00322");
/// assert_eq!(fields.query, "");
///
/// assert!(extract_from_map_link("http://bing.com/maps?ll=1,2&z=3").is_empty());
/// ```
pub fn extract_from_map_link(link: &str) -> MapLinkFields {
    MapLink::parse(link)
        .map(|link| link.fields())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        "http://maps.google.com/?ie=UTF8&ll=40.741404,-74.00322&spn=0.001484,0.003101&z=18";

    #[test]
    fn extracts_coordinates() {
        let fields = extract_from_map_link(SAMPLE);
        assert_eq!(fields.latitude, "40.741404");
        assert_eq!(fields.longitude, "-74.00322");
        assert_eq!(fields.query, "");
    }

    #[test]
    fn other_hosts_are_ignored() {
        assert_eq!(
            extract_from_map_link("http://bing.com/maps?q=x&ll=1,2&z=3"),
            MapLinkFields::default()
        );
        assert!(MapLink::parse("https://maps.google.com/?ll=1,2&z=3").is_none());
        assert!(MapLink::parse("").is_none());
    }

    #[test]
    fn host_pattern_dots_match_any_character() {
        assert!(MapLink::parse("http://mapsXgoogle.com/?ll=1,2&z=3").is_some());
    }

    #[test]
    fn line_terminators_are_not_any_character() {
        assert!(MapLink::parse("http://maps.google.com/?ll=1,2\r&z=3").is_none());
        assert!(MapLink::parse("http://maps\rgoogle.com/?ll=1,2&z=3").is_none());
        assert!(MapLink::parse("http://maps.google.com/?q=a\u{2028}b&z=3").is_none());
        assert!(MapLink::parse("http://maps.google.com/?q=a\u{85}b&z=3").is_none());
    }

    #[test]
    fn reserved_escapes_in_query_stay_encoded() {
        let fields =
            extract_from_map_link("http://maps.google.com/?ie=UTF8&q=a%2Cb%3Fc%23d&ll=1,2&z=5");
        assert_eq!(fields.query, "a%2Cb%3Fc%23d");
        assert_eq!(fields.latitude, "1");
    }

    #[test]
    fn leading_query_marker_is_not_recognized() {
        let fields = extract_from_map_link("http://maps.google.com/?q=pizza+place&ll=1,2&z=5");
        assert_eq!(fields.query, "");
        assert_eq!(fields.latitude, "1");
        assert_eq!(fields.longitude, "2");
    }

    #[test]
    fn query_is_unescaped_and_decoded() {
        let fields =
            extract_from_map_link("http://maps.google.com/?ie=UTF8&q=fish+%26+chips%21&ll=1,2&z=5");
        assert_eq!(fields.query, "fish & chips!");
    }

    #[test]
    fn query_at_end_of_link_is_ignored() {
        let fields = extract_from_map_link("http://maps.google.com/?ie=UTF8&ll=1,2&q=pizza");
        assert_eq!(fields.query, "");
        assert_eq!(fields.latitude, "1");
    }

    #[test]
    fn search_coordinates_win_over_plain_coordinates() {
        let fields = extract_from_map_link(
            "http://maps.google.com/?ie=UTF8&ll=1,2&sll=48.85,2.35&q=louvre&z=5",
        );
        assert_eq!(fields.latitude, "48.85");
        assert_eq!(fields.longitude, "2.35");
        assert_eq!(fields.query, "louvre");
    }

    #[test]
    fn terminated_plain_segment_unlocks_trailing_search_segment() {
        let fields = extract_from_map_link("http://maps.google.com/?ie=UTF8&ll=1,2&sll=3,4");
        assert_eq!(fields.latitude, "3");
        assert_eq!(fields.longitude, "4");
    }

    #[test]
    fn coordinates_at_end_of_link_are_ignored() {
        let fields = extract_from_map_link("http://maps.google.com/?ie=UTF8&ll=1,2");
        assert!(fields.is_empty());
    }

    #[test]
    fn splits_on_first_comma_only() {
        let link = MapLink::parse("http://maps.google.com/?x=1&ll=1,2,3&z=5").unwrap();
        assert_eq!(link.coordinates(), ("1".to_string(), "2,3".to_string()));
    }

    #[test]
    fn missing_comma_leaves_longitude_empty() {
        let link = MapLink::parse("http://maps.google.com/?x=1&ll=42&z=5").unwrap();
        assert_eq!(link.coordinates(), ("42".to_string(), String::new()));
    }

    #[test]
    fn coordinates_are_not_validated() {
        let fields = extract_from_map_link("http://maps.google.com/?x=1&ll=abc,999&z=5");
        assert_eq!(fields.latitude, "abc");
        assert_eq!(fields.longitude, "999");
    }

    #[test]
    fn maps_link_without_markers_is_empty() {
        let fields = extract_from_map_link("http://maps.google.com/");
        assert!(fields.is_empty());
    }
}
