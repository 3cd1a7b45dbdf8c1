//! Geo URI value object and builder
//!
//! Produces `geo:<lat>,<lon>` or `geo:<lat>,<lon>?q=<query>`.
//!
//! # Examples
//!
//! ```
//! use domain::build_geo_uri;
//!
//! let uri = build_geo_uri("40.7", "-74.0", "coffee & tea").unwrap();
//! assert_eq!(uri.as_str(), "geo:40.7,-74.0?q=coffee %26 tea");
//!
//! let uri = build_geo_uri("", "", "pizza").unwrap();
//! assert_eq!(uri.as_str(), "geo:0,0?q=pizza");
//! ```

use std::fmt;

use serde::Serialize;

use super::coordinate::Coordinate;
use super::geo_query::GeoQuery;
use crate::errors::DomainError;

/// URI scheme prefix
pub const GEO_SCHEME: &str = "geo:";

/// Substituted for an empty coordinate when a query is present
pub const DEFAULT_COORDINATE: &str = "0";

/// A built geo URI, ready to be encoded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoUri {
    latitude: Coordinate,
    longitude: Coordinate,
    query: Option<String>,
    #[serde(rename = "uri")]
    rendered: String,
}

impl GeoUri {
    /// Assemble a URI from validated coordinates and an optional escaped query
    pub fn new(latitude: Coordinate, longitude: Coordinate, query: Option<String>) -> Self {
        let mut rendered = format!("{GEO_SCHEME}{latitude},{longitude}");
        if let Some(query) = query.as_deref().filter(|q| !q.is_empty()) {
            rendered.push_str("?q=");
            rendered.push_str(query);
        }

        Self {
            latitude,
            longitude,
            query: query.filter(|q| !q.is_empty()),
            rendered,
        }
    }

    pub const fn latitude(&self) -> &Coordinate {
        &self.latitude
    }

    pub const fn longitude(&self) -> &Coordinate {
        &self.longitude
    }

    /// The escaped query, if any
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    pub fn into_string(self) -> String {
        self.rendered
    }
}

impl fmt::Display for GeoUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Resolve the coordinate text to validate
///
/// Empty coordinates only default to `"0"` when a query is present.
fn coordinate_or_default(text: &str, has_query: bool) -> &str {
    if has_query && text.is_empty() {
        DEFAULT_COORDINATE
    } else {
        text
    }
}

/// Build a geo URI from user-entered text
///
/// `&` in the query is escaped to `%26`. With a non-empty query an empty
/// latitude or longitude becomes `"0"`. Both coordinates are then validated
/// and embedded verbatim.
pub fn build_geo_uri(latitude: &str, longitude: &str, query: &str) -> Result<GeoUri, DomainError> {
    let escaped = GeoQuery::new(query).escaped();
    let has_query = !escaped.is_empty();

    let latitude = Coordinate::latitude(coordinate_or_default(latitude, has_query))?;
    let longitude = Coordinate::longitude(coordinate_or_default(longitude, has_query))?;

    Ok(GeoUri::new(latitude, longitude, has_query.then_some(escaped)))
}
