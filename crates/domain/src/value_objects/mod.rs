//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod geo_query;
mod geo_uri;
mod map_link;

pub use coordinate::{Axis, Coordinate, validate_latitude, validate_longitude};
pub use geo_query::{ESCAPED_AMPERSAND, GeoQuery};
pub use geo_uri::{DEFAULT_COORDINATE, GEO_SCHEME, GeoUri, build_geo_uri};
pub use map_link::{MapLink, MapLinkFields, extract_from_map_link};
