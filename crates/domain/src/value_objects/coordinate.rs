//! Coordinate value object
//!
//! Latitude and longitude are kept as the text the user typed, so a
//! validated value can be echoed back into the geo URI unchanged. The
//! parsed number is only used for the range check.
//!
//! # Examples
//!
//! ```
//! use domain::{validate_latitude, validate_longitude};
//!
//! let lat = validate_latitude("40.7").unwrap();
//! assert_eq!(lat.as_str(), "40.7");
//!
//! assert!(validate_longitude("181").is_err());
//! assert!(validate_latitude("abc").is_err());
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::errors::DomainError;

/// Accepted coordinate text.
///
/// The dot is deliberately left unescaped and matches any character, so
/// `1x5` passes the pattern and is then rejected when parsed as a number.
const COORDINATE_PATTERN: &str = r"^[+-]?[0-9]+(.[0-9]+)?$";

#[allow(clippy::expect_used)] // Infallible with a valid static pattern
static COORDINATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(COORDINATE_PATTERN).expect("Failed to compile coordinate pattern")
});

/// Which geographic axis a coordinate belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// North/south position, [-90, 90]
    Latitude,
    /// East/west position, [-180, 180]
    Longitude,
}

impl Axis {
    /// Absolute bound of the axis in degrees
    pub const fn bound(self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }

    /// Human-readable axis name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
        }
    }

    fn malformed(self) -> DomainError {
        DomainError::validation(format!("{} is not a correct value.", self.label()))
    }

    fn out_of_range(self) -> DomainError {
        let bound = self.bound();
        DomainError::validation(format!(
            "{} must be in [-{bound}:{bound}]",
            self.label()
        ))
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated latitude or longitude
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    axis: Axis,
    text: String,
    degrees: f64,
}

impl Coordinate {
    /// Validate coordinate text for the given axis
    ///
    /// The text must fully match the coordinate pattern, parse as a number
    /// and lie within the axis bounds (inclusive).
    pub fn new(axis: Axis, text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();

        if !COORDINATE_REGEX.is_match(&text) {
            return Err(axis.malformed());
        }

        let degrees: f64 = text.parse().map_err(|_| axis.malformed())?;

        let bound = axis.bound();
        if !(-bound..=bound).contains(&degrees) {
            return Err(axis.out_of_range());
        }

        Ok(Self {
            axis,
            text,
            degrees,
        })
    }

    /// Validate latitude text
    pub fn latitude(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Axis::Latitude, text)
    }

    /// Validate longitude text
    pub fn longitude(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Axis::Longitude, text)
    }

    /// The axis this coordinate was validated against
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The original text, unchanged
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed value in degrees
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Validate latitude text, returning it unchanged on success
pub fn validate_latitude(text: &str) -> Result<Coordinate, DomainError> {
    Coordinate::latitude(text)
}

/// Validate longitude text, returning it unchanged on success
pub fn validate_longitude(text: &str) -> Result<Coordinate, DomainError> {
    Coordinate::longitude(text)
}
