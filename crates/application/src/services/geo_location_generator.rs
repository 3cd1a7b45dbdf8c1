//! Geo location generator service
//!
//! Owns the latitude, longitude, query and maps link fields of the geo
//! location form and turns them into a `geo:` URI. A maps link can be used
//! to fill the other three fields.

use std::fmt;
use std::str::FromStr;

use domain::{
    Axis, Coordinate, DEFAULT_COORDINATE, GeoUri, MapLink, MapLinkFields, build_geo_uri,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::error::ApplicationError;
use crate::ports::GeneratorSource;

/// Input fields of the geo location form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Latitude,
    Longitude,
    Query,
    MapsLink,
}

impl FormField {
    /// Label shown next to the field
    pub const fn label(self) -> &'static str {
        match self {
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
            Self::Query => "Query",
            Self::MapsLink => "Maps link",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FormField {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lat" | "latitude" => Ok(Self::Latitude),
            "lon" | "lng" | "longitude" => Ok(Self::Longitude),
            "q" | "query" => Ok(Self::Query),
            "link" | "maps-link" | "maps_link" => Ok(Self::MapsLink),
            other => Err(ApplicationError::UnknownField(other.to_string())),
        }
    }
}

/// Current text of every form field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocationForm {
    pub latitude: String,
    pub longitude: String,
    pub query: String,
    pub maps_link: String,
}

impl GeoLocationForm {
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            query: query.into(),
            maps_link: String::new(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Latitude => &self.latitude,
            FormField::Longitude => &self.longitude,
            FormField::Query => &self.query,
            FormField::MapsLink => &self.maps_link,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Latitude => &mut self.latitude,
            FormField::Longitude => &mut self.longitude,
            FormField::Query => &mut self.query,
            FormField::MapsLink => &mut self.maps_link,
        }
    }
}

/// Explicit host commands, one per former widget event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// The user changed a field
    Edit { field: FormField, value: String },
    /// The user pasted a maps link and asked to fill the form from it
    FillFromMapsLink(String),
    /// The host needs the payload to encode
    Generate,
}

/// Outcome of a handled command
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// The edited field holds a valid value
    FieldAccepted(FormField),
    /// Fields were overwritten from a maps link
    Filled(MapLinkFields),
    /// The maps link was not recognized, nothing changed
    Ignored,
    /// A payload was produced
    Generated(GeoUri),
}

/// Geo location form controller
#[derive(Debug, Clone, Default)]
pub struct GeoLocationGenerator {
    form: GeoLocationForm,
}

impl GeoLocationGenerator {
    pub const NAME: &'static str = "Geo location";

    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing field values
    pub const fn with_form(form: GeoLocationForm) -> Self {
        Self { form }
    }

    pub fn field(&self, field: FormField) -> &str {
        self.form.get(field)
    }

    /// Store a field value without validating it
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.form.slot(field) = value.into();
    }

    /// Validate the current text of a coordinate field
    ///
    /// Query and maps link accept any text.
    pub fn check_field(&self, field: FormField) -> Result<Option<Coordinate>, ApplicationError> {
        let axis = match field {
            FormField::Latitude => Axis::Latitude,
            FormField::Longitude => Axis::Longitude,
            FormField::Query | FormField::MapsLink => return Ok(None),
        };
        Ok(Some(Coordinate::new(axis, self.form.get(field))?))
    }

    /// Fill latitude, longitude and query from the stored maps link
    ///
    /// Returns `None` and leaves every field untouched when the link is not
    /// a maps link. Otherwise the three fields are overwritten, with empty
    /// text where the link carries no value.
    #[instrument(skip(self))]
    pub fn fill_from_maps_link(&mut self) -> Option<MapLinkFields> {
        let Some(link) = MapLink::parse(&self.form.maps_link) else {
            debug!(link = %self.form.maps_link, "Ignoring unrecognized maps link");
            return None;
        };
        let fields = link.fields();

        debug!(
            latitude = %fields.latitude,
            longitude = %fields.longitude,
            query = %fields.query,
            "Filled form from maps link"
        );

        self.form.latitude.clone_from(&fields.latitude);
        self.form.longitude.clone_from(&fields.longitude);
        self.form.query.clone_from(&fields.query);
        Some(fields)
    }

    /// Build the geo URI from the current fields
    ///
    /// With a non-empty query, empty coordinate fields are set to `"0"`
    /// before building, so the form shows what was encoded.
    #[instrument(skip(self))]
    pub fn generate(&mut self) -> Result<GeoUri, ApplicationError> {
        if !self.form.query.is_empty() {
            for field in [FormField::Latitude, FormField::Longitude] {
                let slot = self.form.slot(field);
                if slot.is_empty() {
                    trace!(%field, "Defaulting empty coordinate");
                    DEFAULT_COORDINATE.clone_into(slot);
                }
            }
        }

        let uri = build_geo_uri(&self.form.latitude, &self.form.longitude, &self.form.query)?;
        debug!(uri = %uri, "Generated geo URI");
        Ok(uri)
    }

    /// Apply one host command
    ///
    /// An edit is stored even when it fails validation, the field simply
    /// stays unconfirmed until corrected.
    pub fn handle(&mut self, command: FormCommand) -> Result<FormEvent, ApplicationError> {
        match command {
            FormCommand::Edit { field, value } => {
                self.set_field(field, value);
                self.check_field(field)?;
                Ok(FormEvent::FieldAccepted(field))
            },
            FormCommand::FillFromMapsLink(link) => {
                self.set_field(FormField::MapsLink, link);
                Ok(self
                    .fill_from_maps_link()
                    .map_or(FormEvent::Ignored, FormEvent::Filled))
            },
            FormCommand::Generate => self.generate().map(FormEvent::Generated),
        }
    }
}

impl GeneratorSource for GeoLocationGenerator {
    type Field = FormField;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn text(&mut self) -> Result<String, ApplicationError> {
        self.generate().map(GeoUri::into_string)
    }

    fn validate(&self, field: FormField) -> Result<(), ApplicationError> {
        self.check_field(field).map(|_| ())
    }

    fn focus_field(&self) -> FormField {
        FormField::Latitude
    }
}
