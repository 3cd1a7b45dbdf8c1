//! Rendering of results for stdout

use domain::{Coordinate, GeoUri, MapLinkFields};
use serde_json::json;

use crate::config::OutputFormat;

/// Render a built geo URI
pub fn render_uri(uri: &GeoUri, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(uri.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(uri),
    }
}

/// Render fields extracted from a maps link, plus the URI built from them
pub fn render_fields(
    fields: &MapLinkFields,
    uri: Option<&GeoUri>,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = format!(
                "latitude: {}\nlongitude: {}\nquery: {}",
                fields.latitude, fields.longitude, fields.query
            );
            if let Some(uri) = uri {
                out.push_str(&format!("\nuri: {uri}"));
            }
            Ok(out)
        },
        OutputFormat::Json => {
            let mut value = serde_json::to_value(fields)?;
            if let (Some(uri), Some(map)) = (uri, value.as_object_mut()) {
                map.insert("uri".to_string(), json!(uri.as_str()));
            }
            serde_json::to_string_pretty(&value)
        },
    }
}

/// Render a validated coordinate
pub fn render_coordinate(
    coordinate: &Coordinate,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(coordinate.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "axis": coordinate.axis().label().to_lowercase(),
            "value": coordinate.as_str(),
            "degrees": coordinate.degrees(),
        })),
    }
}

/// Render a field that needs no validation
pub fn render_text(field: &str, value: &str, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&json!({ "field": field, "value": value }))
        },
    }
}
