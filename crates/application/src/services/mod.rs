//! Application services - Use case implementations

mod geo_location_generator;

pub use geo_location_generator::{
    FormCommand, FormEvent, FormField, GeoLocationForm, GeoLocationGenerator,
};
