//! Domain layer for the geo location generator
//!
//! Contains the coordinate, query, geo URI and maps link value objects
//! together with the single validation error they can raise.
//! This layer performs no I/O and installs no logging.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
