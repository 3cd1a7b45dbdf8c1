//! Application layer - Use cases and orchestration
//!
//! Hosts the geo location form as plain values and exposes it through the
//! generator port, so any UI (web, CLI, tests) can drive it with explicit
//! commands instead of widget listeners.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
