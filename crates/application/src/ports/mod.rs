//! Port definitions for application layer
//!
//! Ports are interfaces the host application drives. Each generator form
//! implements them so the host can register and query it uniformly.

mod generator_source;

pub use generator_source::GeneratorSource;
