//! Domain model types for the route search.
//!
//! Provides the core abstractions: delivery locations with demands and
//! priority tags, and the trip type produced by capacity decomposition.

mod location;
mod trip;

pub use location::{Location, Priority};
pub use trip::Trip;
