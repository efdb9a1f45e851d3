//! Domain types for the route graph.
//!
//! Location codes are validated at construction time, so code that receives
//! a [`LocationId`] can trust it is a usable vertex key.

mod location;
mod trip;

pub use location::{InvalidLocationId, LocationId};
pub use trip::{DirectionQuery, TripRecord};
