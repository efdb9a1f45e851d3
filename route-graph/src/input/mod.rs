//! Input file loading.
//!
//! Reads trip and direction CSV files into domain records, and reports how
//! many rows were dropped on the way.

mod error;
mod records;

pub use error::LoadError;
pub use records::{
    DIRECTION_FIELDS, Loaded, TRIP_FIELDS, load_directions, load_trips, read_directions,
    read_trips,
};
