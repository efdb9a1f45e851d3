//! Trip and direction records.
//!
//! These are the validated rows handed to the graph layer. Parsing them from
//! files is the job of [`crate::input`].

use serde::Serialize;

use super::LocationId;

/// A single point-to-point trip offered by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripRecord {
    /// Departure location
    pub departure: LocationId,
    /// Arrival location
    pub arrival: LocationId,
    /// Trip cost. Negative values are clamped to zero when the graph is built.
    pub weight: i64,
    /// Provider offering the trip
    pub provider: String,
    /// Carrier operating the trip
    pub carrier: String,
    /// Number of segments the trip consists of
    pub segments: u32,
}

impl TripRecord {
    /// Creates a new trip record.
    pub fn new(
        departure: LocationId,
        arrival: LocationId,
        weight: i64,
        provider: impl Into<String>,
        carrier: impl Into<String>,
        segments: u32,
    ) -> Self {
        Self {
            departure,
            arrival,
            weight,
            provider: provider.into(),
            carrier: carrier.into(),
            segments,
        }
    }
}

/// A (departure, arrival) pair to search for, with the figures it is
/// expected to match.
///
/// The expected values are only carried through to the report; the graph
/// never looks at them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionQuery {
    /// Departure location
    pub departure: LocationId,
    /// Arrival location
    pub arrival: LocationId,
    /// Reference cost of the direct route
    pub expected_weight: i64,
    /// Reference number of trips for the direction
    pub expected_count: u32,
}

impl DirectionQuery {
    /// Creates a new direction query.
    pub fn new(
        departure: LocationId,
        arrival: LocationId,
        expected_weight: i64,
        expected_count: u32,
    ) -> Self {
        Self {
            departure,
            arrival,
            expected_weight,
            expected_count,
        }
    }
}
