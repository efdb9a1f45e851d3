//! CSV readers for trips and direction queries.
//!
//! Both files are header-less comma-separated rows. Rows with the wrong
//! number of fields, with bytes that are not UTF-8, or with a field that
//! does not parse, are skipped and counted rather than failing the whole
//! load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::domain::{DirectionQuery, LocationId, TripRecord};

use super::error::LoadError;

/// Number of fields in a trips row:
/// departure, arrival, weight, provider, segments, carrier.
pub const TRIP_FIELDS: usize = 6;

/// Number of fields in a directions row:
/// departure, arrival, weight, count.
pub const DIRECTION_FIELDS: usize = 4;

/// Parsed rows plus the number of rows that were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    /// Rows that parsed, in file order
    pub records: Vec<T>,
    /// Rows dropped for a wrong field count, invalid UTF-8 or a bad field
    pub skipped: usize,
}

impl<T> Loaded<T> {
    /// Returns the number of rows kept.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no row was kept.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read trip rows from any reader.
pub fn read_trips<R: Read>(reader: R) -> Result<Loaded<TripRecord>, LoadError> {
    read_rows(reader, "trips", TRIP_FIELDS, parse_trip)
}

/// Read trip rows from a file.
pub fn load_trips(path: impl AsRef<Path>) -> Result<Loaded<TripRecord>, LoadError> {
    read_trips(open(path.as_ref())?)
}

/// Read direction rows from any reader.
pub fn read_directions<R: Read>(reader: R) -> Result<Loaded<DirectionQuery>, LoadError> {
    read_rows(reader, "directions", DIRECTION_FIELDS, parse_direction)
}

/// Read direction rows from a file.
pub fn load_directions(path: impl AsRef<Path>) -> Result<Loaded<DirectionQuery>, LoadError> {
    read_directions(open(path.as_ref())?)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_rows<R, T, F>(
    reader: R,
    kind: &'static str,
    fields: usize,
    parse: F,
) -> Result<Loaded<T>, LoadError>
where
    R: Read,
    F: Fn(&StringRecord) -> Option<T>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0;

    for (line, row) in reader.byte_records().enumerate() {
        let row = row?;
        let len = row.len();
        let parsed = match StringRecord::from_byte_record(row) {
            Ok(row) if len == fields => parse(&row),
            _ => None,
        };
        match parsed {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                debug!(kind, line = line + 1, fields = len, "Skipping malformed row");
            }
        }
    }

    if skipped > 0 {
        warn!(kind, skipped, kept = records.len(), "Skipped malformed rows");
    }

    Ok(Loaded { records, skipped })
}

fn parse_trip(row: &StringRecord) -> Option<TripRecord> {
    Some(TripRecord {
        departure: LocationId::parse(&row[0]).ok()?,
        arrival: LocationId::parse(&row[1]).ok()?,
        weight: parse_weight(&row[2])?,
        provider: row[3].to_string(),
        segments: parse_count(&row[4])?,
        carrier: row[5].to_string(),
    })
}

fn parse_direction(row: &StringRecord) -> Option<DirectionQuery> {
    Some(DirectionQuery {
        departure: LocationId::parse(&row[0]).ok()?,
        arrival: LocationId::parse(&row[1]).ok()?,
        expected_weight: parse_weight(&row[2])?,
        expected_count: parse_count(&row[3])?,
    })
}

/// Costs are integers; a decimal cost is truncated toward zero.
fn parse_weight(field: &str) -> Option<i64> {
    if let Ok(weight) = field.parse::<i64>() {
        return Some(weight);
    }
    let weight: f64 = field.parse().ok()?;
    weight.is_finite().then(|| weight.trunc() as i64)
}

/// An empty count field means zero.
fn parse_count(field: &str) -> Option<u32> {
    if field.is_empty() {
        Some(0)
    } else {
        field.parse().ok()
    }
}
