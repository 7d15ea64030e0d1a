//! Bulk loading of OpenFlights-style data files.
//!
//! Ingestion is a permissive filter, not a validator: a row is accepted only
//! if its identity (and, for routes, foreign-key) fields are present and
//! parse as integers, and every other malformed field degrades to a default
//! instead of failing the row. Rejected rows are counted, never surfaced as
//! errors — the per-file [`LoadStats`] is the only diagnostic.
//!
//! Each loader parses its whole input before touching the store, so the
//! store's write lock is held for in-memory work only, never across I/O.
//! Bulk-loaded routes are not checked against the airline and airport
//! collections; dangling references simply fail to resolve at query time.

mod csv;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::store::FlightStore;
use crate::types::{normalize_code, Airline, AirlineId, Airport, AirportId, Route, CODE_SENTINEL};

use self::csv::split_line;

/// Errors that can occur while reading a data file.
///
/// Malformed rows are not errors; only the I/O itself can fail.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The data file could not be read.
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Counts of rows accepted and rejected by one loader run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows parsed and inserted.
    pub loaded: usize,
    /// Rows rejected by the identity/foreign-key filter.
    pub skipped: usize,
}

/// Parse an identity or foreign-key field: present, not the placeholder,
/// and an integer — otherwise the row is skipped.
fn parse_id(field: &str) -> Option<u32> {
    let field = field.trim();
    if field.is_empty() || field == CODE_SENTINEL {
        return None;
    }
    field.parse().ok()
}

// Column order: 0:id, 1:name, 2:alias, 3:code, 4:icao, 5:callsign,
// 6:country, 7:active
fn parse_airline_row(fields: &[String]) -> Option<Airline> {
    if fields.len() < 8 {
        return None;
    }
    let id = AirlineId::new(parse_id(&fields[0])?);
    let active = matches!(fields[7].trim(), "Y" | "y" | "1");
    Some(Airline {
        id,
        code: normalize_code(&fields[3]),
        name: fields[1].trim().to_owned(),
        country: fields[6].trim().to_owned(),
        active,
    })
}

// Column order: 0:id, 1:name, 2:city, 3:country, 4:code, 5:icao,
// 6:latitude, 7:longitude, …
fn parse_airport_row(fields: &[String]) -> Option<Airport> {
    if fields.len() < 8 {
        return None;
    }
    let id = AirportId::new(parse_id(&fields[0])?);
    Some(Airport {
        id,
        code: normalize_code(&fields[4]),
        name: fields[1].trim().to_owned(),
        city: fields[2].trim().to_owned(),
        country: fields[3].trim().to_owned(),
        latitude: fields[6].trim().parse().unwrap_or(0.0),
        longitude: fields[7].trim().parse().unwrap_or(0.0),
    })
}

// Column order: 0:airline-code, 1:airline-id, 2:source-code, 3:source-id,
// 4:destination-code, 5:destination-id, 6:codeshare, 7:stops, 8:equipment
fn parse_route_row(fields: &[String]) -> Option<Route> {
    if fields.len() < 9 {
        return None;
    }
    Some(Route {
        airline: AirlineId::new(parse_id(&fields[1])?),
        source: AirportId::new(parse_id(&fields[3])?),
        destination: AirportId::new(parse_id(&fields[5])?),
        stops: fields[7].trim().parse().unwrap_or(0),
    })
}

fn collect_rows<R, T, F>(reader: R, parse: F) -> IngestResult<(Vec<T>, LoadStats)>
where
    R: BufRead,
    F: Fn(&[String]) -> Option<T>,
{
    let mut accepted = Vec::new();
    let mut stats = LoadStats::default();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match parse(&split_line(&line)) {
            Some(record) => accepted.push(record),
            None => stats.skipped += 1,
        }
    }
    stats.loaded = accepted.len();
    Ok((accepted, stats))
}

/// Load airline rows from a reader into the store.
///
/// # Errors
///
/// Returns [`IngestError::Io`] only for read failures; malformed rows are
/// counted in the returned [`LoadStats`] instead.
pub fn load_airlines<R: BufRead>(store: &FlightStore, reader: R) -> IngestResult<LoadStats> {
    let (records, stats) = collect_rows(reader, parse_airline_row)?;
    store.bulk_insert_airlines(records);
    Ok(stats)
}

/// Load airport rows from a reader into the store.
///
/// # Errors
///
/// Returns [`IngestError::Io`] only for read failures.
pub fn load_airports<R: BufRead>(store: &FlightStore, reader: R) -> IngestResult<LoadStats> {
    let (records, stats) = collect_rows(reader, parse_airport_row)?;
    store.bulk_insert_airports(records);
    Ok(stats)
}

/// Load route rows from a reader into the store.
///
/// References are not validated against the airline and airport collections.
///
/// # Errors
///
/// Returns [`IngestError::Io`] only for read failures.
pub fn load_routes<R: BufRead>(store: &FlightStore, reader: R) -> IngestResult<LoadStats> {
    let (records, stats) = collect_rows(reader, parse_route_row)?;
    store.bulk_insert_routes(records);
    Ok(stats)
}

/// Load airline rows from a file on disk.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the file cannot be opened or read.
pub fn load_airlines_from_path(
    store: &FlightStore,
    path: impl AsRef<Path>,
) -> IngestResult<LoadStats> {
    load_airlines(store, BufReader::new(File::open(path)?))
}

/// Load airport rows from a file on disk.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the file cannot be opened or read.
pub fn load_airports_from_path(
    store: &FlightStore,
    path: impl AsRef<Path>,
) -> IngestResult<LoadStats> {
    load_airports(store, BufReader::new(File::open(path)?))
}

/// Load route rows from a file on disk.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the file cannot be opened or read.
pub fn load_routes_from_path(
    store: &FlightStore,
    path: impl AsRef<Path>,
) -> IngestResult<LoadStats> {
    load_routes(store, BufReader::new(File::open(path)?))
}
