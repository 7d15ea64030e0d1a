//! Route-count aggregations.
//!
//! Both reports scan the full route collection once and group counts, but
//! they count differently, and the asymmetry is load-bearing:
//!
//! - **Routes by airline** counts one increment per route *endpoint* — a
//!   matching route contributes to both its source and its destination
//!   airport. The result answers "how many endpoints at this airport does
//!   the airline serve".
//! - **Routes by airport** counts one increment per *route* touching the
//!   airport, grouped by the route's airline.
//!
//! Results are ordered by count descending; ties break by the secondary key
//! (airport or airline ID) ascending so output is deterministic regardless
//! of insertion order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::store::{FlightStore, StoreError, StoreResult};
use crate::types::{Airline, AirlineId, Airport, AirportId};

/// One airport served by an airline, with its endpoint count.
#[derive(Debug, Clone, Serialize)]
pub struct AirportRouteCount {
    /// The served airport.
    pub airport: Airport,
    /// Endpoint count for the airline at this airport.
    pub route_count: u64,
}

/// The "routes by airline" report.
#[derive(Debug, Clone, Serialize)]
pub struct AirlineRoutesReport {
    /// The airline the report was built for.
    pub airline: Airline,
    /// Served airports, count descending.
    pub airports: Vec<AirportRouteCount>,
}

/// One airline touching an airport, with its route count.
#[derive(Debug, Clone, Serialize)]
pub struct AirlineRouteCount {
    /// The airline.
    pub airline: Airline,
    /// Number of routes of this airline touching the airport.
    pub route_count: u64,
}

/// The "routes by airport" report.
#[derive(Debug, Clone, Serialize)]
pub struct AirportRoutesReport {
    /// The airport the report was built for.
    pub airport: Airport,
    /// Airlines touching it, count descending.
    pub airlines: Vec<AirlineRouteCount>,
}

/// Airports served by the airline with the given code, with endpoint counts.
///
/// Aggregated airports whose ID no longer resolves are dropped from the
/// output, not reported as errors.
///
/// # Errors
///
/// Returns [`StoreError::AirlineNotFound`] if the code does not resolve.
pub fn routes_by_airline(store: &FlightStore, code: &str) -> StoreResult<AirlineRoutesReport> {
    let airlines = store.read_airlines();
    let airports = store.read_airports();
    let routes = store.read_routes();

    let airline = airlines
        .by_code(code)
        .ok_or_else(|| StoreError::AirlineNotFound(code.to_owned()))?;

    let mut counts: BTreeMap<AirportId, u64> = BTreeMap::new();
    for route in routes.iter() {
        if route.airline != airline.id {
            continue;
        }
        // Both endpoints count as served.
        *counts.entry(route.source).or_insert(0) += 1;
        *counts.entry(route.destination).or_insert(0) += 1;
    }

    let mut rows: Vec<AirportRouteCount> = counts
        .into_iter()
        .filter_map(|(id, route_count)| {
            airports
                .by_id(id)
                .map(|airport| AirportRouteCount { airport: airport.clone(), route_count })
        })
        .collect();
    rows.sort_by(|a, b| {
        b.route_count
            .cmp(&a.route_count)
            .then(a.airport.id.cmp(&b.airport.id))
    });

    Ok(AirlineRoutesReport { airline: airline.clone(), airports: rows })
}

/// Airlines flying to or from the airport with the given code, with route
/// counts.
///
/// Aggregated airlines whose ID no longer resolves are dropped from the
/// output, not reported as errors.
///
/// # Errors
///
/// Returns [`StoreError::AirportNotFound`] if the code does not resolve.
pub fn routes_by_airport(store: &FlightStore, code: &str) -> StoreResult<AirportRoutesReport> {
    let airlines = store.read_airlines();
    let airports = store.read_airports();
    let routes = store.read_routes();

    let airport = airports
        .by_code(code)
        .ok_or_else(|| StoreError::AirportNotFound(code.to_owned()))?;

    let mut counts: BTreeMap<AirlineId, u64> = BTreeMap::new();
    for route in routes.iter() {
        if route.source == airport.id || route.destination == airport.id {
            *counts.entry(route.airline).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<AirlineRouteCount> = counts
        .into_iter()
        .filter_map(|(id, route_count)| {
            airlines
                .by_id(id)
                .map(|airline| AirlineRouteCount { airline: airline.clone(), route_count })
        })
        .collect();
    rows.sort_by(|a, b| {
        b.route_count
            .cmp(&a.route_count)
            .then(a.airline.id.cmp(&b.airline.id))
    });

    Ok(AirportRoutesReport { airport: airport.clone(), airlines: rows })
}
