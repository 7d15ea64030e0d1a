//! One-hop itinerary search.
//!
//! Finds every pair of direct (0-stop) routes source → via → destination and
//! ranks the pairs by total flown distance. Parallel routes through the same
//! intermediate are distinct results, one per matching route pair — they are
//! deliberately not deduplicated, since each pair is a different bookable
//! itinerary.

use serde::Serialize;

use crate::query::distance::great_circle_miles;
use crate::store::{FlightStore, StoreError, StoreResult};
use crate::types::{Airline, Airport};

/// One source → via → destination itinerary.
///
/// The airline of a leg is `None` when the route's airline ID no longer
/// resolves; a dangling reference never fails the whole result, it just
/// omits that leg's airline detail.
#[derive(Debug, Clone, Serialize)]
pub struct OneHopItinerary {
    /// The intermediate airport.
    pub via: Airport,
    /// Airline flying the first leg, if it resolves.
    pub airline1: Option<Airline>,
    /// Airline flying the second leg, if it resolves.
    pub airline2: Option<Airline>,
    /// Great-circle miles, source → via.
    pub leg1_miles: f64,
    /// Great-circle miles, via → destination.
    pub leg2_miles: f64,
    /// Sum of both legs; the ranking key.
    pub total_miles: f64,
}

/// Result of a one-hop search.
#[derive(Debug, Clone, Serialize)]
pub struct OneHopReport {
    /// Resolved source airport.
    pub source: Airport,
    /// Resolved destination airport.
    pub destination: Airport,
    /// Itineraries, total distance ascending.
    pub itineraries: Vec<OneHopItinerary>,
}

/// Enumerate one-hop itineraries between two airport codes.
///
/// Both legs must be direct (0 stops). An intermediate airport whose record
/// does not resolve is skipped.
///
/// # Errors
///
/// Returns [`StoreError::AirportNotFound`] if either code does not resolve.
pub fn one_hop(
    store: &FlightStore,
    source_code: &str,
    destination_code: &str,
) -> StoreResult<OneHopReport> {
    // Lock order: airlines → airports → routes.
    let airlines = store.read_airlines();
    let airports = store.read_airports();
    let routes = store.read_routes();

    let source = airports
        .by_code(source_code)
        .ok_or_else(|| StoreError::AirportNotFound(source_code.to_owned()))?;
    let destination = airports
        .by_code(destination_code)
        .ok_or_else(|| StoreError::AirportNotFound(destination_code.to_owned()))?;

    let mut itineraries = Vec::new();
    for leg1 in routes.from_airport(source.id) {
        if leg1.stops != 0 {
            continue;
        }
        let Some(via) = airports.by_id(leg1.destination) else {
            continue;
        };
        for leg2 in routes.from_airport(via.id) {
            if leg2.stops != 0 || leg2.destination != destination.id {
                continue;
            }
            let leg1_miles = great_circle_miles(source, via);
            let leg2_miles = great_circle_miles(via, destination);
            itineraries.push(OneHopItinerary {
                via: via.clone(),
                airline1: airlines.by_id(leg1.airline).cloned(),
                airline2: airlines.by_id(leg2.airline).cloned(),
                leg1_miles,
                leg2_miles,
                total_miles: leg1_miles + leg2_miles,
            });
        }
    }
    itineraries.sort_by(|a, b| a.total_miles.total_cmp(&b.total_miles));

    Ok(OneHopReport {
        source: source.clone(),
        destination: destination.clone(),
        itineraries,
    })
}
