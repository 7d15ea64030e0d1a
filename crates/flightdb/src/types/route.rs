//! The route record.

use serde::{Deserialize, Serialize};

use super::{AirlineId, AirportId};

/// A scheduled route between two airports, flown by one airline.
///
/// Routes have no identity of their own beyond their slot in the route
/// collection, and a given (airline, source, destination) triple may repeat:
/// historical entries are preserved, not deduplicated.
///
/// The referenced IDs are plain identity values resolved through the store's
/// lookups at read time. Bulk-loaded routes are not validated against the
/// airline and airport collections, so a reference may fail to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// The operating airline.
    pub airline: AirlineId,
    /// Departure airport.
    pub source: AirportId,
    /// Arrival airport.
    pub destination: AirportId,
    /// Number of intermediate stops; 0 means a direct flight.
    pub stops: u32,
}
