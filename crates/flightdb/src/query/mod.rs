//! Read-only queries over the store.
//!
//! # Modules
//!
//! - [`distance`] - Great-circle distance between airports
//! - [`reports`] - Route-count aggregations by airline and by airport
//! - [`one_hop`] - Single-connection itinerary search ranked by distance

pub mod distance;
pub mod one_hop;
pub mod reports;

pub use distance::great_circle_miles;
pub use one_hop::{one_hop, OneHopItinerary, OneHopReport};
pub use reports::{
    routes_by_airline, routes_by_airport, AirlineRouteCount, AirlineRoutesReport,
    AirportRouteCount, AirportRoutesReport,
};
