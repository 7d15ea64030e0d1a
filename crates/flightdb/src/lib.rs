//! `FlightDB`
//!
//! An in-memory store for a flight network: airlines, airports, and the
//! routes between them, with O(1) lookups by ID and by code, an adjacency
//! index for traversal, and the query and mutation operations built on top.
//!
//! # Modules
//!
//! - [`types`] - Record types and identifiers
//! - [`store`] - The record store with its dual indices and mutation operations
//! - [`index`] - The adjacency index over the route collection
//! - [`query`] - Read-only queries (reports, one-hop search, distance)
//! - [`ingest`] - Bulk loading from OpenFlights-style data files

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod index;
pub mod ingest;
pub mod query;
pub mod store;
pub mod types;

pub use store::{FlightStore, StoreError, StoreResult};
pub use types::{Airline, AirlineId, Airport, AirportId, Route};
