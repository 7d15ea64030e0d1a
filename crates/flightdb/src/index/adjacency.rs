//! Adjacency index for route traversal.
//!
//! Maps a source airport to the slots of the routes departing from it,
//! turning the flat route collection into a traversable graph.

use std::collections::HashMap;

use crate::types::AirportId;

/// Adjacency index: source airport → route slots, in insertion order.
///
/// The index is maintained incrementally: every route appended to the route
/// collection registers its slot here under its source airport. It is never
/// rebuilt wholesale and never pruned; it only grows, in lockstep with the
/// route collection.
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    outgoing: HashMap<AirportId, Vec<usize>>,
}

impl AdjacencyIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route slot under its source airport.
    pub fn insert(&mut self, source: AirportId, slot: usize) {
        self.outgoing.entry(source).or_default().push(slot);
    }

    /// Slots of all routes departing from an airport, in insertion order.
    ///
    /// Returns an empty slice for airports with no departures (including
    /// airports the store has never seen).
    #[must_use]
    pub fn slots_from(&self, source: AirportId) -> &[usize] {
        self.outgoing.get(&source).map_or(&[], Vec::as_slice)
    }
}
