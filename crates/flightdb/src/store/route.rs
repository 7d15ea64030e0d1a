//! The route collection and its adjacency index.

use crate::index::AdjacencyIndex;
use crate::types::{AirportId, Route};

/// The append-only route collection plus the adjacency index over it.
///
/// Routes are never updated or deleted, so the section needs no ID or code
/// index; slots are stable for the life of the process. The adjacency index
/// is kept in lockstep with the collection by [`RouteSection::push`], the
/// only way a route gets in.
#[derive(Debug, Default)]
pub(crate) struct RouteSection {
    records: Vec<Route>,
    adjacency: AdjacencyIndex,
}

impl RouteSection {
    /// Append a route and register it in the adjacency index.
    pub(crate) fn push(&mut self, route: Route) {
        let slot = self.records.len();
        self.adjacency.insert(route.source, slot);
        self.records.push(route);
    }

    /// Routes departing from an airport, in insertion order.
    pub(crate) fn from_airport(&self, source: AirportId) -> impl Iterator<Item = &Route> {
        self.adjacency
            .slots_from(source)
            .iter()
            .map(|&slot| &self.records[slot])
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Route> {
        self.records.iter()
    }
}
