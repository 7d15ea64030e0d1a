//! The record store: three record collections, their indices, and the
//! mutation operations that preserve the index invariants.
//!
//! [`FlightStore`] is the only way in or out. It owns the collections and
//! both index layers outright and exposes operations, never raw collection
//! access, so the invariants cannot be bypassed.

mod airline;
mod airport;
mod error;
mod route;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use airline::{AirlineUpdate, NewAirline};
pub use airport::{AirportUpdate, NewAirport};
pub use error::{StoreError, StoreResult};

pub(crate) use airline::AirlineSection;
pub(crate) use airport::AirportSection;
pub(crate) use route::RouteSection;

use crate::types::{Airline, AirlineId, Airport, AirportId, Route};

/// Fields for a new route.
///
/// All three references must resolve at creation time; `stops` carries the
/// caller's value (the request layer defaults it to 0 when omitted).
#[derive(Debug, Clone, Copy)]
pub struct NewRoute {
    /// The operating airline; must exist.
    pub airline: AirlineId,
    /// Departure airport; must exist.
    pub source: AirportId,
    /// Arrival airport; must exist.
    pub destination: AirportId,
    /// Number of intermediate stops.
    pub stops: u32,
}

/// Acquire a read guard, recovering from poison.
///
/// A poisoned guard means a reader or writer panicked while holding the
/// lock. Section mutations are straight-line in-memory code with the index
/// swap inside one borrow, so the data behind a poisoned lock is still
/// consistent; propagating poison would turn a dead panic into a live error.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Acquire a write guard, recovering from poison. See [`read`].
fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// The in-memory flight network store.
///
/// Each record kind lives behind its own reader-writer lock covering
/// {collection, ID-index, code-index} as one unit, so reads run in parallel
/// and every mutation is atomic from a reader's point of view. No operation
/// performs I/O under a lock; hold times are bounded by in-memory work.
///
/// Operations that need more than one section acquire locks in the fixed
/// order airlines → airports → routes.
///
/// # Example
///
/// ```
/// use flightdb::store::{NewAirline, NewAirport, NewRoute};
/// use flightdb::{AirlineId, AirportId, FlightStore};
///
/// let store = FlightStore::new();
/// store.add_airline(NewAirline {
///     id: AirlineId::new(1),
///     code: "aa".to_owned(),
///     name: "American Airlines".to_owned(),
///     country: "United States".to_owned(),
///     active: true,
/// })?;
///
/// let airline = store.airline_by_code("AA").expect("just added");
/// assert_eq!(airline.id, AirlineId::new(1));
/// # Ok::<(), flightdb::StoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct FlightStore {
    airlines: RwLock<AirlineSection>,
    airports: RwLock<AirportSection>,
    routes: RwLock<RouteSection>,
}

impl FlightStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ---- lookups ------------------------------------------------------

    /// Look up an airline by ID. `None` means absent, not an error.
    #[must_use]
    pub fn airline_by_id(&self, id: AirlineId) -> Option<Airline> {
        read(&self.airlines).by_id(id).cloned()
    }

    /// Look up an airline by code. The argument is case-normalized first.
    #[must_use]
    pub fn airline_by_code(&self, code: &str) -> Option<Airline> {
        read(&self.airlines).by_code(code).cloned()
    }

    /// Look up an airport by ID.
    #[must_use]
    pub fn airport_by_id(&self, id: AirportId) -> Option<Airport> {
        read(&self.airports).by_id(id).cloned()
    }

    /// Look up an airport by code. The argument is case-normalized first.
    #[must_use]
    pub fn airport_by_code(&self, code: &str) -> Option<Airport> {
        read(&self.airports).by_code(code).cloned()
    }

    /// All airlines, ordered by code (codeless records first).
    #[must_use]
    pub fn airlines_by_code(&self) -> Vec<Airline> {
        let mut airlines: Vec<Airline> = read(&self.airlines).iter().cloned().collect();
        airlines.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));
        airlines
    }

    /// All airports, ordered by code (codeless records first).
    #[must_use]
    pub fn airports_by_code(&self) -> Vec<Airport> {
        let mut airports: Vec<Airport> = read(&self.airports).iter().cloned().collect();
        airports.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));
        airports
    }

    // ---- mutations ----------------------------------------------------

    /// Add a new airline.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AirlineAlreadyExists`] if the ID is taken; the
    /// store is left unchanged.
    pub fn add_airline(&self, new: NewAirline) -> StoreResult<Airline> {
        write(&self.airlines).add(new)
    }

    /// Partially update an existing airline; unsupplied fields are kept.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AirlineNotFound`] if the ID does not resolve.
    pub fn update_airline(&self, id: AirlineId, update: AirlineUpdate) -> StoreResult<Airline> {
        write(&self.airlines).update(id, update)
    }

    /// Add a new airport.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AirportAlreadyExists`] if the ID is taken, or
    /// [`StoreError::InvalidArgument`] for out-of-range coordinates; the
    /// store is left unchanged either way.
    pub fn add_airport(&self, new: NewAirport) -> StoreResult<Airport> {
        write(&self.airports).add(new)
    }

    /// Partially update an existing airport; unsupplied fields are kept.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AirportNotFound`] if the ID does not resolve,
    /// or [`StoreError::InvalidArgument`] for out-of-range coordinates.
    pub fn update_airport(&self, id: AirportId, update: AirportUpdate) -> StoreResult<Airport> {
        write(&self.airports).update(id, update)
    }

    /// Add a new route.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownAirlineReference`] or
    /// [`StoreError::UnknownAirportReference`] if a referenced record does
    /// not exist; nothing is inserted and the adjacency index is untouched.
    pub fn add_route(&self, new: NewRoute) -> StoreResult<Route> {
        // Lock order: airlines → airports → routes. The reference checks
        // hold their read guards across the insert so the referenced records
        // cannot disappear in between (nothing deletes, but the discipline
        // keeps the check-then-insert atomic regardless).
        let airlines = read(&self.airlines);
        let airports = read(&self.airports);
        if !airlines.contains(new.airline) {
            return Err(StoreError::UnknownAirlineReference(new.airline));
        }
        if !airports.contains(new.source) {
            return Err(StoreError::UnknownAirportReference(new.source));
        }
        if !airports.contains(new.destination) {
            return Err(StoreError::UnknownAirportReference(new.destination));
        }
        let route = Route {
            airline: new.airline,
            source: new.source,
            destination: new.destination,
            stops: new.stops,
        };
        write(&self.routes).push(route);
        Ok(route)
    }

    // ---- counts -------------------------------------------------------

    /// Number of airline records.
    #[must_use]
    pub fn airline_count(&self) -> usize {
        read(&self.airlines).len()
    }

    /// Number of airport records.
    #[must_use]
    pub fn airport_count(&self) -> usize {
        read(&self.airports).len()
    }

    /// Number of route records.
    #[must_use]
    pub fn route_count(&self) -> usize {
        read(&self.routes).len()
    }

    // ---- crate-internal access ---------------------------------------

    /// Read guard over the airline section (queries run under it).
    pub(crate) fn read_airlines(&self) -> RwLockReadGuard<'_, AirlineSection> {
        read(&self.airlines)
    }

    /// Read guard over the airport section.
    pub(crate) fn read_airports(&self) -> RwLockReadGuard<'_, AirportSection> {
        read(&self.airports)
    }

    /// Read guard over the route section.
    pub(crate) fn read_routes(&self) -> RwLockReadGuard<'_, RouteSection> {
        read(&self.routes)
    }

    /// Bulk-insert pre-parsed airline records (ingestion path, last write
    /// wins). The lock is taken once for the whole batch.
    pub(crate) fn bulk_insert_airlines(&self, records: Vec<Airline>) {
        let mut airlines = write(&self.airlines);
        for record in records {
            airlines.insert(record);
        }
    }

    /// Bulk-insert pre-parsed airport records.
    pub(crate) fn bulk_insert_airports(&self, records: Vec<Airport>) {
        let mut airports = write(&self.airports);
        for record in records {
            airports.insert(record);
        }
    }

    /// Bulk-insert pre-parsed routes. References are not validated; dangling
    /// ones simply fail to resolve at query time.
    pub(crate) fn bulk_insert_routes(&self, records: Vec<Route>) {
        let mut routes = write(&self.routes);
        for record in records {
            routes.push(record);
        }
    }
}
