//! The airline collection and its indices.

use std::collections::HashMap;

use crate::types::{normalize_code, Airline, AirlineId};

use super::error::{StoreError, StoreResult};

/// Fields for a new airline, as supplied by a caller of the add operation.
///
/// Textual fields are raw: the store trims them and normalizes the code per
/// the ingestion contract before inserting.
#[derive(Debug, Clone)]
pub struct NewAirline {
    /// Identity; must not collide with an existing airline.
    pub id: AirlineId,
    /// Raw code; normalized, may come out absent.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Country of registration.
    pub country: String,
    /// Whether the airline is operating.
    pub active: bool,
}

/// A partial update to an existing airline.
///
/// `None` fields keep their previous values. A supplied code is normalized;
/// supplying an empty or sentinel code clears the stored code.
#[derive(Debug, Clone, Default)]
pub struct AirlineUpdate {
    /// New raw code, if supplied.
    pub code: Option<String>,
    /// New name, if supplied.
    pub name: Option<String>,
    /// New country, if supplied.
    pub country: Option<String>,
    /// New active flag, if supplied.
    pub active: Option<bool>,
}

/// The airline collection plus its ID and code indices.
///
/// One mutable borrow of a section covers {collection, id-index, code-index}
/// as a unit, so under the enclosing lock in [`super::FlightStore`] every
/// mutation is atomic with respect to readers.
#[derive(Debug, Default)]
pub(crate) struct AirlineSection {
    records: Vec<Airline>,
    by_id: HashMap<AirlineId, usize>,
    by_code: HashMap<String, usize>,
}

impl AirlineSection {
    /// Append a record, overwriting any index entries it collides with.
    ///
    /// This is the bulk-ingestion path: last write wins, no conflict check.
    pub(crate) fn insert(&mut self, airline: Airline) {
        let slot = self.records.len();
        self.by_id.insert(airline.id, slot);
        if let Some(code) = &airline.code {
            self.by_code.insert(code.clone(), slot);
        }
        self.records.push(airline);
    }

    /// Add a new airline, rejecting duplicate identities.
    pub(crate) fn add(&mut self, new: NewAirline) -> StoreResult<Airline> {
        if self.by_id.contains_key(&new.id) {
            return Err(StoreError::AirlineAlreadyExists(new.id));
        }
        let airline = Airline {
            id: new.id,
            code: normalize_code(&new.code),
            name: new.name.trim().to_owned(),
            country: new.country.trim().to_owned(),
            active: new.active,
        };
        self.insert(airline.clone());
        Ok(airline)
    }

    /// Apply a partial update; unsupplied fields keep their values.
    ///
    /// If the code changes, the old code-index entry is removed and the new
    /// one installed in the same mutable borrow, so no reader can observe a
    /// stale entry.
    pub(crate) fn update(&mut self, id: AirlineId, update: AirlineUpdate) -> StoreResult<Airline> {
        let slot = *self
            .by_id
            .get(&id)
            .ok_or_else(|| StoreError::AirlineNotFound(id.to_string()))?;
        let record = &mut self.records[slot];

        let old_code = record.code.clone();
        if let Some(code) = update.code {
            record.code = normalize_code(&code);
        }
        if let Some(name) = update.name {
            record.name = name.trim().to_owned();
        }
        if let Some(country) = update.country {
            record.country = country.trim().to_owned();
        }
        if let Some(active) = update.active {
            record.active = active;
        }

        if record.code != old_code {
            if let Some(old) = old_code {
                self.by_code.remove(&old);
            }
            if let Some(new) = &self.records[slot].code {
                self.by_code.insert(new.clone(), slot);
            }
        }
        Ok(self.records[slot].clone())
    }

    pub(crate) fn by_id(&self, id: AirlineId) -> Option<&Airline> {
        self.by_id.get(&id).map(|&slot| &self.records[slot])
    }

    /// Lookup by code; the argument is case-normalized before searching.
    pub(crate) fn by_code(&self, code: &str) -> Option<&Airline> {
        let code = normalize_code(code)?;
        self.by_code.get(&code).map(|&slot| &self.records[slot])
    }

    pub(crate) fn contains(&self, id: AirlineId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Airline> {
        self.records.iter()
    }
}
