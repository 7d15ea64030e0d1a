//! The airport collection and its indices.

use std::collections::HashMap;

use crate::types::{normalize_code, Airport, AirportId};

use super::error::{StoreError, StoreResult};

/// Fields for a new airport, as supplied by a caller of the add operation.
#[derive(Debug, Clone)]
pub struct NewAirport {
    /// Identity; must not collide with an existing airport.
    pub id: AirportId,
    /// Raw code; normalized, may come out absent.
    pub code: String,
    /// Display name.
    pub name: String,
    /// City served.
    pub city: String,
    /// Country.
    pub country: String,
    /// Latitude in degrees, `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in degrees, `[-180, 180]`.
    pub longitude: f64,
}

/// A partial update to an existing airport.
///
/// `None` fields keep their previous values.
#[derive(Debug, Clone, Default)]
pub struct AirportUpdate {
    /// New raw code, if supplied.
    pub code: Option<String>,
    /// New name, if supplied.
    pub name: Option<String>,
    /// New city, if supplied.
    pub city: Option<String>,
    /// New country, if supplied.
    pub country: Option<String>,
    /// New latitude, if supplied.
    pub latitude: Option<f64>,
    /// New longitude, if supplied.
    pub longitude: Option<f64>,
}

/// Reject coordinates outside the valid degree ranges.
///
/// Applies to explicit mutations only; bulk ingestion is permissive and
/// defaults unparseable coordinates to zero instead.
fn validate_coordinates(latitude: f64, longitude: f64) -> StoreResult<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(StoreError::InvalidArgument(format!(
            "latitude out of range: {latitude}"
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(StoreError::InvalidArgument(format!(
            "longitude out of range: {longitude}"
        )));
    }
    Ok(())
}

/// The airport collection plus its ID and code indices.
///
/// Mirrors [`super::airline::AirlineSection`]: one mutable borrow covers
/// {collection, id-index, code-index} as a unit.
#[derive(Debug, Default)]
pub(crate) struct AirportSection {
    records: Vec<Airport>,
    by_id: HashMap<AirportId, usize>,
    by_code: HashMap<String, usize>,
}

impl AirportSection {
    /// Append a record, overwriting any index entries it collides with.
    ///
    /// This is the bulk-ingestion path: last write wins, no conflict check.
    pub(crate) fn insert(&mut self, airport: Airport) {
        let slot = self.records.len();
        self.by_id.insert(airport.id, slot);
        if let Some(code) = &airport.code {
            self.by_code.insert(code.clone(), slot);
        }
        self.records.push(airport);
    }

    /// Add a new airport, rejecting duplicate identities and out-of-range
    /// coordinates. A failed add leaves the section untouched.
    pub(crate) fn add(&mut self, new: NewAirport) -> StoreResult<Airport> {
        validate_coordinates(new.latitude, new.longitude)?;
        if self.by_id.contains_key(&new.id) {
            return Err(StoreError::AirportAlreadyExists(new.id));
        }
        let airport = Airport {
            id: new.id,
            code: normalize_code(&new.code),
            name: new.name.trim().to_owned(),
            city: new.city.trim().to_owned(),
            country: new.country.trim().to_owned(),
            latitude: new.latitude,
            longitude: new.longitude,
        };
        self.insert(airport.clone());
        Ok(airport)
    }

    /// Apply a partial update; unsupplied fields keep their values.
    ///
    /// The code-index swap happens in the same mutable borrow as the field
    /// mutation, so readers never observe a code pointing at a stale record.
    pub(crate) fn update(&mut self, id: AirportId, update: AirportUpdate) -> StoreResult<Airport> {
        let slot = *self
            .by_id
            .get(&id)
            .ok_or_else(|| StoreError::AirportNotFound(id.to_string()))?;
        {
            let record = &self.records[slot];
            validate_coordinates(
                update.latitude.unwrap_or(record.latitude),
                update.longitude.unwrap_or(record.longitude),
            )?;
        }
        let record = &mut self.records[slot];

        let old_code = record.code.clone();
        if let Some(code) = update.code {
            record.code = normalize_code(&code);
        }
        if let Some(name) = update.name {
            record.name = name.trim().to_owned();
        }
        if let Some(city) = update.city {
            record.city = city.trim().to_owned();
        }
        if let Some(country) = update.country {
            record.country = country.trim().to_owned();
        }
        if let Some(latitude) = update.latitude {
            record.latitude = latitude;
        }
        if let Some(longitude) = update.longitude {
            record.longitude = longitude;
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

    pub(crate) fn by_id(&self, id: AirportId) -> Option<&Airport> {
        self.by_id.get(&id).map(|&slot| &self.records[slot])
    }

    /// Lookup by code; the argument is case-normalized before searching.
    pub(crate) fn by_code(&self, code: &str) -> Option<&Airport> {
        let code = normalize_code(code)?;
        self.by_code.get(&code).map(|&slot| &self.records[slot])
    }

    pub(crate) fn contains(&self, id: AirportId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.records.iter()
    }
}
