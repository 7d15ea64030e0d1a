//! The airport record.

use serde::{Deserialize, Serialize};

use super::AirportId;

/// An airport in the network.
///
/// Coordinates are degrees: latitude in `[-90, 90]`, longitude in
/// `[-180, 180]`. Like [`super::Airline`], the short `code` is optional and
/// unique when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Externally assigned, stable identifier.
    pub id: AirportId,
    /// Short designator, uppercase, unique when present.
    pub code: Option<String>,
    /// Display name.
    pub name: String,
    /// City served.
    pub city: String,
    /// Country.
    pub country: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}
