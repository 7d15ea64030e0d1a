//! The airline record.

use serde::{Deserialize, Serialize};

use super::AirlineId;

/// An airline operating routes in the network.
///
/// The `code` is the short human-facing designator (e.g. `"AA"`). It may be
/// absent; when present it is stored uppercase and is unique across the
/// collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    /// Externally assigned, stable identifier.
    pub id: AirlineId,
    /// Short designator, uppercase, unique when present.
    pub code: Option<String>,
    /// Display name.
    pub name: String,
    /// Country of registration.
    pub country: String,
    /// Whether the airline is still operating.
    pub active: bool,
}
