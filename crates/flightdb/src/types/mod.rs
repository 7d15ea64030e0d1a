//! Core record types for the flight network.
//!
//! This module defines the three record kinds the store holds and the
//! identifier newtypes used to reference them.

mod airline;
mod airport;
mod id;
mod route;

pub use airline::Airline;
pub use airport::Airport;
pub use id::{AirlineId, AirportId};
pub use route::Route;

/// Placeholder used by OpenFlights data to mean "field intentionally absent".
///
/// A code equal to this sentinel is treated as no code at all and is never
/// indexed.
pub const CODE_SENTINEL: &str = "\\N";

/// Normalize a raw code field: trim, uppercase, and map the empty string and
/// the [`CODE_SENTINEL`] placeholder to `None`.
#[must_use]
pub fn normalize_code(raw: &str) -> Option<String> {
    let code = raw.trim().to_uppercase();
    if code.is_empty() || code == CODE_SENTINEL {
        None
    } else {
        Some(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize_code("  aa "), Some("AA".to_owned()));
        assert_eq!(normalize_code("Lax"), Some("LAX".to_owned()));
    }

    #[test]
    fn normalize_maps_sentinel_and_empty_to_none() {
        assert_eq!(normalize_code(""), None);
        assert_eq!(normalize_code("   "), None);
        assert_eq!(normalize_code("\\N"), None);
    }
}
