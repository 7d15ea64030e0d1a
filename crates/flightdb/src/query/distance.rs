//! Great-circle distance between airports.

use crate::types::Airport;

/// Mean Earth radius in kilometers (spherical model).
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Statute miles per kilometer.
const MILES_PER_KM: f64 = 0.621371;

/// Great-circle distance between two airports in statute miles.
///
/// Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]:
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
/// c = 2·atan2(√a, √(1−a))
/// ```
#[must_use]
pub fn great_circle_miles(a: &Airport, b: &Airport) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lon1 = a.longitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let lon2 = b.longitude.to_radians();

    let sin_dlat = ((lat2 - lat1) / 2.0).sin();
    let sin_dlon = ((lon2 - lon1) / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c * MILES_PER_KM
}
