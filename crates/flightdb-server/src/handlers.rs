//! Request handlers, one per store operation.
//!
//! Handlers validate argument presence (the store's `invalid-argument`
//! case), hand validated values to the store or query engine, and serialize
//! whatever comes back. Field-presence defaults match the bulk-ingestion
//! contract: country/city default to empty, coordinates to zero, `stops`
//! to 0, `active` to true.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use flightdb::query;
use flightdb::query::{AirlineRoutesReport, AirportRoutesReport, OneHopReport};
use flightdb::store::{AirlineUpdate, AirportUpdate, NewAirline, NewAirport, NewRoute};
use flightdb::{Airline, AirlineId, Airport, AirportId, Route, StoreError};

use crate::error::ApiError;
use crate::server::AppState;

/// `?code=` query parameter, optional so its absence is our 400, not a
/// framework rejection.
#[derive(Debug, Deserialize)]
pub struct CodeParams {
    code: Option<String>,
}

impl CodeParams {
    fn require(self) -> Result<String, ApiError> {
        self.code
            .ok_or_else(|| ApiError::invalid_argument("missing 'code' query parameter"))
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}

// ============================================================================
// Point lookups and listings
// ============================================================================

/// GET /airline?code=XX — full airline record by code.
pub async fn airline_by_code(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CodeParams>,
) -> Result<Json<Airline>, ApiError> {
    let code = params.require()?;
    state
        .store
        .airline_by_code(&code)
        .map(Json)
        .ok_or_else(|| ApiError::from(StoreError::AirlineNotFound(code)))
}

/// GET /airport?code=XXX — full airport record by code.
pub async fn airport_by_code(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CodeParams>,
) -> Result<Json<Airport>, ApiError> {
    let code = params.require()?;
    state
        .store
        .airport_by_code(&code)
        .map(Json)
        .ok_or_else(|| ApiError::from(StoreError::AirportNotFound(code)))
}

/// Listing payloads keep the collection under a named key.
#[derive(Debug, Serialize)]
pub struct AirlinesResponse {
    airlines: Vec<Airline>,
}

/// GET /airlines-by-code — all airlines, ordered by code.
pub async fn airlines_by_code(State(state): State<Arc<AppState>>) -> Json<AirlinesResponse> {
    Json(AirlinesResponse { airlines: state.store.airlines_by_code() })
}

#[derive(Debug, Serialize)]
pub struct AirportsResponse {
    airports: Vec<Airport>,
}

/// GET /airports-by-code — all airports, ordered by code.
pub async fn airports_by_code(State(state): State<Arc<AppState>>) -> Json<AirportsResponse> {
    Json(AirportsResponse { airports: state.store.airports_by_code() })
}

// ============================================================================
// Reports
// ============================================================================

/// GET /airline-routes?code=XX — airports served by an airline with
/// endpoint counts.
pub async fn airline_routes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CodeParams>,
) -> Result<Json<AirlineRoutesReport>, ApiError> {
    let code = params.require()?;
    Ok(Json(query::routes_by_airline(&state.store, &code)?))
}

/// GET /airport-routes?code=XXX — airlines touching an airport with route
/// counts.
pub async fn airport_routes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CodeParams>,
) -> Result<Json<AirportRoutesReport>, ApiError> {
    let code = params.require()?;
    Ok(Json(query::routes_by_airport(&state.store, &code)?))
}

#[derive(Debug, Deserialize)]
pub struct OneHopParams {
    src: Option<String>,
    dst: Option<String>,
}

/// GET /one-hop?src=XXX&dst=YYY — single-connection itineraries ranked by
/// total distance.
pub async fn one_hop(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OneHopParams>,
) -> Result<Json<OneHopReport>, ApiError> {
    let src = params
        .src
        .ok_or_else(|| ApiError::invalid_argument("missing 'src' query parameter"))?;
    let dst = params
        .dst
        .ok_or_else(|| ApiError::invalid_argument("missing 'dst' query parameter"))?;
    Ok(Json(query::one_hop(&state.store, &src, &dst)?))
}

// ============================================================================
// Mutations
// ============================================================================

fn require<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::invalid_argument(format!("missing required field: {field}")))
}

#[derive(Debug, Deserialize)]
pub struct AddAirlineRequest {
    id: Option<u32>,
    code: Option<String>,
    name: Option<String>,
    country: Option<String>,
    active: Option<bool>,
}

/// POST /airline-add — insert a new airline.
pub async fn add_airline(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddAirlineRequest>,
) -> Result<Json<Airline>, ApiError> {
    let new = NewAirline {
        id: AirlineId::new(require(req.id, "id")?),
        code: require(req.code, "code")?,
        name: require(req.name, "name")?,
        country: req.country.unwrap_or_default(),
        active: req.active.unwrap_or(true),
    };
    Ok(Json(state.store.add_airline(new)?))
}

#[derive(Debug, Deserialize)]
pub struct UpdateAirlineRequest {
    id: Option<u32>,
    code: Option<String>,
    name: Option<String>,
    country: Option<String>,
    active: Option<bool>,
}

/// POST /airline-update — partially update an existing airline.
pub async fn update_airline(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateAirlineRequest>,
) -> Result<Json<Airline>, ApiError> {
    let id = AirlineId::new(require(req.id, "id")?);
    let update = AirlineUpdate {
        code: req.code,
        name: req.name,
        country: req.country,
        active: req.active,
    };
    Ok(Json(state.store.update_airline(id, update)?))
}

#[derive(Debug, Deserialize)]
pub struct AddAirportRequest {
    id: Option<u32>,
    code: Option<String>,
    name: Option<String>,
    city: Option<String>,
    country: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// POST /airport-add — insert a new airport.
pub async fn add_airport(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddAirportRequest>,
) -> Result<Json<Airport>, ApiError> {
    let new = NewAirport {
        id: AirportId::new(require(req.id, "id")?),
        code: require(req.code, "code")?,
        name: require(req.name, "name")?,
        city: req.city.unwrap_or_default(),
        country: req.country.unwrap_or_default(),
        latitude: req.latitude.unwrap_or(0.0),
        longitude: req.longitude.unwrap_or(0.0),
    };
    Ok(Json(state.store.add_airport(new)?))
}

#[derive(Debug, Deserialize)]
pub struct UpdateAirportRequest {
    id: Option<u32>,
    code: Option<String>,
    name: Option<String>,
    city: Option<String>,
    country: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// POST /airport-update — partially update an existing airport.
pub async fn update_airport(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateAirportRequest>,
) -> Result<Json<Airport>, ApiError> {
    let id = AirportId::new(require(req.id, "id")?);
    let update = AirportUpdate {
        code: req.code,
        name: req.name,
        city: req.city,
        country: req.country,
        latitude: req.latitude,
        longitude: req.longitude,
    };
    Ok(Json(state.store.update_airport(id, update)?))
}

#[derive(Debug, Deserialize)]
pub struct AddRouteRequest {
    airline_id: Option<u32>,
    src_id: Option<u32>,
    dst_id: Option<u32>,
    stops: Option<u32>,
}

/// POST /route-add — insert a new route. `stops` defaults to 0.
pub async fn add_route(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddRouteRequest>,
) -> Result<Json<Route>, ApiError> {
    let new = NewRoute {
        airline: AirlineId::new(require(req.airline_id, "airline_id")?),
        source: AirportId::new(require(req.src_id, "src_id")?),
        destination: AirportId::new(require(req.dst_id, "dst_id")?),
        stops: req.stops.unwrap_or(0),
    };
    Ok(Json(state.store.add_route(new)?))
}
