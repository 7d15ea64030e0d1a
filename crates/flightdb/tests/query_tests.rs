//! Integration tests for the query engine: aggregation reports and the
//! one-hop itinerary search.

use flightdb::ingest;
use flightdb::query::{one_hop, routes_by_airline, routes_by_airport};
use flightdb::store::{NewAirline, NewAirport, NewRoute};
use flightdb::{AirlineId, AirportId, FlightStore, StoreError};

fn add_airline(store: &FlightStore, id: u32, code: &str) {
    store
        .add_airline(NewAirline {
            id: AirlineId::new(id),
            code: code.to_owned(),
            name: format!("Airline {id}"),
            country: "Testland".to_owned(),
            active: true,
        })
        .unwrap();
}

fn add_airport(store: &FlightStore, id: u32, code: &str, latitude: f64, longitude: f64) {
    store
        .add_airport(NewAirport {
            id: AirportId::new(id),
            code: code.to_owned(),
            name: format!("Airport {id}"),
            city: "Testville".to_owned(),
            country: "Testland".to_owned(),
            latitude,
            longitude,
        })
        .unwrap();
}

fn add_route(store: &FlightStore, airline: u32, source: u32, destination: u32, stops: u32) {
    store
        .add_route(NewRoute {
            airline: AirlineId::new(airline),
            source: AirportId::new(source),
            destination: AirportId::new(destination),
            stops,
        })
        .unwrap();
}

/// Quarter of the great circle along the equator, in statute miles.
/// 6371 km · π/2 · 0.621371 mi/km.
fn quarter_circle_miles() -> f64 {
    6371.0 * std::f64::consts::FRAC_PI_2 * 0.621371
}

// ============================================================================
// One-hop search
// ============================================================================

/// Three equatorial airports A(0,0) → B(0,90) → C(0,180), one airline per
/// leg, both legs direct.
fn equator_network() -> FlightStore {
    let store = FlightStore::new();
    add_airline(&store, 1, "L1");
    add_airline(&store, 2, "L2");
    add_airport(&store, 10, "AAA", 0.0, 0.0);
    add_airport(&store, 11, "BBB", 0.0, 90.0);
    add_airport(&store, 12, "CCC", 0.0, 180.0);
    add_route(&store, 1, 10, 11, 0);
    add_route(&store, 2, 11, 12, 0);
    store
}

#[test]
fn one_hop_finds_the_connecting_airport_with_exact_distances() {
    let store = equator_network();
    let report = one_hop(&store, "AAA", "CCC").unwrap();

    assert_eq!(report.source.id, AirportId::new(10));
    assert_eq!(report.destination.id, AirportId::new(12));
    assert_eq!(report.itineraries.len(), 1);

    let itinerary = &report.itineraries[0];
    assert_eq!(itinerary.via.id, AirportId::new(11));

    let quarter = quarter_circle_miles();
    assert!((itinerary.leg1_miles - quarter).abs() < 1e-6);
    assert!((itinerary.leg2_miles - quarter).abs() < 1e-6);
    assert!((itinerary.total_miles - 2.0 * quarter).abs() < 1e-6);

    assert_eq!(itinerary.airline1.as_ref().unwrap().id, AirlineId::new(1));
    assert_eq!(itinerary.airline2.as_ref().unwrap().id, AirlineId::new(2));
}

#[test]
fn one_hop_rejects_unknown_codes() {
    let store = equator_network();
    let err = one_hop(&store, "XXX", "CCC").unwrap_err();
    assert_eq!(err, StoreError::AirportNotFound("XXX".to_owned()));
    let err = one_hop(&store, "AAA", "XXX").unwrap_err();
    assert_eq!(err, StoreError::AirportNotFound("XXX".to_owned()));
}

#[test]
fn one_hop_ignores_routes_with_stops() {
    let store = equator_network();
    // A second connection through D, but its first leg has a stop.
    add_airport(&store, 13, "DDD", 10.0, 90.0);
    add_route(&store, 1, 10, 13, 1);
    add_route(&store, 2, 13, 12, 0);

    let report = one_hop(&store, "AAA", "CCC").unwrap();
    assert_eq!(report.itineraries.len(), 1);
    assert_eq!(report.itineraries[0].via.id, AirportId::new(11));
}

#[test]
fn one_hop_keeps_parallel_route_pairs_distinct() {
    let store = equator_network();
    // A parallel second-leg route through B on the other airline.
    add_route(&store, 1, 11, 12, 0);

    let report = one_hop(&store, "AAA", "CCC").unwrap();
    assert_eq!(report.itineraries.len(), 2);
    assert!(report
        .itineraries
        .iter()
        .all(|i| i.via.id == AirportId::new(11)));
}

#[test]
fn one_hop_sorts_by_total_distance_ascending() {
    let store = equator_network();
    // A longer detour: A → D → C with D off the equator.
    add_airport(&store, 13, "DDD", 45.0, 90.0);
    add_route(&store, 1, 10, 13, 0);
    add_route(&store, 2, 13, 12, 0);

    let report = one_hop(&store, "AAA", "CCC").unwrap();
    assert_eq!(report.itineraries.len(), 2);
    assert_eq!(report.itineraries[0].via.id, AirportId::new(11));
    assert_eq!(report.itineraries[1].via.id, AirportId::new(13));
    assert!(report.itineraries[0].total_miles <= report.itineraries[1].total_miles);
}

#[test]
fn one_hop_omits_airline_detail_for_dangling_references() {
    let store = equator_network();
    // Bulk-loaded first leg whose airline ID resolves to nothing.
    let row = ",99,AAA,10,BBB,11,,0,\n";
    ingest::load_routes(&store, row.as_bytes()).unwrap();

    let report = one_hop(&store, "AAA", "CCC").unwrap();
    let dangling: Vec<_> = report
        .itineraries
        .iter()
        .filter(|i| i.airline1.is_none())
        .collect();
    assert_eq!(dangling.len(), 1);
    assert!(dangling[0].airline2.is_some());
}

// ============================================================================
// Routes by airline (endpoint counting)
// ============================================================================

#[test]
fn routes_by_airline_counts_both_endpoints() {
    let store = FlightStore::new();
    add_airline(&store, 1, "AA");
    add_airport(&store, 10, "AAA", 0.0, 0.0);
    add_airport(&store, 11, "BBB", 0.0, 10.0);
    add_airport(&store, 12, "CCC", 0.0, 20.0);
    add_route(&store, 1, 10, 11, 0);
    add_route(&store, 1, 10, 12, 0);

    let report = routes_by_airline(&store, "AA").unwrap();
    assert_eq!(report.airline.id, AirlineId::new(1));

    // Airport 10 is an endpoint of both routes; 11 and 12 of one each.
    assert_eq!(report.airports.len(), 3);
    assert_eq!(report.airports[0].airport.id, AirportId::new(10));
    assert_eq!(report.airports[0].route_count, 2);
    // Ties break by airport ID ascending.
    assert_eq!(report.airports[1].airport.id, AirportId::new(11));
    assert_eq!(report.airports[1].route_count, 1);
    assert_eq!(report.airports[2].airport.id, AirportId::new(12));
    assert_eq!(report.airports[2].route_count, 1);
}

#[test]
fn routes_by_airline_ignores_other_airlines() {
    let store = FlightStore::new();
    add_airline(&store, 1, "AA");
    add_airline(&store, 2, "BB");
    add_airport(&store, 10, "AAA", 0.0, 0.0);
    add_airport(&store, 11, "BBB", 0.0, 10.0);
    add_route(&store, 1, 10, 11, 0);
    add_route(&store, 2, 10, 11, 0);

    let report = routes_by_airline(&store, "AA").unwrap();
    assert!(report.airports.iter().all(|row| row.route_count == 1));
}

#[test]
fn routes_by_airline_drops_unresolvable_airports() {
    let store = FlightStore::new();
    add_airline(&store, 1, "AA");
    add_airport(&store, 10, "AAA", 0.0, 0.0);
    // Bulk-loaded route to an airport the store has never seen.
    ingest::load_routes(&store, "AA,1,AAA,10,ZZZ,999,,0,\n".as_bytes()).unwrap();

    let report = routes_by_airline(&store, "AA").unwrap();
    let ids: Vec<AirportId> = report.airports.iter().map(|row| row.airport.id).collect();
    assert_eq!(ids, vec![AirportId::new(10)]);
}

#[test]
fn routes_by_airline_requires_a_known_code() {
    let store = FlightStore::new();
    let err = routes_by_airline(&store, "ZZ").unwrap_err();
    assert_eq!(err, StoreError::AirlineNotFound("ZZ".to_owned()));
}

// ============================================================================
// Routes by airport (per-route counting)
// ============================================================================

#[test]
fn routes_by_airport_counts_touching_routes_once() {
    let store = FlightStore::new();
    add_airline(&store, 1, "AA");
    add_airline(&store, 2, "BB");
    add_airport(&store, 10, "AAA", 0.0, 0.0);
    add_airport(&store, 11, "BBB", 0.0, 10.0);
    add_airport(&store, 12, "CCC", 0.0, 20.0);
    // Airport 11: destination of one AA route, source of two BB routes.
    add_route(&store, 1, 10, 11, 0);
    add_route(&store, 2, 11, 12, 0);
    add_route(&store, 2, 11, 10, 0);
    // Does not touch airport 11 at all.
    add_route(&store, 1, 10, 12, 0);

    let report = routes_by_airport(&store, "BBB").unwrap();
    assert_eq!(report.airport.id, AirportId::new(11));
    assert_eq!(report.airlines.len(), 2);
    assert_eq!(report.airlines[0].airline.id, AirlineId::new(2));
    assert_eq!(report.airlines[0].route_count, 2);
    assert_eq!(report.airlines[1].airline.id, AirlineId::new(1));
    assert_eq!(report.airlines[1].route_count, 1);
}

#[test]
fn routes_by_airport_is_insertion_order_independent() {
    let build = |reversed: bool| {
        let store = FlightStore::new();
        add_airline(&store, 1, "AA");
        add_airline(&store, 2, "BB");
        add_airport(&store, 10, "AAA", 0.0, 0.0);
        add_airport(&store, 11, "BBB", 0.0, 10.0);
        let mut legs = vec![(1, 10, 11), (2, 11, 10), (1, 11, 10)];
        if reversed {
            legs.reverse();
        }
        for (airline, source, destination) in legs {
            add_route(&store, airline, source, destination, 0);
        }
        store
    };

    let forward = routes_by_airport(&build(false), "BBB").unwrap();
    let backward = routes_by_airport(&build(true), "BBB").unwrap();

    let summarize = |report: &flightdb::query::AirportRoutesReport| -> Vec<(AirlineId, u64)> {
        report
            .airlines
            .iter()
            .map(|row| (row.airline.id, row.route_count))
            .collect()
    };
    assert_eq!(summarize(&forward), summarize(&backward));
    assert_eq!(summarize(&forward), vec![(AirlineId::new(1), 2), (AirlineId::new(2), 1)]);
}
