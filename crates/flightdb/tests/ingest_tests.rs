//! Integration tests for bulk ingestion: the permissive row filter, field
//! normalization, and the (loaded, skipped) diagnostics.

use std::io::Write;

use flightdb::ingest::{
    load_airlines, load_airports, load_airports_from_path, load_routes, LoadStats,
};
use flightdb::query::one_hop;
use flightdb::{AirlineId, AirportId, FlightStore};

// ============================================================================
// Airlines
// ============================================================================

#[test]
fn airline_rows_load_with_normalized_fields() {
    let store = FlightStore::new();
    let data = "24,\"American Airlines\",\\N,aa,AAL,AMERICAN,\"United States\",Y\n";
    let stats = load_airlines(&store, data.as_bytes()).unwrap();
    assert_eq!(stats, LoadStats { loaded: 1, skipped: 0 });

    let airline = store.airline_by_id(AirlineId::new(24)).unwrap();
    assert_eq!(airline.code.as_deref(), Some("AA"));
    assert_eq!(airline.name, "American Airlines");
    assert_eq!(airline.country, "United States");
    assert!(airline.active);
    assert_eq!(store.airline_by_code("aa").unwrap(), airline);
}

#[test]
fn rows_without_a_parseable_id_are_skipped_silently() {
    let store = FlightStore::new();
    let data = "\\N,No Id,\\N,XX,,,Nowhere,N\n\
                ,Empty Id,\\N,YY,,,Nowhere,N\n\
                abc,Bad Id,\\N,ZZ,,,Nowhere,N\n\
                1,Short Row,\\N\n\
                2,Good,\\N,GG,,,Somewhere,1\n";
    let stats = load_airlines(&store, data.as_bytes()).unwrap();
    assert_eq!(stats, LoadStats { loaded: 1, skipped: 4 });
    assert!(store.airline_by_code("XX").is_none());
    assert!(store.airline_by_code("GG").is_some());
    // "1" counts as active.
    assert!(store.airline_by_id(AirlineId::new(2)).unwrap().active);
}

#[test]
fn sentinel_codes_are_not_indexed() {
    let store = FlightStore::new();
    let data = "7,Codeless,\\N,\\N,,,Nowhere,Y\n";
    load_airlines(&store, data.as_bytes()).unwrap();
    let airline = store.airline_by_id(AirlineId::new(7)).unwrap();
    assert_eq!(airline.code, None);
}

#[test]
fn duplicate_ids_in_bulk_data_resolve_to_the_last_row() {
    let store = FlightStore::new();
    let data = "5,First,\\N,F1,,,Nowhere,Y\n\
                5,Second,\\N,F2,,,Nowhere,Y\n";
    let stats = load_airlines(&store, data.as_bytes()).unwrap();
    // Both rows are appended; the indices point at the later one.
    assert_eq!(stats.loaded, 2);
    assert_eq!(store.airline_by_id(AirlineId::new(5)).unwrap().name, "Second");
}

// ============================================================================
// Airports
// ============================================================================

#[test]
fn airport_rows_load_with_coordinates() {
    let store = FlightStore::new();
    let data = "3469,\"San Francisco International Airport\",\"San Francisco\",\
                \"United States\",SFO,KSFO,37.618997,-122.374889,13,-8,A,\
                \"America/Los_Angeles\"\n";
    let stats = load_airports(&store, data.as_bytes()).unwrap();
    assert_eq!(stats, LoadStats { loaded: 1, skipped: 0 });

    let airport = store.airport_by_code("sfo").unwrap();
    assert_eq!(airport.id, AirportId::new(3469));
    assert_eq!(airport.city, "San Francisco");
    assert!((airport.latitude - 37.618997).abs() < 1e-12);
    assert!((airport.longitude + 122.374889).abs() < 1e-12);
}

#[test]
fn unparseable_coordinates_default_to_zero() {
    let store = FlightStore::new();
    let data = "9,Somewhere,Town,Country,SMW,,not-a-number,,\n";
    let stats = load_airports(&store, data.as_bytes()).unwrap();
    assert_eq!(stats.loaded, 1);
    let airport = store.airport_by_id(AirportId::new(9)).unwrap();
    assert_eq!(airport.latitude, 0.0);
    assert_eq!(airport.longitude, 0.0);
}

#[test]
fn airports_load_from_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1,One,Town,Country,ONE,,1.0,2.0,").unwrap();
    writeln!(file, "\\N,Bad,Town,Country,TWO,,1.0,2.0,").unwrap();
    file.flush().unwrap();

    let store = FlightStore::new();
    let stats = load_airports_from_path(&store, file.path()).unwrap();
    assert_eq!(stats, LoadStats { loaded: 1, skipped: 1 });
    assert!(store.airport_by_code("ONE").is_some());
}

// ============================================================================
// Routes
// ============================================================================

#[test]
fn route_rows_with_placeholder_references_are_skipped() {
    let store = FlightStore::new();
    let data = "AA,24,SFO,3469,JFK,3797,,0,738\n\
                AA,\\N,SFO,3469,JFK,3797,,0,738\n\
                AA,24,SFO,\\N,JFK,3797,,0,738\n\
                AA,24,SFO,3469,JFK,\\N,,0,738\n";
    let stats = load_routes(&store, data.as_bytes()).unwrap();
    assert_eq!(stats, LoadStats { loaded: 1, skipped: 3 });
    assert_eq!(store.route_count(), 1);
}

#[test]
fn unparseable_stops_default_to_zero() {
    // Dangling references are tolerated at load time, so the route is
    // traversable once matching airports appear.
    let store = FlightStore::new();
    let data = "AA,1,AAA,10,BBB,11,,x,\nBB,2,BBB,11,CCC,12,,,\n";
    let stats = load_routes(&store, data.as_bytes()).unwrap();
    assert_eq!(stats.loaded, 2);

    let airports = "10,A,T,C,AAA,,0,0,\n11,B,T,C,BBB,,0,90,\n12,C,T,C,CCC,,0,180,\n";
    load_airports(&store, airports.as_bytes()).unwrap();

    // Both routes parsed with stops == 0, so the one-hop search sees them.
    let report = one_hop(&store, "AAA", "CCC").unwrap();
    assert_eq!(report.itineraries.len(), 1);
    assert_eq!(report.itineraries[0].via.id, AirportId::new(11));
}

#[test]
fn empty_lines_are_ignored_entirely() {
    let store = FlightStore::new();
    let data = "\n24,Name,\\N,AA,,,Country,Y\n\n";
    let stats = load_airlines(&store, data.as_bytes()).unwrap();
    assert_eq!(stats, LoadStats { loaded: 1, skipped: 0 });
}
