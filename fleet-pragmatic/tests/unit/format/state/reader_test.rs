use super::*;
use crate::format::model::*;
use crate::helpers::*;
use fleet_core::models::{MasterData, Priority, ResourceRegistry, TripDraft, TruckStatus};

#[test]
fn can_read_state_into_core_models() {
    let state = create_test_state(vec![create_api_trip(1, 1, 1, (2, 8), (3, 8))]);

    let model = state.read_pragmatic().unwrap();

    assert_eq!(model.registry.drivers().len(), 3);
    assert_eq!(model.registry.truck(3).map(|truck| truck.status), Some(TruckStatus::Maintenance));
    assert!(model.registry.customer(1).is_some());
    assert!(model.registry.location(2).is_some());
    assert_eq!(model.catalog.size(), 1);
    assert_eq!(model.catalog.get(1).map(|trip| trip.interval.duration()), Some(24 * 3600));
}

#[test]
fn can_read_state_from_json_string() {
    let json = r#"{
      "drivers": [{ "id": 1, "name": "John Doe", "rating": 4.8, "weeklyHours": 35, "status": "Available" }],
      "customers": [{ "id": 1, "name": "Acme" }]
    }"#
    .to_string();

    let model = json.read_pragmatic().unwrap();

    assert_eq!(model.registry.drivers().len(), 1);
    assert!(model.registry.trucks().is_empty());
}

#[test]
fn can_report_malformed_json() {
    let result = BufReader::new("[1, 2".as_bytes()).read_pragmatic();

    let errors = result.err().map(|err| err.errors).unwrap_or_default();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, "MalformedInput");
}

#[test]
fn can_report_all_validation_errors() {
    let mut state = create_test_state(vec![
        create_api_trip(1, 1, 1, (2, 8), (3, 8)),
        create_api_trip(2, 1, 2, (2, 12), (2, 18)),
        create_api_trip(3, 2, 2, (5, 8), (5, 6)),
    ]);
    state.drivers.push(create_api_driver(1));

    let result = state.read_pragmatic();

    let codes = result.err().map(|err| err.errors.into_iter().filter_map(|err| err.code).collect::<Vec<_>>());
    assert_eq!(codes, Some(vec!["E1001".to_string(), "E1103".to_string(), "E1105".to_string()]));
}

#[test]
fn can_create_scheduler_with_identity() {
    let model = create_test_state(vec![create_api_trip(7, 1, 1, (2, 8), (3, 8))]).read_pragmatic().unwrap();
    let scheduler = model.into_scheduler(Arc::new(Environment::silent()), TripIdentity::new("SHP"));

    let trip = scheduler.propose_trip(&TripDraft {
        customer: Some(1),
        origin: Some(1),
        destination: Some(2),
        driver: Some(2),
        truck: Some(2),
        interval: scheduler.catalog().get(7).map(|trip| trip.interval),
        cargo_type: Some("Pallets".to_string()),
        priority: Some(Priority::Low),
        ..TripDraft::default()
    });

    assert_eq!(trip.map(|trip| trip.code), Ok("SHP-00008".to_string()));
}
