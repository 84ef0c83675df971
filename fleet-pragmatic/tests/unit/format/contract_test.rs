use super::*;
use crate::helpers::*;
use std::thread;

fn ids<T>(items: &[T], id_fn: impl Fn(&T) -> u64) -> Vec<u64> {
    items.iter().map(id_fn).collect()
}

fn create_query(start: (u32, u32), end: (u32, u32)) -> AvailabilityQuery {
    AvailabilityQuery { start: format_day_time(start.0, start.1), end: format_day_time(end.0, end.1) }
}

parameterized_test! {can_check_availability, (start, end, expected_drivers, expected_trucks), {
    can_check_availability_impl(start, end, expected_drivers, expected_trucks);
}}

can_check_availability! {
    case01_overlapping: ((2, 12), (2, 18), vec![2, 3], vec![2]),
    case02_after_trip_end: ((3, 9), (4, 9), vec![1, 2, 3], vec![1, 2]),
    case03_touching_trip_end: ((3, 8), (3, 10), vec![1, 2, 3], vec![1, 2]),
    case04_touching_trip_start: ((1, 8), (2, 8), vec![1, 2, 3], vec![1, 2]),
}

fn can_check_availability_impl(
    start: (u32, u32),
    end: (u32, u32),
    expected_drivers: Vec<u64>,
    expected_trucks: Vec<u64>,
) {
    let scheduler = create_test_scheduler(create_test_state(vec![create_api_trip(1, 1, 1, (2, 8), (3, 8))]));

    let response = check_availability(&scheduler, &create_query(start, end)).unwrap();

    assert_eq!(ids(&response.available_drivers, |driver| driver.id), expected_drivers);
    assert_eq!(ids(&response.available_trucks, |truck| truck.id), expected_trucks);
}

#[test]
fn can_reject_inverted_query_interval() {
    let scheduler = create_test_scheduler(create_test_state(vec![]));

    let result = check_availability(&scheduler, &create_query((2, 18), (2, 12)));

    assert_eq!(result.map_err(|err| err.kind), Err("InvalidInterval".to_string()));
}

#[test]
fn can_reject_unparseable_query_time() {
    let scheduler = create_test_scheduler(create_test_state(vec![]));
    let query = AvailabilityQuery { start: "yesterday".to_string(), end: format_day_time(2, 12) };

    let err = check_availability(&scheduler, &query).unwrap_err();

    assert_eq!(err.kind, "InvalidInterval");
    assert!(err.message.contains("yesterday"));
}

#[test]
fn can_create_trip() {
    let scheduler = create_test_scheduler(create_test_state(vec![create_api_trip(1, 1, 1, (2, 8), (3, 8))]));
    let request = TripRequest {
        load_type: Some(ApiLoadType::Ref),
        special_instructions: Some("call on arrival".to_string()),
        ..create_trip_request(2, 2, (2, 12), (2, 18))
    };

    let trip = create_trip(&scheduler, &request).unwrap();

    assert_eq!(trip.id, 2);
    assert_eq!(trip.code, "TRP-00002");
    assert_eq!(trip.status, ApiTripStatus::Upcoming);
    assert_eq!((trip.start.as_str(), trip.end.as_str()), ("2024-05-02T12:00:00Z", "2024-05-02T18:00:00Z"));
    assert_eq!(trip.load_type, Some(ApiLoadType::Ref));
    assert_eq!(trip.special_instructions.as_deref(), Some("call on arrival"));
    assert_eq!(list_trips(&scheduler).map(|trips| trips.len()), Ok(2));
}

parameterized_test! {can_reject_trip_request, (request, expected_kind), {
    can_reject_trip_request_impl(request, expected_kind);
}}

can_reject_trip_request! {
    case01_missing_driver: (TripRequest { driver: None, ..create_request() }, "MissingField"),
    case02_missing_end: (TripRequest { end: None, ..create_request() }, "MissingField"),
    case03_bad_time: (TripRequest { start: Some("2024-13-01".to_string()), ..create_request() }, "InvalidInterval"),
    case04_inverted: (create_trip_request(2, 2, (2, 18), (2, 12)), "InvalidInterval"),
    case05_unknown_customer: (TripRequest { customer: Some(5), ..create_request() }, "NotFound"),
    case06_unknown_truck: (create_trip_request(2, 9, (2, 12), (2, 18)), "NotFound"),
    case07_busy_driver: (create_trip_request(1, 2, (2, 12), (2, 18)), "ResourceConflict"),
    case08_busy_truck: (create_trip_request(2, 1, (2, 12), (2, 18)), "ResourceConflict"),
    case09_maintenance: (create_trip_request(2, 3, (2, 12), (2, 18)), "ResourceUnavailable"),
}

fn create_request() -> TripRequest {
    create_trip_request(2, 2, (2, 12), (2, 18))
}

fn can_reject_trip_request_impl(request: TripRequest, expected_kind: &str) {
    let scheduler = create_test_scheduler(create_test_state(vec![create_api_trip(1, 1, 1, (2, 8), (3, 8))]));

    let result = create_trip(&scheduler, &request);

    assert_eq!(result.map_err(|err| err.kind), Err(expected_kind.to_string()));
    assert_eq!(scheduler.catalog().size(), 1);
}

#[test]
fn can_create_trips_when_loaded_codes_collide_with_generated_ones() {
    let mut trip = create_api_trip(1, 1, 1, (2, 8), (3, 8));
    trip.code = "TRP-00002".to_string();
    let scheduler = create_test_scheduler(create_test_state(vec![trip]));

    let codes = [(8, 12), (12, 16)]
        .into_iter()
        .map(|(start, end)| create_trip(&scheduler, &create_trip_request(2, 2, (2, start), (2, end))))
        .map(|trip| trip.map(|trip| trip.code))
        .collect::<Result<Vec<_>, _>>();

    assert_eq!(codes, Ok(vec!["TRP-00003".to_string(), "TRP-00004".to_string()]));
}

#[test]
fn can_report_exhausted_trip_ids_as_internal_error() {
    let scheduler = create_test_scheduler(create_test_state(vec![create_api_trip(u64::MAX, 1, 1, (2, 8), (3, 8))]));

    let result = create_trip(&scheduler, &create_request());

    assert_eq!(result.map_err(|err| err.kind), Err("InternalError".to_string()));
    assert_eq!(scheduler.catalog().size(), 1);
}

#[test]
fn can_check_availability_with_local_date_times() {
    let scheduler = create_test_scheduler(create_test_state(vec![create_api_trip(1, 1, 1, (2, 8), (3, 8))]));
    let query = r#"{ "start": "2024-05-02T12:00", "end": "2024-05-02T18:00:30" }"#;

    let response = check_availability_serialized(&scheduler, BufReader::new(query.as_bytes())).unwrap();

    let response = serde_json::from_str::<AvailabilityResponse>(&response).unwrap();
    assert_eq!(ids(&response.available_drivers, |driver| driver.id), vec![2, 3]);
}

#[test]
fn can_create_trip_with_local_date_times() {
    let scheduler = create_test_scheduler(create_test_state(vec![]));
    let request = TripRequest {
        start: Some("2024-05-02T08:00".to_string()),
        end: Some("2024-05-02T16:00".to_string()),
        ..create_request()
    };

    let trip = create_trip(&scheduler, &request).unwrap();

    assert_eq!((trip.start.as_str(), trip.end.as_str()), ("2024-05-02T08:00:00Z", "2024-05-02T16:00:00Z"));
}

#[test]
fn can_update_trip_status() {
    let scheduler = create_test_scheduler(create_test_state(vec![create_api_trip(1, 1, 1, (2, 8), (3, 8))]));

    let delayed = update_trip_status(&scheduler, &StatusUpdate { trip: 1, status: ApiTripStatus::Delayed }).unwrap();
    let back = update_trip_status(&scheduler, &StatusUpdate { trip: 1, status: ApiTripStatus::Upcoming });
    let unknown = update_trip_status(&scheduler, &StatusUpdate { trip: 5, status: ApiTripStatus::Ongoing });

    assert_eq!(delayed.status, ApiTripStatus::Delayed);
    assert_eq!(back.map_err(|err| err.kind), Err("InvalidTransition".to_string()));
    assert_eq!(unknown.map_err(|err| err.kind), Err("NotFound".to_string()));
}

#[test]
fn can_release_resources_of_completed_trip() {
    let mut trip = create_api_trip(1, 1, 1, (2, 8), (3, 8));
    trip.status = ApiTripStatus::Ongoing;
    let scheduler = create_test_scheduler(create_test_state(vec![trip]));

    update_trip_status(&scheduler, &StatusUpdate { trip: 1, status: ApiTripStatus::Completed }).unwrap();
    let response = check_availability(&scheduler, &create_query((2, 12), (2, 18))).unwrap();

    assert_eq!(ids(&response.available_drivers, |driver| driver.id), vec![1, 2, 3]);
}

#[test]
fn can_use_serialized_contract() {
    let scheduler = create_test_scheduler(create_test_state(vec![]));
    let request = serde_json::to_string(&create_trip_request(1, 1, (2, 12), (2, 18))).unwrap();
    let query = r#"{ "start": "2024-05-02T10:00:00Z", "end": "2024-05-02T11:00:00Z" }"#;

    let trip = create_trip_serialized(&scheduler, BufReader::new(request.as_bytes())).unwrap();
    let availability = check_availability_serialized(&scheduler, BufReader::new(query.as_bytes())).unwrap();
    let status = r#"{ "trip": 1, "status": "Ongoing" }"#;
    let updated = update_trip_status_serialized(&scheduler, BufReader::new(status.as_bytes())).unwrap();
    let trips = list_trips_serialized(&scheduler).unwrap();

    let trip = serde_json::from_str::<ApiTrip>(&trip).unwrap();
    let availability = serde_json::from_str::<AvailabilityResponse>(&availability).unwrap();
    let updated = serde_json::from_str::<ApiTrip>(&updated).unwrap();
    let trips = serde_json::from_str::<Vec<ApiTrip>>(&trips).unwrap();
    assert_eq!(trip.code, "TRP-00001");
    assert_eq!(ids(&availability.available_drivers, |driver| driver.id), vec![2, 3]);
    assert_eq!(ids(&availability.available_trucks, |truck| truck.id), vec![2]);
    assert_eq!(updated.status, ApiTripStatus::Ongoing);
    assert_eq!(trips, vec![updated]);
}

parameterized_test! {can_return_error_payload, (input, expected), {
    can_return_error_payload_impl(input, expected);
}}

can_return_error_payload! {
    case01_malformed_json: ("{ \"driver\": ", "MalformedInput"),
    case02_wrong_type: ("{ \"driver\": \"one\" }", "MalformedInput"),
    case03_empty_request: ("{}", "MissingField"),
}

fn can_return_error_payload_impl(input: &str, expected: &str) {
    let scheduler = create_test_scheduler(create_test_state(vec![]));

    let result = create_trip_serialized(&scheduler, BufReader::new(input.as_bytes()));

    let payload = serde_json::from_str::<serde_json::Value>(&result.unwrap_err()).unwrap();
    assert_eq!(payload["kind"], expected);
    assert!(payload["message"].is_string());
}

#[test]
fn can_admit_only_one_of_concurrent_requests() {
    let scheduler = create_test_scheduler(create_test_state(vec![]));
    let requests = [create_trip_request(1, 1, (2, 8), (2, 16)), create_trip_request(1, 2, (2, 12), (2, 20))];

    let results = thread::scope(|scope| {
        let handles = requests
            .iter()
            .map(|request| {
                let scheduler = &scheduler;
                scope.spawn(move || create_trip(scheduler, request))
            })
            .collect::<Vec<_>>();

        handles.into_iter().map(|handle| handle.join().unwrap()).collect::<Vec<_>>()
    });

    let mut outcomes = results
        .into_iter()
        .map(|result| result.map(|_| "Ok".to_string()).unwrap_or_else(|err| err.kind))
        .collect::<Vec<_>>();
    outcomes.sort();
    assert_eq!(outcomes, vec!["Ok".to_string(), "ResourceConflict".to_string()]);
}
