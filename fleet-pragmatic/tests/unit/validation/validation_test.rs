use super::*;
use crate::helpers::*;

#[test]
fn can_accept_valid_state() {
    let state = create_test_state(vec![
        create_api_trip(1, 1, 1, (2, 8), (3, 8)),
        create_api_trip(2, 1, 1, (3, 8), (3, 18)),
        create_api_trip(3, 2, 2, (2, 8), (3, 8)),
    ]);

    assert_eq!(validate_state(&state), Ok(()));
}

#[test]
fn can_accept_empty_state() {
    assert_eq!(validate_state(&FleetState::default()), Ok(()));
}

#[test]
fn can_collect_errors_from_all_rules() {
    let mut state = create_test_state(vec![create_api_trip(1, 1, 9, (2, 8), (3, 8))]);
    state.customers.push(ApiCustomer { id: 1, name: "duplicate".to_string() });
    state.locations.push(ApiLocation { id: 2, name: "duplicate".to_string() });

    let result = validate_state(&state);

    let codes = result.err().map(|err| err.errors.into_iter().filter_map(|err| err.code).collect::<Vec<_>>());
    assert_eq!(codes, Some(vec!["E1003".to_string(), "E1004".to_string(), "E1104".to_string()]));
}

#[test]
fn can_skip_unparseable_intervals_in_binding_trips() {
    let mut trip = create_api_trip(1, 1, 1, (2, 8), (3, 8));
    trip.start = "not a time".to_string();
    let state = create_test_state(vec![trip]);
    let ctx = ValidationContext::new(&state);

    assert_eq!(ctx.trips().count(), 1);
    assert_eq!(ctx.binding_trips().count(), 0);
}
