use super::*;
use crate::helpers::*;
use std::fs::File;

fn open_state(path: &str) -> BufReader<File> {
    BufReader::new(File::open(path).unwrap())
}

#[test]
fn can_load_fleet() {
    let fleet = load_fleet(open_state(FLEET_STATE_PATH), &Config::default()).unwrap();

    let ids = fleet.scheduler.list_trips().iter().map(|trip| trip.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![101, 102, 103]);
}

#[test]
fn can_report_all_errors_of_invalid_fleet() {
    let result = load_fleet(open_state(INVALID_STATE_PATH), &Config::default());

    let err = result.err().unwrap();
    assert!(err.starts_with("fleet state has 4 errors:\n"));
    assert_eq!(err.lines().count(), 5);
}

#[test]
fn can_write_loaded_fleet_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir, "fleet.json");
    let fleet = load_fleet(open_state(FLEET_STATE_PATH), &Config::default()).unwrap();

    let mut writer = BufWriter::new(File::create(&path).unwrap());
    fleet.write_state(&mut writer).unwrap();
    writer.flush().unwrap();
    drop(writer);

    let (actual, expected) = (read_json(&path), read_json(FLEET_STATE_PATH));
    ["trucks", "customers", "locations", "trips"].iter().for_each(|key| assert_eq!(actual[key], expected[key]));
    let get_hours = |state: &serde_json::Value| -> Vec<f64> {
        state["drivers"].as_array().unwrap().iter().filter_map(|driver| driver["weeklyHours"].as_f64()).collect()
    };
    assert_eq!(get_hours(&actual), get_hours(&expected));
}

#[test]
fn can_check_fleet() {
    assert_eq!(check_fleet(open_state(FLEET_STATE_PATH)), Ok(()));

    let errors = check_fleet(open_state(INVALID_STATE_PATH)).unwrap_err();
    let errors = serde_json::from_str::<serde_json::Value>(&errors).unwrap();
    let codes =
        errors.as_array().map(|errors| errors.iter().filter_map(|err| err["code"].as_str()).collect::<Vec<_>>());
    assert_eq!(codes, Some(vec!["E1001", "E1103", "E1104", "E1105"]));
}

#[test]
fn can_report_malformed_fleet() {
    let errors = check_fleet(BufReader::new("{ drivers".as_bytes())).unwrap_err();

    assert!(errors.contains("MalformedInput"));
}
