use crate::cli::{get_app, run_subcommand};
use crate::helpers::*;

fn run_check_command(state: &str) -> Result<(), String> {
    let matches = get_app().try_get_matches_from(vec!["fleet-cli", "check", "--state", state]).unwrap();

    run_subcommand(matches)
}

#[test]
fn can_check_valid_state() {
    assert_eq!(run_check_command(FLEET_STATE_PATH), Ok(()));
}

#[test]
fn can_report_coded_errors_for_invalid_state() {
    let result = run_check_command(INVALID_STATE_PATH);

    let err = result.unwrap_err();
    assert!(err.starts_with("fleet state is invalid:"));
    ["E1001", "E1103", "E1104", "E1105"].iter().for_each(|code| assert!(err.contains(code), "no {code} in {err}"));
    assert!(!err.contains("E1002"));
}
