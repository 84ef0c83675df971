#[cfg(test)]
#[path = "../../tests/unit/commands/status_test.rs"]
mod status_test;

use super::*;
use clap::value_parser;
use fleet_pragmatic::format::contract::update_trip_status;
use fleet_pragmatic::format::model::{ApiTripStatus, StatusUpdate};

const TRIP_ARG_NAME: &str = "trip";
const STATUS_ARG_NAME: &str = "status";

pub fn get_status_app() -> Command {
    with_out_state_arg(with_common_args(
        Command::new("status")
            .about("Changes status of existing trip")
            .arg(
                Arg::new(TRIP_ARG_NAME)
                    .help("Sets trip id")
                    .short('t')
                    .long(TRIP_ARG_NAME)
                    .required(true)
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new(STATUS_ARG_NAME)
                    .help("Sets a new trip status")
                    .long(STATUS_ARG_NAME)
                    .required(true)
                    .value_parser(["Upcoming", "Ongoing", "Completed", "Delayed"]),
            ),
    ))
}

pub fn run_status(matches: &ArgMatches) -> Result<(), String> {
    let fleet = get_fleet(matches)?;

    let trip = matches.get_one::<u64>(TRIP_ARG_NAME).copied().ok_or_else(|| "trip id is not set".to_string())?;
    let status = match matches.get_one::<String>(STATUS_ARG_NAME).map(String::as_str) {
        Some("Upcoming") => ApiTripStatus::Upcoming,
        Some("Ongoing") => ApiTripStatus::Ongoing,
        Some("Completed") => ApiTripStatus::Completed,
        Some("Delayed") => ApiTripStatus::Delayed,
        Some(status) => return Err(format!("unknown trip status: '{status}'")),
        None => return Err("trip status is not set".to_string()),
    };

    let trip = update_trip_status(&fleet.scheduler, &StatusUpdate { trip, status }).map_err(|err| err.to_json())?;
    let trip = serde_json::to_string_pretty(&trip).map_err(|err| format!("cannot serialize: '{err}'"))?;

    write_state(matches, &fleet)?;
    write_result(matches, &trip)
}
