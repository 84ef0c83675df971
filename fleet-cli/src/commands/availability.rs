#[cfg(test)]
#[path = "../../tests/unit/commands/availability_test.rs"]
mod availability_test;

use super::*;
use fleet_pragmatic::format::contract::check_availability;
use fleet_pragmatic::format::model::AvailabilityQuery;

const START_ARG_NAME: &str = "start";
const END_ARG_NAME: &str = "end";

pub fn get_availability_app() -> Command {
    with_common_args(
        Command::new("availability")
            .about("Returns drivers and trucks which are free within requested interval")
            .arg(
                Arg::new(START_ARG_NAME)
                    .help("Sets interval start in RFC3339 format")
                    .long(START_ARG_NAME)
                    .required(true),
            )
            .arg(
                Arg::new(END_ARG_NAME)
                    .help("Sets interval end (exclusive) in RFC3339 format")
                    .long(END_ARG_NAME)
                    .required(true),
            ),
    )
}

pub fn run_availability(matches: &ArgMatches) -> Result<(), String> {
    let fleet = get_fleet(matches)?;

    let query = match (matches.get_one::<String>(START_ARG_NAME), matches.get_one::<String>(END_ARG_NAME)) {
        (Some(start), Some(end)) => AvailabilityQuery { start: start.clone(), end: end.clone() },
        _ => return Err("both interval start and end should be set".to_string()),
    };

    let response = check_availability(&fleet.scheduler, &query).map_err(|err| err.to_json())?;
    let response = serde_json::to_string_pretty(&response).map_err(|err| format!("cannot serialize: '{err}'"))?;

    write_result(matches, &response)
}
