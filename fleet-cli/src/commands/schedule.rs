#[cfg(test)]
#[path = "../../tests/unit/commands/schedule_test.rs"]
mod schedule_test;

use super::*;
use fleet_pragmatic::format::contract::create_trip_serialized;

const REQUEST_ARG_NAME: &str = "request";

pub fn get_schedule_app() -> Command {
    with_out_state_arg(with_common_args(
        Command::new("schedule").about("Validates trip request and admits a new trip").arg(
            Arg::new(REQUEST_ARG_NAME)
                .help("Sets trip request file")
                .short('r')
                .long(REQUEST_ARG_NAME)
                .required(true),
        ),
    ))
}

pub fn run_schedule(matches: &ArgMatches) -> Result<(), String> {
    let fleet = get_fleet(matches)?;
    let request = matches
        .get_one::<String>(REQUEST_ARG_NAME)
        .ok_or_else(|| "trip request file is not set".to_string())
        .and_then(|path| open_file(path, "trip request"))?;

    let trip = create_trip_serialized(&fleet.scheduler, BufReader::new(request))?;

    write_state(matches, &fleet)?;
    write_result(matches, &trip)
}
