#[cfg(test)]
#[path = "../../tests/unit/commands/trips_test.rs"]
mod trips_test;

use super::*;
use fleet_pragmatic::format::contract::list_trips_serialized;

pub fn get_trips_app() -> Command {
    with_common_args(Command::new("trips").about("Lists all trips sorted by id"))
}

pub fn run_trips(matches: &ArgMatches) -> Result<(), String> {
    let fleet = get_fleet(matches)?;

    let trips = list_trips_serialized(&fleet.scheduler)?;

    write_result(matches, &trips)
}
