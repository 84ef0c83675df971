//! A command line interface to fleet trip scheduling.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
mod helpers;

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use self::cli::*;
use std::process;

mod cli {
    use super::commands::availability::{get_availability_app, run_availability};
    use super::commands::check::{get_check_app, run_check};
    use super::commands::schedule::{get_schedule_app, run_schedule};
    use super::commands::status::{get_status_app, run_status};
    use super::commands::trips::{get_trips_app, run_trips};
    use clap::{ArgMatches, Command};

    pub fn get_app() -> Command {
        Command::new("Fleet Trip Scheduler")
            .version(env!("CARGO_PKG_VERSION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .about("A command line interface to query driver and truck availability and schedule trips")
            .subcommand(get_availability_app())
            .subcommand(get_schedule_app())
            .subcommand(get_trips_app())
            .subcommand(get_status_app())
            .subcommand(get_check_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) -> Result<(), String> {
        match arg_matches.subcommand() {
            Some(("availability", matches)) => run_availability(matches),
            Some(("schedule", matches)) => run_schedule(matches),
            Some(("trips", matches)) => run_trips(matches),
            Some(("status", matches)) => run_status(matches),
            Some(("check", matches)) => run_check(matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        }
    }
}

fn main() {
    let matches = get_app().get_matches();

    if let Err(err) = run_subcommand(matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}
