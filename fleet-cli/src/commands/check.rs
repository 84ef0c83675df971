#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use fleet_cli::extensions::fleet::check_fleet;

pub fn get_check_app() -> Command {
    Command::new("check").about("Validates fleet state and reports coded errors").arg(
        Arg::new(STATE_ARG_NAME)
            .help("Sets fleet state file")
            .short('s')
            .long(STATE_ARG_NAME)
            .required(true),
    )
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let state = open_file(get_state_path(matches)?, "fleet state")?;

    check_fleet(BufReader::new(state)).map_err(|errors| format!("fleet state is invalid:\n{errors}"))
}
