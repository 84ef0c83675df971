use clap::{Arg, ArgMatches, Command};
use fleet_cli::extensions::config::{Config, read_config};
use fleet_cli::extensions::fleet::{FleetContext, load_fleet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};

pub mod availability;
pub mod check;
pub mod schedule;
pub mod status;
pub mod trips;

const STATE_ARG_NAME: &str = "state";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_STATE_ARG_NAME: &str = "out-state";

/// Adds arguments shared by all commands.
fn with_common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(STATE_ARG_NAME)
                .help("Sets fleet state file")
                .short('s')
                .long(STATE_ARG_NAME)
                .required(true),
        )
        .arg(Arg::new(CONFIG_ARG_NAME).help("Specifies path to config file").short('c').long(CONFIG_ARG_NAME))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output, stdout is used if not set")
                .short('o')
                .long(OUT_RESULT_ARG_NAME),
        )
}

/// Adds argument to specify where changed fleet state is written.
fn with_out_state_arg(command: Command) -> Command {
    command.arg(
        Arg::new(OUT_STATE_ARG_NAME)
            .help("Specifies path to file for changed fleet state, input state file is overwritten if not set")
            .long(OUT_STATE_ARG_NAME),
    )
}

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .unwrap_or_else(|| Ok(Config::default()))
}

fn get_state_path(matches: &ArgMatches) -> Result<&String, String> {
    matches.get_one::<String>(STATE_ARG_NAME).ok_or_else(|| "fleet state file is not set".to_string())
}

fn get_fleet(matches: &ArgMatches) -> Result<FleetContext, String> {
    let config = get_config(matches)?;
    let state = open_file(get_state_path(matches)?, "fleet state")?;

    load_fleet(BufReader::new(state), &config)
}

/// Writes command result into out file or stdout.
fn write_result(matches: &ArgMatches, result: &str) -> Result<(), String> {
    let out_file = matches
        .get_one::<String>(OUT_RESULT_ARG_NAME)
        .map(|path| create_file(path, "out result"))
        .transpose()?;
    let mut writer = create_write_buffer(out_file);

    writeln!(writer, "{result}")
        .and_then(|_| writer.flush())
        .map_err(|err| format!("cannot write result: '{err}'"))
}

/// Writes changed fleet state into out state file or back into input state file.
fn write_state(matches: &ArgMatches, fleet: &FleetContext) -> Result<(), String> {
    let path = match matches.get_one::<String>(OUT_STATE_ARG_NAME) {
        Some(path) => path,
        None => get_state_path(matches)?,
    };
    let mut writer = BufWriter::new(create_file(path, "out state")?);

    fleet.write_state(&mut writer)?;

    writer.flush().map_err(|err| format!("cannot write fleet state: '{err}'"))
}
