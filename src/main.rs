use anyhow::Result;
use blocklist_keeper::{args::expand_legacy_flags, utils, Args, Config};
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::error;

fn main() -> Result<ExitCode> {
    let config = Config::from(Args::parse_from(expand_legacy_flags(std::env::args_os())));
    utils::setup_logging(config.verbose);

    if !config.has_action() {
        Args::command().print_help()?;
        return Ok(ExitCode::from(2));
    }

    match blocklist_keeper::run(&config) {
        Ok(outcome) => Ok(ExitCode::from(outcome.exit_status())),
        Err(e) => {
            error!(action = "abort", component = "main", error = %e, "Maintenance aborted");
            Err(e)
        }
    }
}
