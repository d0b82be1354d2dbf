mod args;
mod command;
mod input;

use std::{io, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let args = self::args::Args::parse();

    ::dictlite_core::tracer::init_once_with_verbosity(args.common.verbose);
    info!("Welcome to dictlite!");

    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: self::args::Args) -> Result<()> {
    debug!("Starting dictlite CLI");
    let stdout = io::stdout();
    args.execute(&mut stdout.lock())
}
