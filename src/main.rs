// src/main.rs
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use stride_decode::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    let config = Config::try_from(args)?;
    logging::init(config.verbosity);
    app::run(&config)?;
    Ok(())
}
