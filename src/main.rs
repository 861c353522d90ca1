mod cli;
mod config;
mod convert;
mod input;
mod logging;
mod output;
mod summer_cmd;
mod winter_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Summer(args) => summer_cmd::run(args),
        Command::Winter(args) => winter_cmd::run(args),
    }
}
