//! Fleet Manager - rental fleet bookkeeping
//!
//! A CLI tool to list the cars of a rental company, add new ones and edit the manager.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use fleet_app::logging::{init_logging, Verbosity};

fn main() {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
