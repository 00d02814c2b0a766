//! webpify CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the batch, and exit
//! with 0 (converted or nothing to do), 1 (input folder missing) or 2 (any
//! other fatal error). For programmatic use, prefer the library API.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
