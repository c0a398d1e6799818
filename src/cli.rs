//! Command-line interface: thin argument parsing over [`crate::driver::run`].
//!
//! The reference tool (spec §6) hardcodes `./practice` and `./dump.json`;
//! `--input`/`--dump` let a caller point the checker at other files while
//! keeping the zero-argument invocation spec-compliant.

use std::path::PathBuf;

use clap::Parser;

use crate::driver;
use crate::error::PostulateError;

/// A minimal proof checker for a dependently typed lambda calculus.
#[derive(Parser)]
#[command(name = "postulate")]
#[command(about = "Checks that every defining body in a source file inhabits its declared type")]
#[command(version)]
pub struct Cli {
    /// Path to the declaration source file.
    #[arg(long, default_value = "./practice")]
    pub input: PathBuf,

    /// Path to write the final environment dump to.
    #[arg(long, default_value = "./dump.json")]
    pub dump: PathBuf,
}

/// Parses arguments and runs the checker once. `main` just prints the
/// error and sets the exit code; all the logic lives here so it's testable
/// without spawning a process.
pub fn run_cli() -> Result<(), PostulateError> {
    env_logger::init();
    let cli = Cli::parse();
    driver::run(&cli.input, &cli.dump)
}
