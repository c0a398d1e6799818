//! `postulate` — a minimal proof checker for a dependently typed lambda
//! calculus.
//!
//! This binary is a thin wrapper around [`postulate::cli::run_cli`]: all
//! argument parsing and pipeline logic lives in the library so it can be
//! exercised by tests without spawning a process.

fn main() {
    if let Err(e) = postulate::cli::run_cli() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
