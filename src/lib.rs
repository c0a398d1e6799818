//! # postulate
//!
//! A minimal proof checker for a dependently typed lambda calculus: the
//! top-level driver, CLI, and environment dump that tie together
//! `postulate-syntax`, `postulate-kernel`, and `postulate-check`.
//!
//! The binary (`src/main.rs`) is a thin wrapper around [`cli::run_cli`],
//! following the lib-does-the-work / bin-prints-and-exits split.

pub mod cli;
pub mod driver;
pub mod dump;
pub mod error;

pub use error::PostulateError;
