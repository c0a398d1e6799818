//! # postulate-base
//!
//! Pure structural atoms shared by every stage of the checker:
//!
//! - [`Span`] — source location tracking.
//! - [`Interner`]/[`Symbol`] — string interning for O(1) identifier equality.
//! - [`SpannedError`]/[`Result`] — errors with source positions.
//!
//! This crate has no knowledge of lexing, parsing, or type theory. Everything
//! here is generic, reusable infrastructure that the higher-level crates
//! build on.

pub mod error;
pub mod intern;
pub mod span;

pub use error::{Result, SpannedError};
pub use intern::{Interner, Symbol};
pub use span::Span;
