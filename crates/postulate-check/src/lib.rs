//! # postulate-check
//!
//! The dependent type checking judgement `Γ ⊢ e : τ`, built on top of
//! `postulate-kernel`'s term representation and substitution.
//!
//! Two mutually recursive operations carry the whole judgement:
//! [`type_of`] synthesises a type for a term, and [`apply_type`] applies a
//! synthesised function type to an argument (instantiating dependent
//! results via substitution). [`member_of`] and [`check_definition`] sit on
//! top as the membership checks the driver actually invokes.

pub mod check;
pub mod error;

pub use check::{apply_type, check_definition, member_of, type_of};
pub use error::{CheckError, CheckResult};
