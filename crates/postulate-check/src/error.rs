//! Errors from the typing judgement.
//!
//! A `CheckError` always carries the kernel terms involved, not just a
//! message — the driver pretty-prints them with the live environment (for
//! name recovery) when it renders the final diagnostic line, per spec §7's
//! requirement that a diagnostic include the offending expression and its
//! synthesized/expected types.

use postulate_kernel::Term;
use std::fmt;

/// Failure modes of `type_of`/`apply_type`/`member_of` (spec §4.5, §7).
#[derive(Debug, Clone)]
pub enum CheckError {
    /// `type_of` reached an `Ident` with no binding in the global
    /// environment. Ordinarily unreachable — the resolver already rejects
    /// undefined names before the checker ever runs — but `type_of` is a
    /// public judgement and must not panic on a malformed `Term`.
    UndefinedIdent { name: String },

    /// `type_of`/`apply_type` was asked to type a shape that has no typing
    /// rule: `Term::Error` or `Term::Sorry` appearing as an ordinary
    /// expression rather than in the sentinel positions the environment
    /// reserves for them.
    NoTypingRule { term: Term },

    /// `apply_type` was called with a function type that is neither a
    /// `Pi` nor the `SORRY` sentinel.
    NotAFunctionType { function_type: Term },

    /// `member_of` rejected an argument or a top-level definition: the
    /// synthesized type does not structurally equal the expected one.
    TypeMismatch {
        term: Term,
        synthesized: Term,
        expected: Term,
    },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::UndefinedIdent { name } => write!(f, "{name} not defined"),
            CheckError::NoTypingRule { term } => {
                write!(f, "no typing rule applies to '{term}'")
            }
            CheckError::NotAFunctionType { function_type } => {
                write!(f, "'{function_type}' is not a function type")
            }
            CheckError::TypeMismatch {
                term,
                synthesized,
                expected,
            } => write!(
                f,
                "type mismatch: '{term}' has type '{synthesized}', which is not a member of '{expected}'",
            ),
        }
    }
}

impl std::error::Error for CheckError {}

/// Result alias for checker operations.
pub type CheckResult<T> = Result<T, CheckError>;
