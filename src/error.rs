//! Top-level error type tying every pipeline stage's failures together.
//!
//! Mirrors `logicaffeine_kernel::interface::error::InterfaceError`: a thin
//! enum of `From`-convertible variants so `?` works across stage
//! boundaries, with a single `Display` impl the binary prints verbatim to
//! stderr before exiting non-zero (spec §6's "single error line").

use postulate_base::SpannedError;
use std::fmt;

/// Any failure that can abort a run of the checker.
#[derive(Debug)]
pub enum PostulateError {
    /// Reading the input file, or writing the environment dump, failed.
    Io(std::io::Error),

    /// Lexing, parsing, or resolving the source failed.
    Syntax(SpannedError),

    /// `member_of`/`type_of`/`apply_type` rejected a declaration's body.
    /// The message is already rendered with the live environment (name
    /// recovery for `Ident`s, `\i` for `Ref`s) by `driver::describe_check_error`.
    Check(String),

    /// Serializing the environment dump to JSON failed.
    Dump(serde_json::Error),
}

impl fmt::Display for PostulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostulateError::Io(e) => write!(f, "{e}"),
            PostulateError::Syntax(e) => write!(f, "{e}"),
            PostulateError::Check(message) => write!(f, "{message}"),
            PostulateError::Dump(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PostulateError {}

impl From<std::io::Error> for PostulateError {
    fn from(e: std::io::Error) -> Self {
        PostulateError::Io(e)
    }
}

impl From<SpannedError> for PostulateError {
    fn from(e: SpannedError) -> Self {
        PostulateError::Syntax(e)
    }
}

impl From<serde_json::Error> for PostulateError {
    fn from(e: serde_json::Error) -> Self {
        PostulateError::Dump(e)
    }
}

/// Not a `From` impl: a `CheckError` needs the environment to render its
/// terms by name, so the driver formats it explicitly before wrapping it
/// here (see `driver::describe_check_error`).
impl PostulateError {
    pub fn from_check(message: String) -> Self {
        PostulateError::Check(message)
    }
}
