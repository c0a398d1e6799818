//! The top-level driver (spec §4.6): reads the input file, checks each
//! declaration in order against the growing global environment, and dumps
//! the final environment as JSON.
//!
//! Fatal-on-first-failure (spec §7): the moment any stage fails, `run`
//! returns without writing a dump — there is no partial output for a
//! rejected source file.

use std::fs;
use std::path::Path;

use log::{debug, error, info};

use postulate_check::{check_definition, CheckError};
use postulate_kernel::{pretty, Environment};
use postulate_syntax::{parse, resolve, tokenize};

use crate::dump::environment_to_dump;
use crate::error::PostulateError;

/// Runs the whole pipeline once: read `input_path`, check every
/// declaration, and write the environment dump to `dump_path`.
///
/// Returns `Ok(())` only if every declaration in the source checked; the
/// environment dump is written only in that case.
pub fn run(input_path: &Path, dump_path: &Path) -> Result<(), PostulateError> {
    let source = fs::read_to_string(input_path)?;
    let mut env = Environment::new();

    let tokens = tokenize(&source, env.interner())?;
    let declarations = parse(&tokens)?;
    debug!("parsed {} declaration(s) from {}", declarations.len(), input_path.display());

    for decl in &declarations {
        let name = env.resolve_name(decl.name).to_string();
        debug!("resolving '{name}'");

        let ty = resolve(&decl.ty, &env)?;
        let def = match &decl.def {
            Some(body) => Some(resolve(body, &env)?),
            None => None,
        };

        if let Some(def_term) = &def {
            match check_definition(&env, def_term, &ty) {
                Ok(()) => {
                    info!("proof '{name}' passed");
                    println!("Proof '{name}' passed");
                }
                Err(err) => {
                    let message = describe_check_error(&env, &err);
                    error!("'{name}' failed to check: {message}");
                    return Err(PostulateError::from_check(message));
                }
            }
        } else {
            debug!("'{name}' registered as an axiom");
        }

        env.declare(decl.name, ty, def);
    }

    let dump = environment_to_dump(&env);
    fs::write(dump_path, serde_json::to_string_pretty(&dump)?)?;
    info!("wrote environment dump to {}", dump_path.display());

    Ok(())
}

/// Renders a `CheckError` with the live environment, so `Ident`s print by
/// name and `Ref`s print as `\i` (spec §6's pretty printer), instead of the
/// raw `Debug`-ish fallback `Term::Display` falls back to without one.
pub fn describe_check_error(env: &Environment, err: &CheckError) -> String {
    match err {
        CheckError::UndefinedIdent { name } => format!("{name} not defined"),
        CheckError::NoTypingRule { term } => {
            format!("no typing rule applies to '{}'", pretty(env, term))
        }
        CheckError::NotAFunctionType { function_type } => {
            format!("'{}' is not a function type", pretty(env, function_type))
        }
        CheckError::TypeMismatch {
            term,
            synthesized,
            expected,
        } => format!(
            "Type mismatch: {} has type {}, which is not a member of {}",
            pretty(env, term),
            pretty(env, synthesized),
            pretty(env, expected),
        ),
    }
}
