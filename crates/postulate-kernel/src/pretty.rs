//! Pretty printer for diagnostics.
//!
//! Used only for error messages and the `Proof '<name>' passed` line's
//! surrounding diagnostics — never on the success path itself. Because
//! binders are anonymised, a printed `Lambda`/`Pi` shows only the binder's
//! type, never a recovered name.
//!
//! - `Lambda(h, b)` -> `(<h> => <b>)`
//! - `Pi(h, b)` -> `(<h> -> <b>)`
//! - `App(f, v)` -> `(<f> <v>)`
//! - `Ident(n)` -> `n`
//! - `Ref(i)` -> `\i`

use crate::env::Environment;
use crate::term::Term;
use std::fmt::Write as _;

/// Renders `term` using `env` to resolve `Ident` symbols back to source names.
pub fn pretty(env: &Environment, term: &Term) -> String {
    let mut out = String::new();
    write_term(env, term, &mut out);
    out
}

fn write_term(env: &Environment, term: &Term, out: &mut String) {
    match term {
        Term::Ident(sym) => {
            out.push_str(env.resolve_name(*sym));
        }
        Term::Ref(i) => {
            let _ = write!(out, "\\{i}");
        }
        Term::App(func, arg) => {
            out.push('(');
            write_term(env, func, out);
            out.push(' ');
            write_term(env, arg, out);
            out.push(')');
        }
        Term::Lambda { head, body } => {
            out.push('(');
            write_term(env, head, out);
            out.push_str(" => ");
            write_term(env, body, out);
            out.push(')');
        }
        Term::Pi { head, body } => {
            out.push('(');
            write_term(env, head, out);
            out.push_str(" -> ");
            write_term(env, body, out);
            out.push(')');
        }
        Term::Error => out.push_str("<error>"),
        Term::Sorry => out.push_str("<sorry>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_ident_by_name() {
        let mut env = Environment::new();
        let nat = env.interner().intern("Nat");
        let type_sym = env.interner().intern("Type");
        env.declare(nat, Term::Ident(type_sym), None);
        assert_eq!(pretty(&env, &Term::Ident(nat)), "Nat");
    }

    #[test]
    fn prints_ref_with_backslash() {
        let env = Environment::new();
        assert_eq!(pretty(&env, &Term::Ref(2)), "\\2");
    }

    #[test]
    fn prints_lambda_and_pi_and_app() {
        let mut env = Environment::new();
        let nat = Term::Ident(env.interner().intern("Nat"));
        let lambda = Term::Lambda {
            head: Box::new(nat.clone()),
            body: Box::new(Term::Ref(1)),
        };
        assert_eq!(pretty(&env, &lambda), "(Nat => \\1)");

        let pi = Term::Pi {
            head: Box::new(nat.clone()),
            body: Box::new(nat.clone()),
        };
        assert_eq!(pretty(&env, &pi), "(Nat -> Nat)");

        let app = Term::App(Box::new(lambda), Box::new(nat));
        assert!(pretty(&env, &app).starts_with('('));
    }
}
