//! The typing judgement `Γ ⊢ e : τ`: `type_of`, `apply_type`, `member_of`.
//!
//! `refs` threads the stack of enclosing binders' head types, indexed the
//! same way `Ref` indices are — `refs`'s last element is the innermost
//! binder's type, matching `Ref(1)`.

use postulate_kernel::{eq, shift, simp, subst, Environment, Term};

use crate::error::{CheckError, CheckResult};

/// Synthesises the type of `e` under the binder types in `refs`.
pub fn type_of(env: &Environment, e: &Term, refs: &[Term]) -> CheckResult<Term> {
    match e {
        Term::Ident(name) => match env.lookup(*name) {
            Some(decl) => Ok(decl.ty.clone()),
            None => Err(CheckError::UndefinedIdent {
                name: env.resolve_name(*name).to_string(),
            }),
        },
        Term::Ref(i) => {
            if *i == 0 || *i > refs.len() {
                return Err(CheckError::NoTypingRule { term: e.clone() });
            }
            let entry = &refs[refs.len() - i];
            Ok(shift(entry, *i))
        }
        Term::Lambda { head, body } => {
            let mut inner = refs.to_vec();
            inner.push((**head).clone());
            let body_ty = type_of(env, body, &inner)?;
            Ok(Term::Pi {
                head: head.clone(),
                body: Box::new(body_ty),
            })
        }
        Term::Pi { .. } => Ok(Term::Ident(env.type_symbol())),
        Term::App(f, v) => {
            let f_ty = type_of(env, f, refs)?;
            apply_type(env, &f_ty, v, refs)
        }
        Term::Error | Term::Sorry => Err(CheckError::NoTypingRule { term: e.clone() }),
    }
}

/// Applies a function of (synthesised) type `function_type` to argument
/// `arg`, checking membership and returning the instantiated result type.
pub fn apply_type(
    env: &Environment,
    function_type: &Term,
    arg: &Term,
    refs: &[Term],
) -> CheckResult<Term> {
    match function_type {
        Term::Pi { head, body } => {
            if !member_of(env, arg, head, refs)? {
                let synthesized = type_of(env, arg, refs)?;
                return Err(CheckError::TypeMismatch {
                    term: arg.clone(),
                    synthesized,
                    expected: (**head).clone(),
                });
            }
            Ok(simp(&subst(body, arg, 1)))
        }
        Term::Sorry => Ok(arg.clone()),
        other => Err(CheckError::NotAFunctionType {
            function_type: other.clone(),
        }),
    }
}

/// `true` iff `e`'s synthesised type is structurally equal to `ty`. This is
/// the checker's documented weakness (spec §4.5, §9): syntactic equality
/// against the declared type, not definitional equality.
pub fn member_of(env: &Environment, e: &Term, ty: &Term, refs: &[Term]) -> CheckResult<bool> {
    let synthesized = type_of(env, e, refs)?;
    Ok(eq(&synthesized, ty))
}

/// Checks that `def` inhabits `ty` in the empty local context — the
/// top-level judgement the driver invokes once per declaration that has a
/// defining body (spec §4.6 step 3).
pub fn check_definition(env: &Environment, def: &Term, ty: &Term) -> CheckResult<()> {
    if member_of(env, def, ty, &[])? {
        Ok(())
    } else {
        let synthesized = type_of(env, def, &[])?;
        Err(CheckError::TypeMismatch {
            term: def.clone(),
            synthesized,
            expected: ty.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postulate_kernel::Term;

    fn nat_axiom(env: &mut Environment) -> Term {
        let type_sym = env.type_symbol();
        let nat = env.interner().intern("Nat");
        env.declare(nat, Term::Ident(type_sym), None);
        Term::Ident(nat)
    }

    #[test]
    fn ident_type_is_looked_up() {
        let mut env = Environment::new();
        let nat = nat_axiom(&mut env);
        assert_eq!(type_of(&env, &nat, &[]).unwrap(), Term::Ident(env.type_symbol()));
    }

    #[test]
    fn undefined_ident_is_an_error() {
        let env = Environment::new();
        let unknown = Term::Ident(postulate_base::Symbol::EMPTY);
        assert!(type_of(&env, &unknown, &[]).is_err());
    }

    #[test]
    fn ref_type_is_shifted_by_its_own_index() {
        let mut env = Environment::new();
        let nat = nat_axiom(&mut env);
        // refs = [Nat]; Ref(1) is typed Nat shifted by 1 (a no-op, Nat has no Refs).
        assert_eq!(type_of(&env, &Term::Ref(1), &[nat.clone()]).unwrap(), nat);
    }

    #[test]
    fn lambda_type_is_a_pi() {
        let mut env = Environment::new();
        let nat = nat_axiom(&mut env);
        let id_lambda = Term::Lambda {
            head: Box::new(nat.clone()),
            body: Box::new(Term::Ref(1)),
        };
        let ty = type_of(&env, &id_lambda, &[]).unwrap();
        assert_eq!(
            ty,
            Term::Pi {
                head: Box::new(nat.clone()),
                body: Box::new(nat),
            }
        );
    }

    #[test]
    fn pi_has_type_type_by_fiat() {
        let mut env = Environment::new();
        let nat = nat_axiom(&mut env);
        let pi = Term::Pi {
            head: Box::new(nat.clone()),
            body: Box::new(nat),
        };
        assert_eq!(type_of(&env, &pi, &[]).unwrap(), Term::Ident(env.type_symbol()));
    }

    #[test]
    fn apply_type_checks_argument_membership() {
        let mut env = Environment::new();
        let nat = nat_axiom(&mut env);
        let type_sym = env.type_symbol();
        let bool_ty = env.interner().intern("Bool");
        env.declare(bool_ty, Term::Ident(type_sym), None);

        let f_ty = Term::Pi {
            head: Box::new(nat.clone()),
            body: Box::new(nat.clone()),
        };
        let ok = apply_type(&env, &f_ty, &nat, &[]);
        assert!(ok.is_ok());

        let bad = apply_type(&env, &f_ty, &Term::Ident(bool_ty), &[]);
        assert!(matches!(bad, Err(CheckError::TypeMismatch { .. })));
    }

    #[test]
    fn sorry_accepts_any_argument() {
        let mut env = Environment::new();
        let nat = nat_axiom(&mut env);
        let sorry = Term::Ident(env.sorry_symbol());
        let sorry_ty = type_of(&env, &sorry, &[]).unwrap();
        assert_eq!(apply_type(&env, &sorry_ty, &nat, &[]).unwrap(), nat);
    }

    #[test]
    fn applying_a_non_function_is_an_error() {
        let mut env = Environment::new();
        let nat = nat_axiom(&mut env);
        assert!(matches!(
            apply_type(&env, &nat, &nat, &[]),
            Err(CheckError::NotAFunctionType { .. })
        ));
    }

    #[test]
    fn dependent_application_normalises_the_result() {
        let mut env = Environment::new();
        let nat = nat_axiom(&mut env);
        let type_sym = env.type_symbol();

        // id : (T : Type) -> T -> T
        let id_ty = Term::Pi {
            head: Box::new(Term::Ident(type_sym)),
            body: Box::new(Term::Pi {
                head: Box::new(Term::Ref(1)),
                body: Box::new(Term::Ref(2)),
            }),
        };
        let partial = apply_type(&env, &id_ty, &nat, &[]).unwrap();
        assert_eq!(
            partial,
            Term::Pi {
                head: Box::new(nat.clone()),
                body: Box::new(nat),
            }
        );
    }

    #[test]
    fn check_definition_passes_for_matching_type() {
        let mut env = Environment::new();
        let nat = nat_axiom(&mut env);
        assert!(check_definition(&env, &nat, &Term::Ident(env.type_symbol())).is_ok());
    }

    #[test]
    fn check_definition_fails_for_mismatched_type() {
        let mut env = Environment::new();
        let nat = nat_axiom(&mut env);
        let bogus_expected = Term::Ident(env.sorry_symbol());
        assert!(matches!(
            check_definition(&env, &nat, &bogus_expected),
            Err(CheckError::TypeMismatch { .. })
        ));
    }
}
