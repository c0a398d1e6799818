//! Normalisation: reducing a term to its normal form.
//!
//! Uses a call-by-value strategy that also descends under binders (full
//! normalisation, not weak-head). This is what lets `member_of` compare a
//! term like `id Nat zero` against `zero` after both have been
//! normalised by [`crate::env::Environment::declare`]'s resolution step.
//!
//! Not proven terminating — axioms may be declared at arbitrary types
//! (including function types that "loop" if ever applied through `SORRY`),
//! so a pathological proof can make `simp` diverge. Ordinary proofs in this
//! calculus are strongly normalising.

use crate::subst::subst;
use crate::term::Term;

/// Reduces `e` to normal form: beta-reduces every redex, including those
/// under `Lambda`/`Pi` binders.
pub fn simp(e: &Term) -> Term {
    match e {
        Term::App(f, v) => {
            let f = simp(f);
            let v = simp(v);
            match &f {
                Term::Lambda { body, .. } => simp(&subst(body, &v, 1)),
                _ => Term::App(Box::new(f), Box::new(v)),
            }
        }
        Term::Lambda { head, body } => Term::Lambda {
            head: Box::new(simp(head)),
            body: Box::new(simp(body)),
        },
        Term::Pi { head, body } => Term::Pi {
            head: Box::new(simp(head)),
            body: Box::new(simp(body)),
        },
        Term::Ident(_) | Term::Ref(_) | Term::Error | Term::Sorry => e.clone(),
    }
}
