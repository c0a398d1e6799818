//! Index shifting and capture-avoiding substitution.
//!
//! These two operations are the subtle heart of the kernel: every other
//! piece of the checker (normalisation, `Ref` typing, application) is built
//! out of them. Get the arithmetic here wrong and the checker is unsound
//! without ever panicking — it will simply accept bad proofs.

use crate::term::Term;

/// Adds `k` to the index of every `Ref` in `e`.
///
/// Shifting does not track binder depth: it is only ever called on a value
/// being spliced into a substitution, where every free `Ref` inside that
/// value is, by construction, free relative to the point it is being
/// spliced into. Traversing into `Lambda`/`Pi` bodies without adjusting `k`
/// is therefore correct here — shifting is not substitution, it has no
/// notion of "this body introduces a new binder so stop incrementing this
/// particular index".
pub fn shift(e: &Term, k: usize) -> Term {
    match e {
        Term::Ref(i) => Term::Ref(i + k),
        Term::Ident(_) | Term::Error | Term::Sorry => e.clone(),
        Term::App(f, v) => Term::App(Box::new(shift(f, k)), Box::new(shift(v, k))),
        Term::Lambda { head, body } => Term::Lambda {
            head: Box::new(shift(head, k)),
            body: Box::new(shift(body, k)),
        },
        Term::Pi { head, body } => Term::Pi {
            head: Box::new(shift(head, k)),
            body: Box::new(shift(body, k)),
        },
    }
}

/// Replaces the binder at `depth` inside `tail` with `value`, contracting
/// the tail's index space by one level. `depth` starts at 1 (the innermost
/// binder at the point where `subst` is first called).
///
/// - `Ref(i)` where `i == depth`: the reference names the binder being
///   eliminated. Return `value`, shifted by `i - 1` — `value` is moving out
///   from a closed position into a spot `i - 1` binders deep (the `depth`
///   itself doesn't count: a reference to the binder it substitutes into
///   lands exactly where that binder was, under everything enclosing it).
/// - `Ref(i)` where `i > depth`: the binder being eliminated sits strictly
///   inside this reference's target, so removing it closes up one level:
///   `Ref(i - 1)`.
/// - `Ref(i)` where `i < depth`: refers to a binder closer in than the one
///   being eliminated; unaffected.
/// - `App`/`Ident`/sentinels: structural recursion / no-ops.
/// - `Pi`/`Lambda`: the head is substituted at the same depth (it sits
///   outside the binder it introduces), the body at `depth + 1` (it sits
///   one binder deeper).
pub fn subst(tail: &Term, value: &Term, depth: usize) -> Term {
    match tail {
        Term::Ref(i) if *i == depth => shift(value, i - 1),
        Term::Ref(i) if *i > depth => Term::Ref(i - 1),
        Term::Ref(i) => Term::Ref(*i),
        Term::Ident(_) | Term::Error | Term::Sorry => tail.clone(),
        Term::App(f, v) => Term::App(
            Box::new(subst(f, value, depth)),
            Box::new(subst(v, value, depth)),
        ),
        Term::Pi { head, body } => Term::Pi {
            head: Box::new(subst(head, value, depth)),
            body: Box::new(subst(body, value, depth + 1)),
        },
        Term::Lambda { head, body } => Term::Lambda {
            head: Box::new(subst(head, value, depth)),
            body: Box::new(subst(body, value, depth + 1)),
        },
    }
}
