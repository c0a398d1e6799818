//! Kernel term representation: the locally-nameless core of the calculus.
//!
//! Every checked expression is a `Term`. There is no separate notion of
//! "type" — a Pi type is itself a term, and whether a term is used as a
//! value or a type is determined entirely by where `type_of` places it.
//!
//! Binders are anonymised: a `Lambda`/`Pi`'s `head` carries only the
//! binder's type, never a name. Bound occurrences are [`Term::Ref`]
//! de Bruijn indices, 1-based and counted from the innermost enclosing
//! binder (the resolver in `postulate-syntax` is what turns surface names
//! into these indices — see its module docs).

use postulate_base::Symbol;
use std::fmt;

/// The unified term representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// An unresolved global reference: an axiom or an inlined definition's
    /// name kept opaque at the use site (definitions themselves are never
    /// stored here — the resolver inlines their bodies at resolve time).
    Ident(Symbol),

    /// A bound variable: a 1-based de Bruijn index counting outward from
    /// the innermost enclosing `Lambda`/`Pi` at this position.
    Ref(usize),

    /// Application `f v`.
    App(Box<Term>, Box<Term>),

    /// A function value. `head` is the (anonymised) binder's type.
    Lambda { head: Box<Term>, body: Box<Term> },

    /// A dependent function type `(head) -> body`, where `body` may
    /// mention the bound variable via `Ref`.
    Pi { head: Box<Term>, body: Box<Term> },

    /// Sentinel stored as `Type`'s own type. Never inspected by any typing
    /// rule; exists only so `Type` has *some* entry in the environment.
    Error,

    /// Sentinel stored as `SORRY`'s type. `apply_type` recognises this
    /// shape directly and lets any argument through, unsoundly.
    Sorry,
}

/// A printable identifier resolver for [`Term::Ident`]/[`Term::Ref`]. The
/// pretty printer (spec §6) never recovers binder names, so `Ref` prints as
/// `\i` and `Ident` as the looked-up name — see `postulate_kernel::pretty`.
pub trait NameLookup {
    fn name_of(&self, sym: Symbol) -> &str;
}

impl fmt::Display for Term {
    /// Debug-oriented fallback display that prints `Ident`s by their raw
    /// symbol index (no interner at hand). Prefer
    /// [`crate::pretty::pretty`] for user-facing output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Ident(sym) => write!(f, "#{}", sym.index()),
            Term::Ref(i) => write!(f, "\\{}", i),
            Term::App(func, arg) => write!(f, "({} {})", func, arg),
            Term::Lambda { head, body } => write!(f, "({} => {})", head, body),
            Term::Pi { head, body } => write!(f, "({} -> {})", head, body),
            Term::Error => write!(f, "<error>"),
            Term::Sorry => write!(f, "<sorry>"),
        }
    }
}

/// Structural equality: same constructor, recursively equal components.
/// `Ident` symbols compare by underlying identity (they are drawn from a
/// single shared interner), `Ref` indices as integers. No alpha-equivalence
/// pass is needed since binders carry no names, and no eta.
pub fn eq(a: &Term, b: &Term) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(i: u32) -> Symbol {
        // Symbols are only ever constructed by an Interner in real code;
        // tests that don't need resolvable names can still compare by
        // raw equality through a throwaway interner.
        let mut interner = postulate_base::Interner::new();
        for n in 0..i {
            interner.intern(&format!("s{n}"));
        }
        interner.intern(&format!("s{i}"))
    }

    #[test]
    fn eq_is_structural() {
        let a = Term::App(Box::new(Term::Ref(1)), Box::new(Term::Ident(sym(0))));
        let b = Term::App(Box::new(Term::Ref(1)), Box::new(Term::Ident(sym(0))));
        assert!(eq(&a, &b));
    }

    #[test]
    fn eq_distinguishes_different_refs() {
        assert!(!eq(&Term::Ref(1), &Term::Ref(2)));
    }

    #[test]
    fn eq_distinguishes_constructors() {
        let pi = Term::Pi {
            head: Box::new(Term::Ref(1)),
            body: Box::new(Term::Ref(1)),
        };
        let lambda = Term::Lambda {
            head: Box::new(Term::Ref(1)),
            body: Box::new(Term::Ref(1)),
        };
        assert!(!eq(&pi, &lambda));
    }
}
