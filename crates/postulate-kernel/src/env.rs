//! The global environment: an ordered, append-only mapping from names to
//! declarations.
//!
//! Two names are seeded before any user declaration is processed:
//!
//! - `Type`, whose stored type is [`Term::Error`] — a sentinel that no
//!   typing rule ever inspects. The type of a `Pi` is `Type` by fiat
//!   (see `postulate-check`), not derived from this stored type.
//! - `SORRY`, whose stored type is [`Term::Sorry`] — when applied to any
//!   argument the application is typed as whatever the caller's context
//!   demands (`postulate-check::apply_type` special-cases it). This is an
//!   intentional, documented soundness hole: an escape hatch for
//!   incremental proof development, not a bug.
//!
//! Mirrors the registration pattern of a Calculus-of-Constructions kernel
//! context that seeds its standard library by repeated `declare` calls
//! before any user input is processed.

use crate::term::Term;
use postulate_base::{Interner, Symbol};

/// A single checked (or axiomatic) declaration.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: Symbol,
    pub ty: Term,
    /// `None` for an axiom; `Some(body)` for a definition.
    pub def: Option<Term>,
}

/// The append-only global environment.
///
/// Internally this is the same "parallel map + vec" shape as
/// [`postulate_base::Interner`]: a `Vec<Declaration>` preserves declaration
/// order (later declarations may reference earlier ones; dumping iterates
/// this order), while a name index gives O(1) "what does this name mean
/// right now" lookups. Re-declaring a name appends a new entry and
/// repoints the index — the spec's "duplicates shadow by reparse"
/// invariant falls out of always looking up through the index rather than
/// scanning the vec.
pub struct Environment {
    interner: Interner,
    by_name: std::collections::HashMap<Symbol, usize>,
    decls: Vec<Declaration>,
    type_sym: Symbol,
    sorry_sym: Symbol,
}

impl Environment {
    /// A fresh environment with `Type` and `SORRY` seeded.
    pub fn new() -> Self {
        let mut interner = Interner::new();
        let type_sym = interner.intern("Type");
        let sorry_sym = interner.intern("SORRY");

        let mut env = Environment {
            interner,
            by_name: std::collections::HashMap::new(),
            decls: Vec::new(),
            type_sym,
            sorry_sym,
        };
        env.declare(type_sym, Term::Error, None);
        env.declare(sorry_sym, Term::Sorry, None);
        env
    }

    /// The symbol for the predeclared `Type` sort. A `Pi`'s type is this
    /// identifier by fiat (see `postulate-check`), never derived from
    /// `Type`'s own stored sentinel type.
    pub fn type_symbol(&self) -> Symbol {
        self.type_sym
    }

    /// The symbol for the predeclared `SORRY` escape hatch.
    pub fn sorry_symbol(&self) -> Symbol {
        self.sorry_sym
    }

    /// The shared interner. Every stage of the pipeline (lexer, parser,
    /// resolver, checker, dump) interns identifiers through this same
    /// table so that `Symbol` equality is meaningful.
    pub fn interner(&mut self) -> &mut Interner {
        &mut self.interner
    }

    /// Interns `name` and looks it up in one step.
    pub fn lookup_str(&mut self, name: &str) -> Option<&Declaration> {
        let sym = self.interner.intern(name);
        self.lookup(sym)
    }

    /// Looks up the current (most recently declared) binding for `sym`.
    pub fn lookup(&self, sym: Symbol) -> Option<&Declaration> {
        self.by_name.get(&sym).map(|&i| &self.decls[i])
    }

    /// `true` if `sym` has any binding (axiom or definition) in scope.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.by_name.contains_key(&sym)
    }

    /// Appends a new declaration, extending the environment left-to-right.
    /// Never overwrites or removes an earlier entry in `decls` — it only
    /// repoints `by_name` so subsequent lookups see the new binding.
    pub fn declare(&mut self, name: Symbol, ty: Term, def: Option<Term>) {
        let index = self.decls.len();
        self.decls.push(Declaration { name, ty, def });
        self.by_name.insert(name, index);
    }

    /// All declarations in the order they were added (the full history,
    /// including any later-shadowed entries). The driver's JSON dump uses
    /// this to emit one object per currently-visible name, letting later
    /// entries for the same name overwrite earlier ones exactly as live
    /// lookup does.
    pub fn declarations(&self) -> &[Declaration] {
        &self.decls
    }

    pub fn resolve_name(&self, sym: Symbol) -> &str {
        self.interner.resolve(sym)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_type_and_sorry() {
        let mut env = Environment::new();
        let type_decl = env.lookup_str("Type").expect("Type is seeded");
        assert_eq!(type_decl.ty, Term::Error);
        assert!(type_decl.def.is_none());

        let sorry_decl = env.lookup_str("SORRY").expect("SORRY is seeded");
        assert_eq!(sorry_decl.ty, Term::Sorry);
    }

    #[test]
    fn declare_then_lookup_round_trips() {
        let mut env = Environment::new();
        let nat = env.interner().intern("Nat");
        let type_sym = env.interner().intern("Type");
        env.declare(nat, Term::Ident(type_sym), None);
        let decl = env.lookup(nat).unwrap();
        assert_eq!(decl.ty, Term::Ident(type_sym));
    }

    #[test]
    fn redeclaring_a_name_shadows_the_earlier_entry() {
        let mut env = Environment::new();
        let x = env.interner().intern("x");
        let type_sym = env.interner().intern("Type");
        env.declare(x, Term::Ident(type_sym), None);
        env.declare(x, Term::Ref(1), Some(Term::Ref(1)));

        let decl = env.lookup(x).unwrap();
        assert_eq!(decl.ty, Term::Ref(1));
        // Both declarations remain in the append-only history.
        assert_eq!(env.declarations().iter().filter(|d| d.name == x).count(), 2);
    }

    #[test]
    fn undeclared_name_is_absent() {
        let mut env = Environment::new();
        assert!(env.lookup_str("Nat").is_none());
    }
}
