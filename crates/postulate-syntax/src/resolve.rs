//! The de Bruijn lifter ("rename"): surface [`Expr`] -> kernel [`Term`].
//!
//! This is the one place global definitions are inlined (spec §4.3): once
//! an identifier resolves to a previously-declared *definition*, its
//! already-resolved body is spliced in verbatim and the kernel never again
//! sees that name. An identifier that resolves to an *axiom* stays opaque
//! as `Term::Ident` — the kernel has no notion of unfolding it.
//!
//! Bound names are tracked with a stack of `Option<Symbol>` — `None` marks
//! an anonymous binder (the head of a `Lambda`/`Pi` that wasn't an
//! annotated `Binding`). Lookup walks the stack from the end (innermost)
//! to the start (outermost), exactly mirroring how `Ref` indices are
//! counted in the kernel.

use postulate_base::{SpannedError, Symbol};
use postulate_kernel::{Environment, Term};

use crate::ast::Expr;

struct Scope<'a> {
    env: &'a Environment,
    bound: Vec<Option<Symbol>>,
}

impl<'a> Scope<'a> {
    fn lookup_bound(&self, name: Symbol) -> Option<usize> {
        for (depth, entry) in self.bound.iter().rev().enumerate() {
            if *entry == Some(name) {
                return Some(depth + 1);
            }
        }
        None
    }

    fn resolve(&mut self, expr: &Expr) -> Result<Term, SpannedError> {
        match expr {
            Expr::Ident(name, span) => {
                if let Some(depth) = self.lookup_bound(*name) {
                    return Ok(Term::Ref(depth));
                }
                match self.env.lookup(*name) {
                    Some(decl) => match &decl.def {
                        Some(body) => Ok(body.clone()),
                        None => Ok(Term::Ident(*name)),
                    },
                    None => Err(SpannedError::new(
                        format!("{} not defined", self.env.resolve_name(*name)),
                        *span,
                    )),
                }
            }
            Expr::App(f, v, _) => {
                let f = self.resolve(f)?;
                let v = self.resolve(v)?;
                Ok(Term::App(Box::new(f), Box::new(v)))
            }
            Expr::Lambda { head, body, .. } => {
                let (head_ty, binder_name) = self.resolve_head(head)?;
                self.bound.push(binder_name);
                let body = self.resolve(body);
                self.bound.pop();
                Ok(Term::Lambda {
                    head: Box::new(head_ty),
                    body: Box::new(body?),
                })
            }
            Expr::Pi { head, body, .. } => {
                let (head_ty, binder_name) = self.resolve_head(head)?;
                self.bound.push(binder_name);
                let body = self.resolve(body);
                self.bound.pop();
                Ok(Term::Pi {
                    head: Box::new(head_ty),
                    body: Box::new(body?),
                })
            }
            Expr::Binding { span, .. } => Err(SpannedError::new(
                "annotated binding is only valid as a lambda/pi head",
                *span,
            )),
            Expr::Error(span) => Err(SpannedError::new("malformed expression", *span)),
        }
    }

    /// Resolves a `Lambda`/`Pi` head: either an annotated `Binding`, whose
    /// name enters scope, or a bare expression used as an anonymous
    /// binder's type.
    fn resolve_head(&mut self, head: &Expr) -> Result<(Term, Option<Symbol>), SpannedError> {
        match head {
            Expr::Binding { name, ty, .. } => {
                let ty = self.resolve(ty)?;
                Ok((ty, Some(*name)))
            }
            other => {
                let ty = self.resolve(other)?;
                Ok((ty, None))
            }
        }
    }
}

/// Resolves a closed surface expression (no free local binders — top-level
/// declarations are always closed) against the current global environment.
pub fn resolve(expr: &Expr, env: &Environment) -> Result<Term, SpannedError> {
    let mut scope = Scope { env, bound: Vec::new() };
    scope.resolve(expr)
}
