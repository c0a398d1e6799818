//! Recursive-descent parser: tokens -> surface [`Expr`] tree and top-level
//! declarations.
//!
//! Precedence, highest to lowest: atom, then left-associative application
//! (juxtaposition), then `=>`/`->` which share one right-associative fold.
//! The fold is what spec §4.2 describes directly: parse a run of
//! applications, then every time `=>` or `->` appears parse another run of
//! applications as the next segment, and once the segments run out, combine
//! them right-to-left — the last segment is the innermost body, each marker
//! moving outward wraps the segment before it in a `Lambda` or `Pi`.

use postulate_base::{Span, SpannedError, Symbol};

use crate::ast::Expr;
use crate::token::{Token, TokenKind};

/// A single top-level declaration: `name : ty (:= def)? ;`.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: Symbol,
    pub name_span: Span,
    pub ty: Expr,
    pub def: Option<Expr>,
    pub span: Span,
}

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eof_span(&self) -> Span {
        self.tokens
            .last()
            .map(|t| Span::new(t.span.end, t.span.end))
            .unwrap_or_else(|| Span::new(0, 0))
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, SpannedError> {
        match self.advance() {
            Some(t) if t.kind == kind => Ok(t),
            Some(t) => Err(SpannedError::new(
                format!("expected {what}"),
                t.span,
            )),
            None => Err(SpannedError::new(
                format!("expected {what}, found end of input"),
                self.eof_span(),
            )),
        }
    }

    fn expect_ident(&mut self) -> Result<(Symbol, Span), SpannedError> {
        match self.advance() {
            Some(Token { kind: TokenKind::Ident(sym), span }) => Ok((sym, span)),
            Some(t) => Err(SpannedError::new("expected identifier", t.span)),
            None => Err(SpannedError::new(
                "expected identifier, found end of input",
                self.eof_span(),
            )),
        }
    }

    fn at_atom_start(&self) -> bool {
        matches!(
            self.peek_kind(),
            Some(TokenKind::Ident(_)) | Some(TokenKind::LParen)
        )
    }

    /// Parses `(ident : expr)` vs. `(expr)` by looking two tokens ahead of
    /// the opening paren: an annotated binding requires exactly `ident`
    /// then `:` immediately inside the parenthesis.
    fn looks_like_binding(&self) -> bool {
        matches!(self.tokens.get(self.pos + 1).map(|t| t.kind), Some(TokenKind::Ident(_)))
            && matches!(self.tokens.get(self.pos + 2).map(|t| t.kind), Some(TokenKind::Colon))
    }

    fn parse_atom(&mut self) -> Result<Expr, SpannedError> {
        match self.peek_kind() {
            Some(TokenKind::Ident(sym)) => {
                let span = self.advance().unwrap().span;
                Ok(Expr::Ident(sym, span))
            }
            Some(TokenKind::LParen) => {
                let start = self.advance().unwrap().span;
                if self.looks_like_binding() {
                    let (name, _) = self.expect_ident()?;
                    self.expect(TokenKind::Colon, "':'")?;
                    let ty = self.parse_expr()?;
                    let close = self.expect(TokenKind::RParen, "')'")?;
                    let span = start.merge(close.span);
                    Ok(Expr::Binding { name, ty: Box::new(ty), span })
                } else {
                    let inner = self.parse_expr()?;
                    let close = self.expect(TokenKind::RParen, "')'")?;
                    Ok(inner.retag_span(start.merge(close.span)))
                }
            }
            Some(_) | None => {
                let span = self.peek().map(|t| t.span).unwrap_or_else(|| self.eof_span());
                Err(SpannedError::new("expected an expression", span))
            }
        }
    }

    /// A left-associative run of atoms: `a b c` is `App(App(a, b), c)`.
    fn parse_application(&mut self) -> Result<Expr, SpannedError> {
        let mut acc = self.parse_atom()?;
        while self.at_atom_start() {
            let arg = self.parse_atom()?;
            let span = acc.span().merge(arg.span());
            acc = Expr::App(Box::new(acc), Box::new(arg), span);
        }
        Ok(acc)
    }

    /// A full expression: one or more application runs joined by `=>`/`->`,
    /// folded right-to-left into `Lambda`/`Pi` nodes.
    pub fn parse_expr(&mut self) -> Result<Expr, SpannedError> {
        let mut segments = vec![self.parse_application()?];
        let mut markers = Vec::new();
        while matches!(self.peek_kind(), Some(TokenKind::FatArrow) | Some(TokenKind::Arrow)) {
            let marker = self.advance().unwrap().kind;
            markers.push(marker);
            segments.push(self.parse_application()?);
        }

        let mut result = segments.pop().expect("at least one segment");
        while let Some(head) = segments.pop() {
            let marker = markers.pop().expect("one marker per fold step");
            let span = head.span().merge(result.span());
            result = match marker {
                TokenKind::FatArrow => Expr::Lambda {
                    head: Box::new(head),
                    body: Box::new(result),
                    span,
                },
                TokenKind::Arrow => Expr::Pi {
                    head: Box::new(head),
                    body: Box::new(result),
                    span,
                },
                _ => unreachable!("only => and -> are pushed as markers"),
            };
        }
        Ok(result)
    }

    fn parse_declaration(&mut self) -> Result<Declaration, SpannedError> {
        let (name, name_span) = self.expect_ident()?;
        self.expect(TokenKind::Colon, "':'")?;
        let ty = self.parse_expr()?;
        let def = if matches!(self.peek_kind(), Some(TokenKind::ColonEq)) {
            self.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };
        let end = self.expect(TokenKind::Semicolon, "';'")?;
        let span = name_span.merge(end.span);
        Ok(Declaration { name, name_span, ty, def, span })
    }

    /// Parses the whole token stream as a sequence of `;`-terminated
    /// declarations.
    pub fn parse_program(&mut self) -> Result<Vec<Declaration>, SpannedError> {
        let mut decls = Vec::new();
        while self.peek().is_some() {
            decls.push(self.parse_declaration()?);
        }
        Ok(decls)
    }
}

/// Parses a complete source file (already tokenized) into its declarations.
pub fn parse(tokens: &[Token]) -> Result<Vec<Declaration>, SpannedError> {
    Parser::new(tokens).parse_program()
}

impl Expr {
    /// Returns `self` with its own span widened to include parentheses
    /// consumed around it (`(expr)` should report errors spanning the
    /// parens, not just the inner expression).
    fn retag_span(self, span: Span) -> Expr {
        match self {
            Expr::Ident(s, _) => Expr::Ident(s, span),
            Expr::App(f, v, _) => Expr::App(f, v, span),
            Expr::Lambda { head, body, .. } => Expr::Lambda { head, body, span },
            Expr::Pi { head, body, .. } => Expr::Pi { head, body, span },
            Expr::Binding { name, ty, .. } => Expr::Binding { name, ty, span },
            Expr::Error(_) => Expr::Error(span),
        }
    }
}
