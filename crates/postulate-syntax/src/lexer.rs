//! Byte-offset lexer: `(buffer, offset) -> (next token, offset past it)`.
//!
//! Rules are tried in the order spec §4.1 lists them — identifier, then
//! whitespace, then line comment, then block comment, then exact-match
//! punctuation by priority (`=>` before `->` before `:=` before the
//! single-character tokens, since `:=` must not be lexed as `:` followed by
//! a dangling `=`). A position from which nothing matches, and which is not
//! end-of-input, is a lex error.

use postulate_base::{Interner, Span, SpannedError};

use crate::token::{Token, TokenKind};

const PUNCTUATION: &[(&str, TokenKind)] = &[
    ("=>", TokenKind::FatArrow),
    ("->", TokenKind::Arrow),
    (":=", TokenKind::ColonEq),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    (":", TokenKind::Colon),
    (";", TokenKind::Semicolon),
];

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'.' || b == b'_'
}

fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b'\t' | b'\r' | b'\n' | b' ')
}

/// Scans the single token starting at `pos`, returning it and the offset
/// just past it. `pos` must be `< source.len()` (callers stop at EOF).
fn next_token(source: &str, pos: usize, interner: &mut Interner) -> Result<(Token, usize), SpannedError> {
    let bytes = source.as_bytes();
    debug_assert!(pos < bytes.len());

    if is_ident_byte(bytes[pos]) {
        let start = pos;
        let mut end = pos;
        while end < bytes.len() && is_ident_byte(bytes[end]) {
            end += 1;
        }
        let sym = interner.intern(&source[start..end]);
        return Ok((Token::new(TokenKind::Ident(sym), Span::new(start, end)), end));
    }

    if is_whitespace_byte(bytes[pos]) {
        let start = pos;
        let mut end = pos;
        while end < bytes.len() && is_whitespace_byte(bytes[end]) {
            end += 1;
        }
        return Ok((Token::new(TokenKind::Whitespace, Span::new(start, end)), end));
    }

    if source[pos..].starts_with("//") {
        let start = pos;
        let mut end = pos + 2;
        while end < bytes.len() && bytes[end] != b'\n' {
            end += 1;
        }
        return Ok((Token::new(TokenKind::Comment, Span::new(start, end)), end));
    }

    if source[pos..].starts_with("/*") {
        let start = pos;
        match source[pos + 2..].find("*/") {
            Some(rel) => {
                let end = pos + 2 + rel + 2;
                return Ok((Token::new(TokenKind::Comment, Span::new(start, end)), end));
            }
            None => {
                return Err(SpannedError::new(
                    "unterminated block comment",
                    Span::new(start, bytes.len()),
                ));
            }
        }
    }

    for (text, kind) in PUNCTUATION {
        if source[pos..].starts_with(text) {
            let end = pos + text.len();
            return Ok((Token::new(*kind, Span::new(pos, end)), end));
        }
    }

    Err(SpannedError::new(
        format!("unexpected character '{}'", bytes[pos] as char),
        Span::new(pos, pos + 1),
    ))
}

/// Lexes the whole source, dropping whitespace and comment tokens. This is
/// the only entry point the parser should use — it never sees trivia.
pub fn tokenize(source: &str, interner: &mut Interner) -> Result<Vec<Token>, SpannedError> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < source.len() {
        let (token, next) = next_token(source, pos, interner)?;
        if !token.is_trivia() {
            tokens.push(token);
        }
        pos = next;
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut interner = Interner::new();
        tokenize(source, &mut interner)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lexes_identifiers_with_dots_and_digits() {
        let mut interner = Interner::new();
        let tokens = tokenize("Nat.zero Nat.Add 0 1.5", &mut interner).unwrap();
        assert_eq!(tokens.len(), 4);
        for t in &tokens {
            assert!(matches!(t.kind, TokenKind::Ident(_)));
        }
    }

    #[test]
    fn skips_whitespace_and_comments() {
        let ks = kinds("  // a line comment\n  /* a block */  x  ");
        assert_eq!(ks.len(), 1);
        assert!(matches!(ks[0], TokenKind::Ident(_)));
    }

    #[test]
    fn punctuation_priority_prefers_longest_match() {
        use TokenKind::*;
        assert_eq!(kinds(":="), vec![ColonEq]);
        assert_eq!(kinds("->"), vec![Arrow]);
        assert_eq!(kinds("=>"), vec![FatArrow]);
        assert_eq!(kinds(":"), vec![Colon]);
    }

    #[test]
    fn full_declaration_tokenizes() {
        use TokenKind::*;
        let ks = kinds("id : (T : Type) -> T -> T := (T : Type) => (x : T) => x;");
        // sanity: at least one of every punctuation kind appears
        assert!(ks.contains(&LParen));
        assert!(ks.contains(&RParen));
        assert!(ks.contains(&Colon));
        assert!(ks.contains(&Arrow));
        assert!(ks.contains(&ColonEq));
        assert!(ks.contains(&FatArrow));
        assert!(ks.contains(&Semicolon));
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let mut interner = Interner::new();
        assert!(tokenize("x /* never closed", &mut interner).is_err());
    }

    #[test]
    fn unterminated_line_comment_reaches_eof_cleanly() {
        let mut interner = Interner::new();
        let tokens = tokenize("x // trailing, no newline", &mut interner).unwrap();
        assert_eq!(tokens.len(), 1);
    }
}
