//! Lexer for CSS selectors using logos
//!
//! Whitespace is significant (it is the descendant combinator), so it is
//! produced as a token instead of being skipped.

use logos::Logos;

use super::SelectorError;

/// Token type for the selector lexer
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[regex(r"[ \t\r\n]+")]
    Space,

    #[token(",")]
    Comma,

    #[token(">")]
    Child,

    #[token("*")]
    Star,

    #[token(".")]
    Dot,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    // Attribute operators
    #[token("=")]
    Equals,

    #[token("^=")]
    PrefixEquals,

    #[token("$=")]
    SuffixEquals,

    #[token("*=")]
    SubstringEquals,

    #[token("~=")]
    WordEquals,

    // `#name` - the hash itself is dropped
    #[regex(r"#[a-zA-Z0-9_-]+", |lex| lex.slice()[1..].to_string())]
    Hash(String),

    // Quoted strings, either quote style
    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    #[regex(r"'[^']*'", |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    String(String),

    // Tag names, class names, attribute names
    #[regex(r"[a-zA-Z_-][a-zA-Z0-9_-]*", |lex| lex.slice().to_string())]
    Ident(String),
}

/// Wrapper for lexer with position tracking
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: Token::lexer(source),
            source,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<(usize, Token, usize), SelectorError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let span = self.inner.span();

        match token {
            Ok(tok) => Some(Ok((span.start, tok, span.end))),
            Err(_) => Some(Err(SelectorError::Lex {
                position: span.start,
                slice: self.source[span].to_string(),
            })),
        }
    }
}
