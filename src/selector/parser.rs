//! Recursive-descent parser from selector tokens to [`Selector`]

use std::iter::Peekable;
use std::vec::IntoIter;

use super::lexer::{Lexer, Token};
use super::{AttrOp, AttributeCondition, Combinator, ComplexSelector, Compound, Selector, SelectorError};

type Spanned = (usize, Token, usize);

/// Parse a selector list
pub fn parse(source: &str) -> Result<Selector, SelectorError> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    let tokens = strip_insignificant_space(tokens);
    if tokens.is_empty() {
        return Err(SelectorError::Empty);
    }

    let mut parser = Parser {
        tokens: tokens.into_iter().peekable(),
        end: source.len(),
    };
    let mut alternatives = vec![parser.complex()?];
    while let Some((_, Token::Comma, _)) = parser.tokens.peek() {
        parser.tokens.next();
        alternatives.push(parser.complex()?);
    }

    match parser.tokens.next() {
        None => Ok(Selector { alternatives }),
        Some((position, token, _)) => Err(unexpected(position, &token)),
    }
}

/// Drop whitespace that is not a descendant combinator: leading, trailing,
/// and around `,` / `>`
fn strip_insignificant_space(tokens: Vec<Spanned>) -> Vec<Spanned> {
    let is_separator = |t: &Token| matches!(t, Token::Comma | Token::Child);
    let mut out: Vec<Spanned> = Vec::with_capacity(tokens.len());

    for (i, spanned) in tokens.iter().enumerate() {
        if spanned.1 != Token::Space {
            out.push(spanned.clone());
            continue;
        }
        let prev_ok = out.last().is_some_and(|(_, t, _)| !is_separator(t));
        let next_ok = tokens
            .get(i + 1)
            .is_some_and(|(_, t, _)| !is_separator(t) && *t != Token::Space);
        if prev_ok && next_ok {
            out.push(spanned.clone());
        }
    }
    out
}

fn unexpected(position: usize, token: &Token) -> SelectorError {
    SelectorError::Unexpected {
        position,
        found: format!("{:?}", token),
    }
}

struct Parser {
    tokens: Peekable<IntoIter<Spanned>>,
    end: usize,
}

impl Parser {
    fn complex(&mut self) -> Result<ComplexSelector, SelectorError> {
        let mut compounds = vec![self.compound()?];
        let mut combinators = Vec::new();

        loop {
            let combinator = match self.tokens.peek() {
                Some((_, Token::Space, _)) => Combinator::Descendant,
                Some((_, Token::Child, _)) => Combinator::Child,
                _ => break,
            };
            self.tokens.next();
            combinators.push(combinator);
            compounds.push(self.compound()?);
        }

        Ok(ComplexSelector {
            compounds,
            combinators,
        })
    }

    fn compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();
        let mut any = false;

        match self.tokens.peek() {
            Some((_, Token::Ident(_), _)) => {
                if let Some((_, Token::Ident(tag), _)) = self.tokens.next() {
                    compound.tag = Some(tag);
                }
                any = true;
            }
            Some((_, Token::Star, _)) => {
                self.tokens.next();
                any = true;
            }
            _ => {}
        }

        loop {
            match self.tokens.peek() {
                Some((_, Token::Hash(_), _)) => {
                    if let Some((_, Token::Hash(id), _)) = self.tokens.next() {
                        compound.id = Some(id);
                    }
                }
                Some((_, Token::Dot, _)) => {
                    self.tokens.next();
                    compound.classes.push(self.ident()?);
                }
                Some((_, Token::BracketOpen, _)) => {
                    self.tokens.next();
                    compound.attributes.push(self.attribute()?);
                }
                _ => break,
            }
            any = true;
        }

        if any {
            Ok(compound)
        } else {
            Err(self.error_here())
        }
    }

    fn attribute(&mut self) -> Result<AttributeCondition, SelectorError> {
        let name = self.ident()?;
        let op = match self.tokens.peek() {
            Some((_, Token::BracketClose, _)) => None,
            Some((_, Token::Equals, _)) => Some(AttrOp::Equals),
            Some((_, Token::PrefixEquals, _)) => Some(AttrOp::Prefix),
            Some((_, Token::SuffixEquals, _)) => Some(AttrOp::Suffix),
            Some((_, Token::SubstringEquals, _)) => Some(AttrOp::Substring),
            Some((_, Token::WordEquals, _)) => Some(AttrOp::Word),
            _ => return Err(self.error_here()),
        };

        let test = match op {
            None => None,
            Some(op) => {
                self.tokens.next();
                let value = match self.tokens.next() {
                    Some((_, Token::String(s), _)) | Some((_, Token::Ident(s), _)) => s,
                    Some((position, token, _)) => return Err(unexpected(position, &token)),
                    None => return Err(self.end_of_input()),
                };
                Some((op, value))
            }
        };

        match self.tokens.next() {
            Some((_, Token::BracketClose, _)) => Ok(AttributeCondition { name, test }),
            Some((position, token, _)) => Err(unexpected(position, &token)),
            None => Err(self.end_of_input()),
        }
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        match self.tokens.next() {
            Some((_, Token::Ident(name), _)) => Ok(name),
            Some((position, token, _)) => Err(unexpected(position, &token)),
            None => Err(self.end_of_input()),
        }
    }

    fn error_here(&mut self) -> SelectorError {
        match self.tokens.peek() {
            Some((position, token, _)) => unexpected(*position, token),
            None => self.end_of_input(),
        }
    }

    fn end_of_input(&self) -> SelectorError {
        SelectorError::Unexpected {
            position: self.end,
            found: "end of input".to_string(),
        }
    }
}
