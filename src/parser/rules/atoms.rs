use std::fmt;
use std::str::FromStr;

use super::{Parser, SyntaxRule};
use crate::errors::{ErrorMsg, Result};
use crate::lexer::{self, Token};
use crate::span::Spanned;

/// Maximum number of digits in a byte.
const MAX_BYTE_DIGITS: usize = 3;

/// Returns the next word, if the next token is a word that satisfies the
/// predicate.
fn next_word_if<'a>(p: &mut Parser<'a>, predicate: impl Fn(&str) -> bool) -> Option<&'a str> {
    match p.next() {
        Some(Token::Word) if predicate(p.string()) => Some(p.string()),
        _ => None,
    }
}

/// Parses an integer word that has already been checked to be well-formed.
fn parse_int<T: FromStr>(p: &Parser<'_>) -> Result<Spanned<T>>
where
    T::Err: fmt::Display,
{
    p.string()
        .parse::<T>()
        .map(|inner| Spanned {
            span: p.span(),
            inner,
        })
        .map_err(|e| ErrorMsg::InvalidInteger(e.to_string().into()).with_span(p.span()))
}

/// Consumes a specific word, such as `init_start`.
#[derive(Debug, Copy, Clone)]
pub struct Keyword(pub &'static str);
impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0)
    }
}
impl SyntaxRule for Keyword {
    type Output = ();

    fn might_match(&self, mut p: Parser<'_>) -> bool {
        next_word_if(&mut p, |s| s == self.0).is_some()
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        if !self.might_match(*p) {
            return p.expected(self);
        }
        p.next();
        Ok(())
    }
}

/// Consumes a single bit: `0`, `1`, `false`, or `true`.
#[derive(Debug, Copy, Clone)]
pub struct Bit;
impl_display!(for Bit, "bit: 0 | 1 | true | false");
impl SyntaxRule for Bit {
    type Output = bool;

    fn might_match(&self, mut p: Parser<'_>) -> bool {
        next_word_if(&mut p, |s| lexer::bit_value(s).is_some()).is_some()
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        if !self.might_match(*p) {
            return p.expected(self);
        }
        p.next();
        match lexer::bit_value(p.string()) {
            Some(bit) => Ok(bit),
            None => internal_error!("bit word {:?} has no value", p.string()),
        }
    }
}

/// Consumes a rule number of 1 to 3 digits, which must be at most 255.
#[derive(Debug, Copy, Clone)]
pub struct Byte;
impl_display!(for Byte, "byte: integer from 0 to 255");
impl SyntaxRule for Byte {
    type Output = u8;

    fn might_match(&self, mut p: Parser<'_>) -> bool {
        next_word_if(&mut p, |s| {
            lexer::is_unsigned_int(s) && s.len() <= MAX_BYTE_DIGITS
        })
        .is_some()
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        if !self.might_match(*p) {
            return p.expected(self);
        }
        p.next();
        let Spanned { span, inner } = parse_int::<u64>(p)?;
        if inner > u8::MAX as u64 {
            return Err(ErrorMsg::RuleNumberOutOfRange(inner).with_span(span));
        }
        Ok(inner as u8)
    }
}

/// Consumes an unsigned decimal integer.
#[derive(Debug, Copy, Clone)]
pub struct UnsignedInt(pub &'static str);
impl fmt::Display for UnsignedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: non-negative integer", self.0)
    }
}
impl SyntaxRule for UnsignedInt {
    type Output = Spanned<usize>;

    fn might_match(&self, mut p: Parser<'_>) -> bool {
        next_word_if(&mut p, lexer::is_unsigned_int).is_some()
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        if !self.might_match(*p) {
            return p.expected(self);
        }
        p.next();
        parse_int(p)
    }
}

/// Consumes a decimal integer with an optional minus sign.
#[derive(Debug, Copy, Clone)]
pub struct SignedInt;
impl_display!(for SignedInt, "integer");
impl SyntaxRule for SignedInt {
    type Output = Spanned<i64>;

    fn might_match(&self, mut p: Parser<'_>) -> bool {
        next_word_if(&mut p, lexer::is_signed_int).is_some()
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        if !self.might_match(*p) {
            return p.expected(self);
        }
        p.next();
        parse_int(p)
    }
}
