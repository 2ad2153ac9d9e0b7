//! Parser that turns input text into an `Input`.
//!
//! Grammar rules are tried in order. Each rule first peeks at the input to
//! decide whether it applies (`SyntaxRule::might_match()`); once it does, the
//! rule is committed and any later mismatch is a fatal error rather than a cue
//! to try the next alternative. This gives ordered choice with a cut after the
//! first token of each alternative, which is all this grammar needs.

use log::{debug, trace};

#[macro_use]
mod macros;
pub mod rules;

use crate::ast::Input;
use crate::errors::{Error, ErrorMsg, Result};
use crate::lexer::{self, Token};
use crate::span::{Span, Spanned};
use rules::SyntaxRule;

/// Parses a complete automaton description.
///
/// Fails if any input remains after `init_end`.
pub fn parse(src: &str) -> Result<Input> {
    let tokens = lexer::tokenize(src);
    let mut p = Parser::new(src, &tokens);
    let input = p.parse(rules::InputSpec)?;
    p.parse(rules::EndOfInput)?;
    debug!(
        "Parsed rule {} (number {}), width {}, {} generations, {} live cells",
        input.rule,
        input.rule.number(),
        input.size.width,
        input.size.generations,
        input.init.cells.len(),
    );
    Ok(input)
}

/// Token parser used to assemble an `Input`.
#[derive(Debug, Copy, Clone)]
pub struct Parser<'a> {
    /// Source text.
    src: &'a str,
    /// Tokens to feed.
    tokens: &'a [Spanned<Token>],
    /// Index of the "current" token (None = before start).
    pub cursor: Option<usize>,
}
impl<'a> Parser<'a> {
    /// Constructs a parser for a string.
    pub fn new(src: &'a str, tokens: &'a [Spanned<Token>]) -> Self {
        Self {
            src,
            tokens,
            cursor: None,
        }
    }

    /// Returns the token at the cursor.
    pub fn current(self) -> Option<Token> {
        Some(self.tokens.get(self.cursor?)?.inner)
    }
    /// Returns the span of the current token. If there is no current token,
    /// returns an empty span at the begining or end of the input appropriately.
    pub fn span(&self) -> Span {
        match self.cursor {
            Some(idx) => match self.tokens.get(idx) {
                Some(token) => token.span,
                None => Span::empty(self.src.len()),
            },
            None => Span::empty(0),
        }
    }
    /// Returns the source string of the current token. If there is no current
    /// token, returns an empty string.
    pub fn string(&self) -> &'a str {
        if self.current().is_some() {
            let span = self.span();
            &self.src[span.start..span.end]
        } else {
            ""
        }
    }

    /// Moves the cursor forward without skipping whitespace and then returns
    /// the token at the cursor.
    pub fn next_noskip(&mut self) -> Option<Token> {
        // Add 1 or set to zero.
        self.cursor = Some(self.cursor.map(|idx| idx + 1).unwrap_or(0));
        self.current()
    }
    /// Returns whether the current token would normally be skipped.
    pub fn is_skip(self) -> bool {
        self.current().map_or(false, Token::is_skip)
    }
    /// Moves the cursor forward and then returns the token at the cursor.
    pub fn next(&mut self) -> Option<Token> {
        loop {
            self.next_noskip();
            if !self.is_skip() {
                return self.current();
            }
        }
    }
    /// Returns the token after the one at the cursor, without mutably moving
    /// the cursor.
    pub fn peek_next(self) -> Option<Token> {
        let mut tmp = self;
        tmp.next()
    }
    /// Returns the span of the token after the one at the cursor, without
    /// mutably moving the cursor.
    pub fn peek_next_span(self) -> Span {
        let mut tmp = self;
        tmp.next();
        tmp.span()
    }

    /// Attempts to apply a syntax rule starting at the cursor, returning an
    /// error if it fails. This should only be used when this syntax rule
    /// represents the only valid parse; if there are other options,
    /// `try_parse()` is preferred.
    pub fn parse<R: SyntaxRule>(&mut self, rule: R) -> Result<R::Output> {
        self.try_parse(&rule)
            .unwrap_or_else(|| self.expected(rule))
    }
    /// Applies a syntax rule starting at the cursor, returning `None` if the
    /// syntax rule definitely doesn't match (i.e. its `might_match()`
    /// implementation returned false).
    pub fn try_parse<R: SyntaxRule>(&mut self, rule: R) -> Option<Result<R::Output>> {
        rule.might_match(*self).then(|| {
            trace!("Matching {} at offset {}", rule, self.peek_next_span().start);
            let old_state = *self; // Save state.
            let ret = rule.consume_match(self);
            if ret.is_err() {
                // Restore prior state on failure.
                *self = old_state;
            }
            ret
        })
    }

    /// Returns an error describing that `expected` was expected.
    pub fn expected<T>(self, expected: impl ToString) -> Result<T> {
        Err(self.expected_err(expected))
    }
    /// Returns an error describing that `expected` was expected, pointing at
    /// the next token.
    pub fn expected_err(mut self, expected: impl ToString) -> Error {
        self.next();
        ErrorMsg::Expected(expected.to_string().into()).with_span(self.span())
    }
}
