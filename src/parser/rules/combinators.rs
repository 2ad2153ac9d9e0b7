use std::fmt;

use super::{Parser, SyntaxRule};
use crate::errors::{ErrorMsg, Result};

/// Rule that matches the same tokens but applies some function to the
/// result.
#[derive(Debug, Copy, Clone)]
pub struct TokenMapper<R, F> {
    /// Inner syntax rule.
    pub inner: R,
    /// Function to apply to the result.
    pub f: F,
}
impl<R: fmt::Display, F> fmt::Display for TokenMapper<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}
impl<B, R: SyntaxRule, F: Fn(R::Output) -> B> SyntaxRule for TokenMapper<R, F> {
    type Output = B;

    fn might_match(&self, p: Parser<'_>) -> bool {
        self.inner.might_match(p)
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        self.inner.consume_match(p).map(&self.f)
    }
}

/// Rule that matches another rule an exact number of times in a row.
#[derive(Debug, Copy, Clone)]
pub struct Repeat<R> {
    /// Inner syntax rule.
    inner: R,
    /// Number of repetitions.
    count: usize,
}
impl<R> Repeat<R> {
    /// Returns a rule that matches `inner` exactly `count` times.
    pub fn exactly(count: usize, inner: R) -> Self {
        Self { inner, count }
    }
}
impl<R: fmt::Display> fmt::Display for Repeat<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} times)", self.inner, self.count)
    }
}
impl<R: SyntaxRule> SyntaxRule for Repeat<R> {
    type Output = Vec<R::Output>;

    fn might_match(&self, p: Parser<'_>) -> bool {
        self.count == 0 || self.inner.might_match(p)
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        (0..self.count).map(|_| p.parse(&self.inner)).collect()
    }
}

/// Rule that matches the end of the input.
///
/// This always commits, so any leftover token is reported as trailing input
/// rather than as a mismatch.
#[derive(Debug, Copy, Clone)]
pub struct EndOfInput;
impl_display!(for EndOfInput, "end of input");
impl SyntaxRule for EndOfInput {
    type Output = ();

    fn might_match(&self, _p: Parser<'_>) -> bool {
        true
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        match p.next() {
            None => Ok(()),
            Some(_) => Err(ErrorMsg::TrailingInput.with_span(p.span())),
        }
    }
}
