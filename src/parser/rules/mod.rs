//! Grammar rules, each producing a typed value from tokens.

use std::fmt;

mod atoms;
mod combinators;
mod input;

use super::Parser;
use crate::errors::Result;
pub use atoms::*;
pub use combinators::*;
pub use input::*;

/// A grammar rule that produces a value from tokens.
pub trait SyntaxRule: fmt::Display {
    /// Value that this rule outputs.
    type Output;

    /// Returns whether it appears that the input is trying to form this
    /// construct (generally returns true if the first token matches). If
    /// `consume_match()` returns `Ok`, this function MUST return true.
    fn might_match(&self, p: Parser<'_>) -> bool;
    /// Consumes the tokens that are part of this syntax structure, returning
    /// the value produced. Does NOT restore the `Parser` if matching fails.
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output>;

    /// Applies a function to the output of this syntax rule.
    fn map<B, F: Fn(Self::Output) -> B>(self, f: F) -> TokenMapper<Self, F>
    where
        Self: Sized,
    {
        TokenMapper { inner: self, f }
    }
}

impl<T: SyntaxRule + ?Sized> SyntaxRule for &T {
    type Output = T::Output;

    fn might_match(&self, p: Parser<'_>) -> bool {
        (**self).might_match(p)
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        (**self).consume_match(p)
    }
}
