use std::convert::TryFrom;

use super::{Bit, Byte, Keyword, Parser, Repeat, SignedInt, SyntaxRule, UnsignedInt};
use crate::ast::{Init, Input, Rule, RuleSyntax, Size};
use crate::errors::{ErrorMsg, Result};
use crate::span::Spanned;

/// Number of bits in a `U` rule.
const RULE_U_BITS: usize = 8;

/// Consumes a `U` rule followed by exactly 8 bits.
#[derive(Debug, Copy, Clone)]
pub struct RuleU;
impl_display!(for RuleU, "'U' followed by {} bits", RULE_U_BITS);
impl SyntaxRule for RuleU {
    type Output = RuleSyntax;

    fn might_match(&self, p: Parser<'_>) -> bool {
        Keyword("U").might_match(p)
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        p.parse(Keyword("U"))?;
        let bits = p.parse(Repeat::exactly(RULE_U_BITS, Bit))?;
        match <[bool; RULE_U_BITS]>::try_from(bits) {
            Ok(bits) => Ok(RuleSyntax::U { bits }),
            Err(bits) => internal_error!("expected {} bits; got {}", RULE_U_BITS, bits.len()),
        }
    }
}

/// Consumes an `R` rule followed by a rule number.
#[derive(Debug, Copy, Clone)]
pub struct RuleR;
impl_display!(for RuleR, "'R' followed by a rule number");
impl SyntaxRule for RuleR {
    type Output = RuleSyntax;

    fn might_match(&self, p: Parser<'_>) -> bool {
        Keyword("R").might_match(p)
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        p.parse(Keyword("R"))?;
        let number = p.parse(Byte)?;
        Ok(RuleSyntax::R { number })
    }
}

/// Consumes a rule in any of its forms and resolves its number.
#[derive(Debug, Copy, Clone)]
pub struct RuleSpec;
impl_display!(for RuleSpec, "rule: A | B | U | R");
impl SyntaxRule for RuleSpec {
    type Output = Rule;

    fn might_match(&self, p: Parser<'_>) -> bool {
        Keyword("A").might_match(p)
            || Keyword("B").might_match(p)
            || RuleU.might_match(p)
            || RuleR.might_match(p)
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        let syntax = parse_one_of!(
            p,
            [
                Keyword("A").map(|()| RuleSyntax::A),
                Keyword("B").map(|()| RuleSyntax::B),
                RuleU,
                RuleR,
            ]
            else self,
        )?;
        Ok(Rule::new(syntax))
    }
}

/// Consumes the grid width and number of generations.
#[derive(Debug, Copy, Clone)]
pub struct SizeSpec;
impl_display!(for SizeSpec, "size: width and number of generations");
impl SyntaxRule for SizeSpec {
    type Output = Size;

    fn might_match(&self, p: Parser<'_>) -> bool {
        UnsignedInt("width").might_match(p)
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        let width = p.parse(UnsignedInt("width"))?;
        let generations = p.parse(UnsignedInt("number of generations"))?;
        if width.inner < 1 {
            return Err(ErrorMsg::WidthOutOfRange(width.inner).with_span(width.span));
        }
        Ok(Size {
            width: width.inner,
            generations: generations.inner,
        })
    }
}

/// Consumes the list of initially live cells, from `init_start` to
/// `init_end`.
#[derive(Debug, Copy, Clone)]
pub struct InitSpec;
impl_display!(for InitSpec, "'init_start'");
impl SyntaxRule for InitSpec {
    type Output = Vec<Spanned<i64>>;

    fn might_match(&self, p: Parser<'_>) -> bool {
        Keyword("init_start").might_match(p)
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        p.parse(Keyword("init_start"))?;
        let mut cells = vec![];
        loop {
            // End the list or consume a cell index.
            if let Some(cell) = parse_one_of!(
                p,
                [
                    SignedInt.map(Some),
                    Keyword("init_end").map(|()| None::<Spanned<i64>>),
                ],
            )? {
                cells.push(cell);
            } else {
                break;
            }
        }
        Ok(cells)
    }
}

/// Consumes a complete automaton description: rule, size, and initially live
/// cells.
///
/// Cell indices are checked against the width here, so that the error can
/// point at the offending index.
#[derive(Debug, Copy, Clone)]
pub struct InputSpec;
impl_display!(for InputSpec, "automaton description");
impl SyntaxRule for InputSpec {
    type Output = Input;

    fn might_match(&self, _p: Parser<'_>) -> bool {
        // There is nothing else the input could be.
        true
    }
    fn consume_match(&self, p: &mut Parser<'_>) -> Result<Self::Output> {
        let rule = p.parse(RuleSpec)?;
        let size = p.parse(SizeSpec)?;
        let cells = p.parse(InitSpec)?;
        for cell in &cells {
            if cell.inner < 1 || cell.inner as u64 > size.width as u64 {
                return Err(ErrorMsg::CellOutOfRange {
                    cell: cell.inner,
                    width: size.width,
                }
                .with_span(cell.span));
            }
        }
        Ok(Input {
            rule,
            size,
            init: Init {
                cells: cells.into_iter().map(|cell| cell.inner).collect(),
            },
        })
    }
}
