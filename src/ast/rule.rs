//! Rule syntax and resolution to a Wolfram rule number.

use std::fmt;

/// Rule number of the `A` shorthand.
pub const RULE_A_NUMBER: u8 = 122;
/// Rule number of the `B` shorthand.
pub const RULE_B_NUMBER: u8 = 86;

/// One of the ways to write a rule in the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RuleSyntax {
    /// `A`, shorthand for rule 122.
    A,
    /// `B`, shorthand for rule 86.
    B,
    /// `U b0 b1 ... b7`, the output bit for each neighborhood, least
    /// significant first.
    U {
        /// Output bits, indexed by neighborhood value.
        bits: [bool; 8],
    },
    /// `R n`, the rule number in decimal.
    R {
        /// Rule number.
        number: u8,
    },
}
impl fmt::Display for RuleSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::U { bits } => {
                write!(f, "U")?;
                for &bit in bits {
                    write!(f, " {}", bit as u8)?;
                }
                Ok(())
            }
            Self::R { number } => write!(f, "R {}", number),
        }
    }
}

/// Reduces any rule syntax to its Wolfram rule number.
///
/// Bit `i` of a `U` rule is bit `i` of the number, so `U 0 1 1 1 1 0 0 0` is
/// rule 30.
pub fn resolve_rule_number(syntax: &RuleSyntax) -> u8 {
    match syntax {
        RuleSyntax::A => RULE_A_NUMBER,
        RuleSyntax::B => RULE_B_NUMBER,
        RuleSyntax::U { bits } => bits
            .iter()
            .enumerate()
            .fold(0, |number, (i, &bit)| number | (bit as u8) << i),
        RuleSyntax::R { number } => *number,
    }
}

/// Rule as written in the input, along with its resolved rule number.
///
/// The only way to construct a `Rule` is from its syntax, so the number is
/// always consistent with it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rule {
    syntax: RuleSyntax,
    number: u8,
}
impl Rule {
    /// Constructs a rule and resolves its number.
    pub fn new(syntax: RuleSyntax) -> Self {
        Self {
            number: resolve_rule_number(&syntax),
            syntax,
        }
    }
    /// Returns the syntax this rule was written with.
    pub fn syntax(self) -> RuleSyntax {
        self.syntax
    }
    /// Returns the Wolfram rule number.
    pub fn number(self) -> u8 {
        self.number
    }
}
impl From<RuleSyntax> for Rule {
    fn from(syntax: RuleSyntax) -> Self {
        Self::new(syntax)
    }
}
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.syntax)
    }
}
