//! Structured description of an automaton, as parsed from the input.

use std::fmt;

mod rule;

pub use rule::*;

/// Grid width and number of generations to produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Size {
    /// Number of cells in each generation.
    pub width: usize,
    /// Number of generations to produce, including the initial one.
    pub generations: usize,
}

/// Initially live cells.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Init {
    /// 1-based column indices, in input order. Duplicates are allowed.
    pub cells: Vec<i64>,
}

/// Complete description of an automaton run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Transition rule.
    pub rule: Rule,
    /// Grid width and generation count.
    pub size: Size,
    /// Initially live cells.
    pub init: Init,
}
impl fmt::Display for Input {
    /// Writes the input in the same form that `parse()` accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} init_start",
            self.rule, self.size.width, self.size.generations,
        )?;
        for cell in &self.init.cells {
            write!(f, " {}", cell)?;
        }
        write!(f, " init_end")
    }
}
