//! Elementary cellular automaton library.
//!
//! Parses a textual description of a one-dimensional, two-state, radius-1
//! automaton and produces its generations.
//!
//! ```
//! let input = eca::parse("R 90 5 3 init_start 3 init_end").unwrap();
//! let rows: Vec<String> = eca::run(input)
//!     .unwrap()
//!     .map(|generation| generation.to_string())
//!     .collect();
//! assert_eq!(rows, vec!["  *  ", " * * ", "*   *"]);
//! ```

#![warn(missing_docs)]

#[macro_use]
mod utils;
#[macro_use]
mod errors;
pub mod ast;
pub mod automaton;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::{resolve_rule_number, Init, Input, Rule, RuleSyntax, Size};
pub use automaton::{init_generation, next_generation, run, Generation, Generations};
pub use errors::{Error, ErrorKind, ErrorMsg, ErrorWithSource, Result};
pub use parser::parse;
pub use span::{Span, Spanned};

#[cfg(test)]
mod tests;
