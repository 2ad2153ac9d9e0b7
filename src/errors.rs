//! Error reporting for parsing and simulation.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use crate::span::{self, Span};

/// `Result` type alias for parse and simulation errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Handles internal errors. Panics in debug mode, but returns a nice error
/// message in release mode so that the program doesn't immediately crash.
macro_rules! internal_error {
    ( $( $args:expr ),+ $(,)? ) => {{
        if cfg!(debug_assertions) {
            panic!($( $args ),+)
        }
        return Err(crate::errors::ErrorMsg::Internal(format!($( $args ),+).into()).without_span());
    }};
}

/// Broad category of an error, for callers that want to react to the kind of
/// failure without matching on every message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input does not match the grammar.
    Syntax,
    /// The input was parsed completely but there is more text after it.
    TrailingInput,
    /// A value is syntactically valid but outside its allowed range.
    OutOfRange,
    /// Bug in this crate.
    Internal,
}

/// Error with the line of source code it occurred on, ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorWithSource {
    /// Line of source code containing the start of the span.
    pub source_line: Option<String>,
    /// Line and column numbers, plus the byte offset, of the span start.
    pub location: Option<(usize, usize, usize)>,
    /// Columns to underline on the source line.
    pub underline: Option<(usize, usize)>,
    /// Error message.
    pub msg: ErrorMsg,
}
impl fmt::Display for ErrorWithSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((line, column, offset)) = self.location {
            writeln!(
                f,
                "Error at line {}; column {} (offset {})",
                line, column, offset,
            )?;
        }
        if let (Some(line), Some((start, end))) = (&self.source_line, self.underline) {
            // Write line of source code.
            writeln!(f, "{}", line)?;
            for _ in 1..start {
                write!(f, " ")?;
            }
            // Write arrows pointing to the part with the error.
            for _ in start..end.max(start + 1) {
                write!(f, "^")?;
            }
            write!(f, "   ")?;
        }
        write!(f, "{}", self.msg)
    }
}
impl StdError for ErrorWithSource {}

/// Error, optionally tagged with the span of input where it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Span of the input text where the error occurred.
    pub span: Option<Span>,
    /// What went wrong.
    pub msg: ErrorMsg,
}
impl Error {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.msg.kind()
    }
    /// Returns the byte offset into the input where the error occurred, if
    /// known.
    pub fn offset(&self) -> Option<usize> {
        self.span.map(|span| span.start)
    }

    /// Attaches the relevant line of source code for display.
    pub fn with_source(self, src: &str) -> ErrorWithSource {
        let span = match self.span {
            Some(span) => span,
            None => {
                return ErrorWithSource {
                    source_line: None,
                    location: None,
                    underline: None,
                    msg: self.msg,
                }
            }
        };
        let (start_tp, end_tp) = span.textpoints(src);
        let start = start_tp.column();
        let mut end = start;
        if start_tp.line() == end_tp.line() && end_tp.column() > start_tp.column() {
            end = end_tp.column();
        }
        ErrorWithSource {
            source_line: span::source_line(src, start_tp.line()).map(str::to_owned),
            location: Some((start_tp.line(), start_tp.column(), span.start)),
            underline: Some((start, end)),
            msg: self.msg,
        }
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "{} (at offset {})", self.msg, span.start),
            None => write!(f, "{}", self.msg),
        }
    }
}
impl StdError for Error {}

/// Description of what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorMsg {
    /// Bug in this crate.
    Internal(Cow<'static, str>),

    /// Input did not match the named grammar element.
    Expected(Cow<'static, str>),
    /// Integer literal could not be represented.
    InvalidInteger(Cow<'static, str>),
    /// Input remains after a complete parse.
    TrailingInput,

    /// Rule number given with `R` is larger than 255.
    RuleNumberOutOfRange(u64),
    /// Grid width is zero, or too large to allocate.
    WidthOutOfRange(usize),
    /// Initially live cell index is outside `1..=width`.
    CellOutOfRange {
        /// 1-based cell index.
        cell: i64,
        /// Grid width.
        width: usize,
    },
}
impl ErrorMsg {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Internal(_) => ErrorKind::Internal,
            Self::Expected(_) | Self::InvalidInteger(_) => ErrorKind::Syntax,
            Self::TrailingInput => ErrorKind::TrailingInput,
            Self::RuleNumberOutOfRange(_)
            | Self::WidthOutOfRange(_)
            | Self::CellOutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    /// Tags the message with the span where it occurred.
    pub fn with_span(self, span: impl Into<Span>) -> Error {
        Error {
            span: Some(span.into()),
            msg: self,
        }
    }
    /// Returns an error with no location.
    pub fn without_span(self) -> Error {
        Error {
            span: None,
            msg: self,
        }
    }
}
impl fmt::Display for ErrorMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal(s) => write!(
                f,
                "Internal error: {}\nThis is a bug in eca, not your input.",
                s,
            ),

            Self::Expected(s) => write!(f, "Expected {}", s),
            Self::InvalidInteger(s) => write!(f, "Invalid integer: {}", s),
            Self::TrailingInput => write!(f, "Unexpected input after 'init_end'"),

            Self::RuleNumberOutOfRange(n) => {
                write!(f, "Rule number {} is out of range; must be 0 to 255", n)
            }
            Self::WidthOutOfRange(w) => {
                write!(
                    f,
                    "Width {} is out of range; must be at least 1 and fit in memory",
                    w,
                )
            }
            Self::CellOutOfRange { cell, width } => write!(
                f,
                "Cell {} is out of range; must be from 1 to {}",
                cell, width,
            ),
        }
    }
}
