//! Byte spans into the input text, used to point error messages at the
//! offending token.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A regex pattern that matches linebreaks.
    ///
    /// Note that `^` or `$` only match '\n' in Rust, so that is insufficient.
    static ref NEWLINE_PATTERN: Regex = Regex::new("\r\n?|\n").unwrap();
}

/// The 1-indexed line and column number of a given byte index in a string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextPoint(pub usize, pub usize);
impl TextPoint {
    /// Finds the line and column number of the given byte index in the given
    /// string.
    pub fn from_idx(s: &str, idx: usize) -> Self {
        let (line_number, line_start_idx) = NEWLINE_PATTERN
            // Find all linebreaks.
            .find_iter(s)
            // The nth linebreak starts line (n+2), counting the first line of
            // the string as line 1.
            .enumerate()
            .map(|(line_num, regex_match)| (line_num + 2, regex_match.end()))
            // Ignore any lines after the desired index.
            .take_while(|&(_, line_start_idx)| line_start_idx <= idx)
            .last()
            // If the index occurs before any linebreaks, then this is the first
            // line and the index of the start of this line is 0.
            .unwrap_or((1, 0));
        // The first column is numbered 1.
        let column_number = idx - line_start_idx + 1;
        Self(line_number, column_number)
    }
    /// Returns the 1-indexed line number of this text point.
    pub fn line(self) -> usize {
        self.0
    }
    /// Returns the 1-indexed column number of this text point.
    pub fn column(self) -> usize {
        self.1
    }
}

/// Returns the 1-indexed line of the given string, without its linebreak.
pub fn source_line(s: &str, line_number: usize) -> Option<&str> {
    NEWLINE_PATTERN.split(s).nth(line_number.checked_sub(1)?)
}

/// A contiguous span of text from one byte index to another in a &str.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    /// The byte index of the first character.
    pub start: usize,
    /// The byte index after the last character.
    pub end: usize,
}
impl Span {
    /// Returns a 0-length span at the given index.
    pub fn empty(idx: usize) -> Self {
        Self {
            start: idx,
            end: idx,
        }
    }
    /// Returns a pair of TextPoints representing the start and end of this
    /// span applied to a given &str.
    pub fn textpoints(self, string: &str) -> (TextPoint, TextPoint) {
        (
            TextPoint::from_idx(string, self.start),
            TextPoint::from_idx(string, self.end),
        )
    }
}
impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Any data with an associated span.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    /// The span.
    pub span: Span,
    /// The data.
    pub inner: T,
}
