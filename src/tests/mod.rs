//! Black-box test suite.

mod parse;
mod rules;

use crate::{parse, Error, ErrorKind, ErrorMsg, Init, Input, Rule, RuleSyntax, Size};

/// Parses the source code, panicking with a readable diagnostic on failure.
fn parse_ok(source_code: &str) -> Input {
    parse(source_code).unwrap_or_else(|e| {
        panic!(
            "\n\nFailed to parse:\n{}\n\n{}\n",
            source_code,
            e.with_source(source_code),
        )
    })
}

/// Parses the source code, panicking if it succeeds.
fn parse_err(source_code: &str) -> Error {
    match parse(source_code) {
        Ok(input) => panic!(
            "\n\nExpected an error, but parsed:\n{}\n\nas {:?}\n",
            source_code, input,
        ),
        Err(e) => e,
    }
}

/// Asserts that parsing fails with the given kind, byte offset, and message.
fn assert_parse_error(source_code: &str, kind: ErrorKind, offset: usize, msg: ErrorMsg) {
    let e = parse_err(source_code);
    assert_eq!(
        (kind, Some(offset), msg),
        (e.kind(), e.offset(), e.msg.clone()),
        "\n\nInput:\n{}\n\nError:\n{}\n",
        source_code,
        e.with_source(source_code),
    );
}

/// Returns an input using rule number `rule_number`.
fn make_input(rule_number: u8, width: usize, generations: usize, cells: &[i64]) -> Input {
    Input {
        rule: Rule::new(RuleSyntax::R {
            number: rule_number,
        }),
        size: Size { width, generations },
        init: Init {
            cells: cells.to_vec(),
        },
    }
}

/// Returns a generation from a string of `*` and ` `.
fn gen_from_str(s: &str) -> crate::Generation {
    s.chars().map(|c| c == '*').collect::<Vec<bool>>().into()
}
