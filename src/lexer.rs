//! Token enum and tokenizer.
//!
//! The input language separates every token with whitespace, so the lexer only
//! distinguishes runs of whitespace from runs of anything else. Grammar rules
//! classify each word by its text.

use logos::Logos;

use crate::span::Spanned;

/// Words that spell a single bit.
pub const BIT_WORDS: &[(&str, bool)] = &[
    ("0", false),
    ("1", true),
    ("false", false),
    ("true", true),
];

/// Class of a token.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// Unrecognized input.
    #[error]
    Error,

    /// Run of spaces, tabs, and linebreaks.
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Run of anything else.
    #[regex(r"[^ \t\r\n]+")]
    Word,
}
impl Token {
    /// Returns whether the parser should skip this token.
    pub fn is_skip(self) -> bool {
        matches!(self, Token::Whitespace)
    }
}

/// Splits a string into tokens, including whitespace.
pub fn tokenize(src: &str) -> Vec<Spanned<Token>> {
    Token::lexer(src)
        .spanned()
        .map(|(token, range)| Spanned {
            span: range.into(),
            inner: token,
        })
        .collect()
}

/// Returns whether a word is an unsigned decimal integer, such as `42`.
pub fn is_unsigned_int(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Returns whether a word is a signed decimal integer, such as `-42` or `42`.
pub fn is_signed_int(word: &str) -> bool {
    is_unsigned_int(word.strip_prefix('-').unwrap_or(word))
}

/// Returns the value of a bit word, or `None` if it isn't one.
pub fn bit_value(word: &str) -> Option<bool> {
    BIT_WORDS
        .iter()
        .find(|&&(s, _)| s == word)
        .map(|&(_, value)| value)
}
