//! Tokens, as produced by the scanner.
use std::fmt::{self, Display};

use crate::span::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub source: Span,
}
impl Token {
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// The text with its first and last character removed.
    ///
    /// Meant for [`TokenKind::Quoted`] tokens. An unterminated quote loses its
    /// final content character instead of a closing quote, and tokens shorter
    /// than two characters yield an empty string.
    pub fn unquoted(&self) -> &str {
        let mut chars = self.text.chars();
        if chars.next().is_none() || chars.next_back().is_none() {
            return "";
        }
        chars.as_str()
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Digits and dots, starting with a digit.
    Numeric,
    Identifier,
    /// A single operator character.
    Operator,
    /// A quoted string, quotes included.
    Quoted,
    /// A maximal run of whitespace.
    Whitespace,
}
