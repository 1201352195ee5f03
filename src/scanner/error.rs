//! Errors raised while scanning or navigating a token stream.
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::{error::PositionalError, span::*};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorType {
    #[error("Unrecognised character {0:?}")]
    UnrecognisedCharacter(char),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub struct ScanError {
    pub span: Span,
    pub error_type: ErrorType,
}

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {:?}", self.error_type, self.span)
    }
}

impl PositionalError for ScanError {
    fn range(&self) -> Span {
        self.span
    }

    fn describe(&self) -> String {
        self.error_type.to_string()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No non-whitespace token at or after index {index} (stream has {len} tokens)")]
    OutOfBounds { index: usize, len: usize },
}
