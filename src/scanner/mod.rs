//! Functionality for converting a source string into a [`Token`] stream.
mod char_ext;
mod char_lexer;
mod classifiers;
mod error;
mod scanner;

pub mod navigator;
pub mod tokens;

pub use char_ext::CharExt;
pub use classifiers::*;
pub use error::*;
pub use scanner::*;
pub use tokens::{Token, TokenKind};
