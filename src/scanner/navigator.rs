//! Helpers for walking a scanned token stream while ignoring whitespace.
use super::{error::NavigationError, tokens::Token};

/// Returns the first non-whitespace token at or after `index`, along with its index.
pub fn skip_whitespace(tokens: &[Token], index: usize) -> Result<(&Token, usize), NavigationError> {
    tokens
        .iter()
        .enumerate()
        .skip(index)
        .find(|(_, token)| !token.is_whitespace())
        .map(|(at, token)| (token, at))
        .ok_or(NavigationError::OutOfBounds {
            index,
            len: tokens.len(),
        })
}

/// Moves past the token at `index`, then skips whitespace.
pub fn advance(tokens: &[Token], index: usize) -> Result<(&Token, usize), NavigationError> {
    match index.checked_add(1) {
        Some(next) => skip_whitespace(tokens, next),
        None => Err(NavigationError::OutOfBounds {
            index,
            len: tokens.len(),
        }),
    }
}

/// The first non-whitespace token of the stream.
pub fn first(tokens: &[Token]) -> Result<(&Token, usize), NavigationError> {
    skip_whitespace(tokens, 0)
}
