use crate::span::Span;

/// An error that can be traced back to a byte range in the scanned source.
pub trait PositionalError {
    fn range(&self) -> Span;
    fn describe(&self) -> String;
}
