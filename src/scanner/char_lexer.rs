use std::{iter::Peekable, str::Chars};

use crate::span::{Bytes, Span};

/// Abstraction over a peekable char iterator with position information.
///
/// Keeps a reference to the full source, so consumed ranges can be handed
/// out as slices instead of freshly built strings.
#[derive(Clone)]
pub struct CharLexer<'a> {
    source: &'a str,
    chars: Peekable<Chars<'a>>,
    byte_position: Bytes,
}

impl<'a> CharLexer<'a> {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            byte_position: Bytes::new(0),
        }
    }

    /// Tries to advance the lexer by one character.
    /// Returns [`None`] if the lexer cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.chars.next();
        if let Some(ch) = next {
            self.byte_position += ch.len_utf8();
        }
        next
    }

    /// Returns the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    pub fn byte_position(&self) -> Bytes {
        self.byte_position
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns the number of characters consumed.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.chars.peek() {
            if !predicate(ch) {
                break;
            }
            self.try_next();
            count += 1;
        }
        count
    }

    /// The span between `start` and the current position.
    pub fn span_from(&self, start: Bytes) -> Span {
        Span::new(start, self.byte_position)
    }

    /// The source text between `start` and the current position.
    pub fn slice_from(&self, start: Bytes) -> &'a str {
        self.span_from(start).lookup(self.source)
    }

    pub fn is_finished(&mut self) -> bool {
        self.peek().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_position_advances_by_utf8_width() {
        let mut lexer = CharLexer::new("é!");

        assert_eq!(lexer.try_next(), Some('é'));
        assert_eq!(lexer.byte_position(), Bytes::new(2));
    }

    #[test]
    fn consume_while_stops_at_first_mismatch() {
        let mut lexer = CharLexer::new("aaab");

        assert_eq!(lexer.consume_while(|&c| c == 'a'), 3);
        assert_eq!(lexer.peek(), Some('b'));
        assert_eq!(lexer.slice_from(Bytes::new(0)), "aaa");
    }

    #[test]
    fn try_next_at_end_of_input() {
        let mut lexer = CharLexer::new("");

        assert!(lexer.is_finished());
        assert_eq!(lexer.try_next(), None);
        assert_eq!(lexer.byte_position(), Bytes::new(0));
    }
}
