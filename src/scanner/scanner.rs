//! Single-pass conversion of a source string into a [`Token`] stream.
use log::{debug, trace};

use crate::span::Bytes;

use super::{char_ext::*, char_lexer::*, classifiers::*, error::*, tokens::*};

struct Scanner<'s> {
    lexer: CharLexer<'s>,
    classifiers: Classifiers,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

/// Scans `source` into tokens using the given character classes.
///
/// Unterminated quotes are not errors: the quoted token runs to the end of
/// the input. A character that fits no class is reported as a [`ScanError`];
/// scanning continues after it so that every such character is reported.
pub fn scan(source: &str, classifiers: &Classifiers) -> Result<Vec<Token>, Vec<ScanError>> {
    Scanner::new(source, *classifiers).run()
}

/// Scans `source` with [`Classifiers::default`].
pub fn scan_default(source: &str) -> Result<Vec<Token>, Vec<ScanError>> {
    scan(source, &Classifiers::default())
}

impl<'s> Scanner<'s> {
    fn new(source: &'s str, classifiers: Classifiers) -> Self {
        Self {
            lexer: CharLexer::new(source),
            classifiers,
            tokens: vec![],
            errors: vec![],
        }
    }

    fn run(mut self) -> Result<Vec<Token>, Vec<ScanError>> {
        while self.step() {}

        debug!(
            "Scanned {} bytes into {} tokens ({} errors)",
            self.lexer.byte_position(),
            self.tokens.len(),
            self.errors.len()
        );

        if !self.errors.is_empty() {
            Err(self.errors)
        } else {
            Ok(self.tokens)
        }
    }

    /// Consumes leading whitespace and at most one lexeme.
    /// Returns `false` once the end of the input has been reached.
    fn step(&mut self) -> bool {
        self.whitespace();

        if self.lexer.is_finished() {
            return false;
        }

        let start = self.lexer.byte_position();
        let kind = self
            .numeric()
            .or_else(|| self.quoted())
            .or_else(|| self.identifier())
            .or_else(|| self.operator());

        match kind {
            Some(kind) => self.push_token(start, kind),
            None => self.unrecognised(start),
        }
        true
    }

    fn whitespace(&mut self) {
        let start = self.lexer.byte_position();
        if self.lexer.consume_while(self.classifiers.is_whitespace) > 0 {
            self.push_token(start, TokenKind::Whitespace);
        }
    }

    /// A digit followed by any run of digits and dots. No format checking
    /// happens here, so `1.2.3` is a single token.
    fn numeric(&mut self) -> Option<TokenKind> {
        self.lexer.peek().filter(char::is_ascii_digit)?;
        self.lexer.consume_while(CharExt::is_numeric_continue);
        Some(TokenKind::Numeric)
    }

    /// Everything up to and including the next unescaped copy of the opening
    /// quote, or up to the end of the input if there is none.
    fn quoted(&mut self) -> Option<TokenKind> {
        let quote = self.lexer.peek().filter(CharExt::is_quote)?;
        self.lexer.try_next();

        let mut escaped = false;
        while let Some(ch) = self.lexer.try_next() {
            if ch == quote && !escaped {
                break;
            }
            escaped = ch == '\\' && !escaped;
        }
        Some(TokenKind::Quoted)
    }

    fn identifier(&mut self) -> Option<TokenKind> {
        self.lexer.peek().filter(self.classifiers.is_identifier_start)?;
        self.lexer.try_next();
        self.lexer.consume_while(self.classifiers.is_identifier_continue);
        Some(TokenKind::Identifier)
    }

    /// Operators are always a single character.
    fn operator(&mut self) -> Option<TokenKind> {
        self.lexer.peek().filter(self.classifiers.is_operator)?;
        self.lexer.try_next();
        Some(TokenKind::Operator)
    }

    fn unrecognised(&mut self, start: Bytes) {
        if let Some(ch) = self.lexer.try_next() {
            let error = ScanError {
                span: self.lexer.span_from(start),
                error_type: ErrorType::UnrecognisedCharacter(ch),
            };
            trace!("Rejected {:?} at {:?}", ch, error.span);
            self.errors.push(error);
        }
    }

    fn push_token(&mut self, start: Bytes, kind: TokenKind) {
        let token = Token {
            text: self.lexer.slice_from(start).to_string(),
            kind,
            source: self.lexer.span_from(start),
        };
        trace!("{} at {:?}", token, token.source);
        self.tokens.push(token);
    }
}
