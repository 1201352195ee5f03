//! Default character classes used by the scanner.
pub trait CharExt {
    fn is_identifier_start(&self) -> bool;

    fn is_identifier_continue(&self) -> bool;

    fn is_operator(&self) -> bool;

    fn is_scanner_whitespace(&self) -> bool;

    fn is_quote(&self) -> bool;

    fn is_numeric_continue(&self) -> bool;
}
impl CharExt for char {
    fn is_identifier_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '_'
    }

    fn is_identifier_continue(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_'
    }

    fn is_operator(&self) -> bool {
        if self.is_quote() || *self == '_' {
            return false;
        }
        self.is_ascii_punctuation() || matches!(self, '<' | '>' | '/')
    }

    fn is_scanner_whitespace(&self) -> bool {
        matches!(self, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
    }

    fn is_quote(&self) -> bool {
        matches!(self, '"' | '\'' | '`')
    }

    fn is_numeric_continue(&self) -> bool {
        self.is_ascii_digit() || *self == '.'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_never_start_with_a_digit() {
        assert!('a'.is_identifier_start());
        assert!('_'.is_identifier_start());
        assert!(!'7'.is_identifier_start());
        assert!('7'.is_identifier_continue());
    }

    #[test]
    fn quotes_and_underscore_are_not_operators() {
        for ch in ['"', '\'', '`', '_'] {
            assert!(!ch.is_operator(), "{:?} should not be an operator", ch);
        }
    }

    #[test]
    fn all_other_ascii_punctuation_is_an_operator() {
        for ch in "!#$%&()*+,-./:;<=>?@[\\]^{|}~".chars() {
            assert!(ch.is_operator(), "{:?} should be an operator", ch);
        }
    }

    #[test]
    fn non_ascii_is_unclassified() {
        for ch in ['é', 'λ', '\u{a0}', '\0'] {
            assert!(!ch.is_identifier_start());
            assert!(!ch.is_operator());
            assert!(!ch.is_scanner_whitespace());
        }
    }

    #[test]
    fn vertical_tab_and_form_feed_are_whitespace() {
        assert!('\x0b'.is_scanner_whitespace());
        assert!('\x0c'.is_scanner_whitespace());
    }
}
