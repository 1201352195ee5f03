//! The character predicates that decide identifier, operator and whitespace boundaries.
use super::char_ext::CharExt;

/// A character predicate.
pub type Classifier = fn(&char) -> bool;

/// The four character classes the scanner consults.
///
/// The defaults implement ASCII rules. Replace any subset to scan a dialect
/// without touching the scanning loop:
///
/// ```
/// use stokenizer::scanner::Classifiers;
///
/// let dialect = Classifiers {
///     is_identifier_continue: |c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$',
///     ..Classifiers::default()
/// };
/// # let _ = dialect;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Classifiers {
    pub is_identifier_start: Classifier,
    pub is_identifier_continue: Classifier,
    pub is_operator: Classifier,
    pub is_whitespace: Classifier,
}

impl Default for Classifiers {
    fn default() -> Self {
        Self {
            is_identifier_start: <char as CharExt>::is_identifier_start,
            is_identifier_continue: <char as CharExt>::is_identifier_continue,
            is_operator: <char as CharExt>::is_operator,
            is_whitespace: <char as CharExt>::is_scanner_whitespace,
        }
    }
}
