//! Functionality for mapping byte positions back to lines of the scanned text.
use std::iter;

use crate::{
    error::PositionalError,
    span::{Bytes, Span},
};

/// Finds the line containing `target_position`.
/// Returns [`None`] if the position lies beyond the end of `source`.
pub fn find_line(source: &str, target_position: Bytes) -> Option<LineContext> {
    let lines = split_lines_inclusive(source);
    let line_count = lines.len();

    let mut position = Bytes::new(0);
    for (line_idx, line) in lines.into_iter().enumerate() {
        let end_position = position + line.len();
        // A position at the very end of the source still belongs to the last line.
        let is_last = line_idx + 1 == line_count;
        if target_position >= position
            && (target_position < end_position || (is_last && target_position == end_position))
        {
            return Some(LineContext {
                source: line,
                range: Span::new(position, end_position),
                line_no: line_idx + 1,
            });
        }
        position = end_position;
    }

    None
}

/// Splits `source` into lines, keeping the line terminators.
/// `\n`, `\r` and `\r\n` are all recognised as a single terminator.
fn split_lines_inclusive(source: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut start = 0;
    let mut position = 0;

    let mut chars = source.chars().peekable();
    while let Some(ch) = chars.next() {
        position += ch.len_utf8();

        // Delay a \r that starts a \r\n pair until the \n is seen.
        if ch == '\n' || (ch == '\r' && chars.peek() != Some(&'\n')) {
            lines.push(&source[start..position]);
            start = position;
        }
    }
    lines.push(&source[start..position]);

    lines
}

/// A slice pointing to a single line of the source,
/// along with its line number and byte range.
pub struct LineContext<'a> {
    source: &'a str,
    range: Span,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Number of characters between the start of the line and `position`.
    pub fn column_of(&self, position: Bytes) -> usize {
        let offset: usize = (position - self.range.start()).into();
        self.source[..offset.min(self.source.len())].chars().count()
    }
}

/// Renders `err` as a gutter-prefixed source line with a caret underline.
pub fn render_error<E: PositionalError>(err: &E, source: &str) -> String {
    fn repeat(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let range = err.range();
    let Some(line) = find_line(source, range.start()) else {
        return err.describe();
    };

    let gutter = line.line_no().to_string();
    let padding = line.column_of(range.start());
    let width = range.lookup(source).chars().count().max(1);

    format!(
        "{}| {}\n{}| {}{} {}",
        gutter,
        line.for_display(),
        repeat(' ', gutter.len()),
        repeat(' ', padding),
        repeat('^', width),
        err.describe()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeError(Span);
    impl PositionalError for FakeError {
        fn range(&self) -> Span {
            self.0
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    #[test]
    pub fn find_line_in_empty_source() {
        let context = find_line("", Bytes::new(0)).expect("position 0 is always valid");

        assert_eq!(context.line_no(), 1);
        assert_eq!(context.range, Span::new(Bytes::new(0), Bytes::new(0)));
        assert_eq!(context.for_display(), "");
    }

    #[test]
    pub fn find_line_first_character_of_single_line() {
        let context = find_line("abc", Bytes::new(0)).unwrap();

        assert_eq!(context.line_no(), 1);
        assert_eq!(context.range, Span::new(Bytes::new(0), Bytes::new(3)));
    }

    #[test]
    pub fn find_line_first_character_of_next_line() {
        let context = find_line("abc\ndef", Bytes::new(5)).unwrap();

        assert_eq!(context.line_no(), 2);
        assert_eq!(context.range, Span::new(Bytes::new(4), Bytes::new(7)));
        assert_eq!(context.for_display(), "def");
    }

    #[test]
    pub fn find_line_past_the_end() {
        assert!(find_line("abc", Bytes::new(9)).is_none());
    }

    #[test]
    pub fn split_lines_mixed_endings() {
        let lines = split_lines_inclusive("abc\r\nd\r\n\ne\rf");

        assert_eq!(vec!["abc\r\n", "d\r\n", "\n", "e\r", "f"], lines)
    }

    #[test]
    pub fn column_counts_characters_not_bytes() {
        let context = find_line("é+x", Bytes::new(3)).unwrap();

        assert_eq!(context.column_of(Bytes::new(3)), 2);
    }

    #[test]
    pub fn render_error_underlines_the_range() {
        let err = FakeError(Span::new(Bytes::new(8), Bytes::new(9)));

        let rendered = render_error(&err, "a = 1\nb ? 2");

        assert_eq!(rendered, "2| b ? 2\n |   ^ broken");
    }

    #[test]
    pub fn render_error_underlines_characters_not_bytes() {
        let err = FakeError(Span::new(Bytes::new(2), Bytes::new(4)));

        let rendered = render_error(&err, "a é b");

        assert_eq!(rendered, "1| a é b\n |   ^ broken");
    }
}
