// position.rs - "line.column" text indices and their mapping onto a rope

use ropey::Rope;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A position in the text: 1-based line, 0-based character column.
///
/// Formats as `"line.column"`, the scheme persisted in `.rte` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextIndex {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid text index {0:?}, expected \"line.column\"")]
pub struct ParseIndexError(pub String);

impl TextIndex {
    pub const START: TextIndex = TextIndex { line: 1, column: 0 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Index of the character at `offset` (clamped to the end of the text)
    pub fn from_char_offset(rope: &Rope, offset: usize) -> Self {
        let offset = offset.min(rope.len_chars());
        let line_idx = rope.char_to_line(offset);
        let column = offset - rope.line_to_char(line_idx);
        Self {
            line: line_idx + 1,
            column,
        }
    }

    /// Char offset of this index, clamped the way a text widget clamps:
    /// lines past the end map to the end of the text, columns past the
    /// end of a line map to the end of that line.
    pub fn to_char_offset(self, rope: &Rope) -> usize {
        let line_idx = self.line.saturating_sub(1);
        if line_idx >= rope.len_lines() {
            return rope.len_chars();
        }
        let start = rope.line_to_char(line_idx);
        start + self.column.min(line_content_len(rope, line_idx))
    }
}

/// Number of chars on a line, excluding its line break
fn line_content_len(rope: &Rope, line_idx: usize) -> usize {
    let start = rope.line_to_char(line_idx);
    if line_idx + 1 >= rope.len_lines() {
        return rope.len_chars() - start;
    }
    rope.line_to_char(line_idx + 1) - 1 - start
}

impl Default for TextIndex {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for TextIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.line, self.column)
    }
}

impl FromStr for TextIndex {
    type Err = ParseIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseIndexError(s.to_string());
        let (line, column) = s.split_once('.').ok_or_else(err)?;
        if line.is_empty() || column.is_empty() {
            return Err(err());
        }
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !digits(line) || !digits(column) {
            return Err(err());
        }
        Ok(TextIndex {
            line: line.parse().map_err(|_| err())?,
            column: column.parse().map_err(|_| err())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display_and_parse() {
        let index = TextIndex::new(3, 14);
        assert_eq!(index.to_string(), "3.14");
        assert_eq!("3.14".parse::<TextIndex>().unwrap(), index);
        assert_eq!("1.0".parse::<TextIndex>().unwrap(), TextIndex::START);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "1", "1.", ".0", "a.b", "1.2.3", "-1.0", "1.+2", " 1.0"] {
            assert!(bad.parse::<TextIndex>().is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn test_offset_conversion() {
        let rope = Rope::from_str("hello\nworld\n");
        assert_eq!(TextIndex::from_char_offset(&rope, 0), TextIndex::new(1, 0));
        assert_eq!(TextIndex::from_char_offset(&rope, 5), TextIndex::new(1, 5));
        assert_eq!(TextIndex::from_char_offset(&rope, 6), TextIndex::new(2, 0));
        assert_eq!(TextIndex::from_char_offset(&rope, 12), TextIndex::new(3, 0));
        assert_eq!(TextIndex::new(2, 3).to_char_offset(&rope), 9);
    }

    #[test]
    fn test_offset_clamping() {
        let rope = Rope::from_str("ab\ncd");
        // Column past the end of line 1 stops before the newline
        assert_eq!(TextIndex::new(1, 99).to_char_offset(&rope), 2);
        // Line past the end clamps to the end of the text
        assert_eq!(TextIndex::new(10, 0).to_char_offset(&rope), 5);
        // Line 0 behaves like line 1
        assert_eq!(TextIndex::new(0, 1).to_char_offset(&rope), 1);
        assert_eq!(TextIndex::from_char_offset(&rope, 100), TextIndex::new(2, 2));
    }

    #[test]
    fn test_only_newline_ends_a_line() {
        // "\r" is an ordinary character: "ab\r" is line 1
        let rope = Rope::from_str("ab\r\ncd");
        assert_eq!(rope.len_lines(), 2);
        assert_eq!(TextIndex::new(1, 5).to_char_offset(&rope), 3);
        assert_eq!(TextIndex::new(2, 1).to_char_offset(&rope), 5);
        assert_eq!(TextIndex::from_char_offset(&rope, 3), TextIndex::new(1, 3));

        let rope = Rope::from_str("a\x0cb\nc");
        assert_eq!(TextIndex::new(2, 0).to_char_offset(&rope), 4);

        let rope = Rope::from_str("a\u{2028}b\x0bc\nd");
        assert_eq!(TextIndex::new(1, 5).to_char_offset(&rope), 5);
        assert_eq!(TextIndex::new(2, 0).to_char_offset(&rope), 6);
    }

    #[test]
    fn test_boundary_between_cr_and_lf_round_trips() {
        let rope = Rope::from_str("a\r\nb");
        let index = TextIndex::from_char_offset(&rope, 2);
        assert_eq!(index, TextIndex::new(1, 2));
        assert_eq!(index.to_char_offset(&rope), 2);
    }

    #[test]
    fn test_multibyte_columns_count_chars() {
        let rope = Rope::from_str("héllo wörld");
        let index = TextIndex::from_char_offset(&rope, 7);
        assert_eq!(index, TextIndex::new(1, 7));
        assert_eq!(index.to_char_offset(&rope), 7);
    }

    proptest! {
        #[test]
        fn offsets_round_trip(
            text in "[a-zé\\r\\n\\f\\x{0b}\\x{2028}]{0,60}",
            offset in 0usize..80
        ) {
            let rope = Rope::from_str(&text);
            let offset = offset.min(rope.len_chars());
            let index = TextIndex::from_char_offset(&rope, offset);
            prop_assert_eq!(index.to_char_offset(&rope), offset);
            prop_assert_eq!(index.to_string().parse::<TextIndex>().unwrap(), index);
        }
    }
}
