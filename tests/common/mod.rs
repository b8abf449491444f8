// Common helpers for session and document tests

use rte::document::{StyledDocument, TagRange};
use rte::position::TextIndex;
use rte::session::EditorSession;
use std::path::{Path, PathBuf};

pub fn idx(line: usize, column: usize) -> TextIndex {
    TextIndex::new(line, column)
}

#[allow(dead_code)]
pub fn range(start: (usize, usize), end: (usize, usize)) -> TagRange {
    TagRange::new(idx(start.0, start.1), idx(end.0, end.1))
}

/// Session holding `text`, with `tag` toggled over `start..end`
#[allow(dead_code)]
pub fn session_with_tag(text: &str, tag: &str, start: TextIndex, end: TextIndex) -> EditorSession {
    let mut session = EditorSession::new();
    session.type_text(TextIndex::START, text);
    session.select(start, end);
    session.toggle_tag(tag).unwrap();
    session
}

/// Write raw bytes into `dir/name` and return the path
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Assert the document carries exactly `expected` for `tag`, in any order
#[allow(dead_code)]
pub fn assert_ranges(doc: &StyledDocument, tag: &str, expected: &[TagRange]) {
    let mut actual = doc.ranges(tag).to_vec();
    let mut expected = expected.to_vec();
    actual.sort();
    expected.sort();
    assert_eq!(actual, expected, "ranges for tag {:?}", tag);
}
