// document.rs - Plain text plus named tag ranges, the unit of persistence

use crate::position::TextIndex;
use std::collections::BTreeMap;

/// Name of the transient selection tag. Never part of a saved document.
pub const SELECTION_TAG: &str = "sel";

/// Span of text a tag applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagRange {
    pub start: TextIndex,
    pub end: TextIndex,
}

impl TagRange {
    pub fn new(start: TextIndex, end: TextIndex) -> Self {
        Self { start, end }
    }

    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }
}

impl From<(TextIndex, TextIndex)> for TagRange {
    fn from((start, end): (TextIndex, TextIndex)) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledDocument {
    pub content: String,
    pub tags: BTreeMap<String, Vec<TagRange>>,
}

impl StyledDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tags: BTreeMap::new(),
        }
    }

    /// Document every save starts from: empty text with one empty `bold` entry
    pub fn template() -> Self {
        let mut doc = Self::default();
        doc.tags.insert("bold".to_string(), Vec::new());
        doc
    }

    pub fn with_tag(mut self, name: &str, ranges: impl IntoIterator<Item = TagRange>) -> Self {
        self.tags
            .entry(name.to_string())
            .or_default()
            .extend(ranges);
        self
    }

    pub fn ranges(&self, name: &str) -> &[TagRange] {
        self.tags.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tag names with at least one range
    pub fn applied_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .filter(|(_, ranges)| !ranges.is_empty())
            .map(|(name, _)| name.as_str())
    }

    /// True if the two documents carry the same text and, per tag, the same
    /// set of ranges regardless of order
    pub fn equivalent(&self, other: &StyledDocument) -> bool {
        if self.content != other.content || self.tags.len() != other.tags.len() {
            return false;
        }
        self.tags.iter().all(|(name, ranges)| {
            other.tags.get(name).is_some_and(|theirs| {
                let mut a = ranges.clone();
                let mut b = theirs.clone();
                a.sort();
                b.sort();
                a == b
            })
        })
    }
}
