// surface.rs - Live editing surface: rope text plus named tag ranges

use crate::catalog::StyleCatalog;
use crate::document::SELECTION_TAG;
use crate::position::TextIndex;
use ropey::Rope;
use std::ops::Range;

#[derive(Debug, Clone)]
struct TagEntry {
    name: String,
    /// Sorted, non-overlapping, non-adjacent char ranges
    ranges: Vec<Range<usize>>,
}

impl TagEntry {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ranges: Vec::new(),
        }
    }

    fn add(&mut self, range: Range<usize>) {
        self.ranges.push(range);
        self.coalesce();
    }

    fn remove(&mut self, cut: Range<usize>) {
        let mut kept = Vec::with_capacity(self.ranges.len() + 1);
        for r in self.ranges.drain(..) {
            if r.end <= cut.start || r.start >= cut.end {
                kept.push(r);
                continue;
            }
            if r.start < cut.start {
                kept.push(r.start..cut.start);
            }
            if r.end > cut.end {
                kept.push(cut.end..r.end);
            }
        }
        self.ranges = kept;
    }

    fn covers(&self, offset: usize) -> bool {
        self.ranges.iter().any(|r| r.contains(&offset))
    }

    fn coalesce(&mut self) {
        self.ranges.retain(|r| r.start < r.end);
        self.ranges.sort_by_key(|r| r.start);
        let mut merged: Vec<Range<usize>> = Vec::with_capacity(self.ranges.len());
        for r in self.ranges.drain(..) {
            if let Some(last) = merged.last_mut()
                && r.start <= last.end
            {
                last.end = last.end.max(r.end);
                continue;
            }
            merged.push(r);
        }
        self.ranges = merged;
    }

    /// Text inserted strictly inside a range joins it; at a boundary it does not.
    fn shift_for_insert(&mut self, at: usize, len: usize) {
        for r in &mut self.ranges {
            if at <= r.start {
                r.start += len;
                r.end += len;
            } else if at < r.end {
                r.end += len;
            }
        }
    }

    fn shift_for_delete(&mut self, cut: Range<usize>) {
        let removed = cut.end - cut.start;
        let map = |x: usize| {
            if x <= cut.start {
                x
            } else if x <= cut.end {
                cut.start
            } else {
                x - removed
            }
        };
        for r in &mut self.ranges {
            *r = map(r.start)..map(r.end);
        }
        self.coalesce();
    }
}

/// Text plus named tag ranges, addressed by `"line.column"` indices.
///
/// The selection is the `sel` tag, which is always defined and comes first
/// in `tag_names()`. Other tags are listed in the order they were defined.
#[derive(Debug, Clone)]
pub struct TextSurface {
    rope: Rope,
    tags: Vec<TagEntry>,
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            tags: vec![TagEntry::new(SELECTION_TAG)],
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut surface = Self::new();
        surface.set_text(text);
        surface
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn index(&self, offset: usize) -> TextIndex {
        TextIndex::from_char_offset(&self.rope, offset)
    }

    pub fn offset(&self, index: TextIndex) -> usize {
        index.to_char_offset(&self.rope)
    }

    pub fn end_index(&self) -> TextIndex {
        self.index(self.rope.len_chars())
    }

    /// Replace all text. Every tag loses its ranges but stays defined.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        for tag in &mut self.tags {
            tag.ranges.clear();
        }
    }

    pub fn insert(&mut self, index: TextIndex, text: &str) {
        let at = self.offset(index);
        let len = text.chars().count();
        if len == 0 {
            return;
        }
        self.rope.insert(at, text);
        for tag in &mut self.tags {
            tag.shift_for_insert(at, len);
        }
    }

    pub fn delete(&mut self, start: TextIndex, end: TextIndex) {
        let start = self.offset(start);
        let end = self.offset(end);
        if start >= end {
            return;
        }
        self.rope.remove(start..end);
        for tag in &mut self.tags {
            tag.shift_for_delete(start..end);
        }
    }

    /// Define a tag with no ranges if it is not known yet
    pub fn define_tag(&mut self, name: &str) {
        if self.entry(name).is_none() {
            self.tags.push(TagEntry::new(name));
        }
    }

    pub fn tag_add(&mut self, name: &str, start: TextIndex, end: TextIndex) {
        let start = self.offset(start);
        let end = self.offset(end);
        self.define_tag(name);
        if start >= end {
            return;
        }
        if let Some(tag) = self.entry_mut(name) {
            tag.add(start..end);
        }
    }

    pub fn tag_remove(&mut self, name: &str, start: TextIndex, end: TextIndex) {
        let start = self.offset(start);
        let end = self.offset(end);
        if start >= end {
            return;
        }
        if let Some(tag) = self.entry_mut(name) {
            tag.remove(start..end);
        }
    }

    /// Forget a tag entirely. The selection tag cannot be deleted.
    pub fn tag_delete(&mut self, name: &str) {
        if name != SELECTION_TAG {
            self.tags.retain(|tag| tag.name != name);
        }
    }

    /// All defined tags, including ones with no ranges
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.name.as_str()).collect()
    }

    /// Tags covering the character at `index`
    pub fn tag_names_at(&self, index: TextIndex) -> Vec<&str> {
        let offset = self.offset(index);
        self.tags
            .iter()
            .filter(|tag| tag.covers(offset))
            .map(|tag| tag.name.as_str())
            .collect()
    }

    pub fn has_tag_at(&self, name: &str, index: TextIndex) -> bool {
        let offset = self.offset(index);
        self.entry(name).is_some_and(|tag| tag.covers(offset))
    }

    /// Flat list of range boundaries: start, end, start, end, ...
    pub fn tag_boundaries(&self, name: &str) -> Vec<TextIndex> {
        self.entry(name)
            .map(|tag| {
                tag.ranges
                    .iter()
                    .flat_map(|r| [self.index(r.start), self.index(r.end)])
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn tag_ranges(&self, name: &str) -> Vec<(TextIndex, TextIndex)> {
        self.tag_boundaries(name)
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    /// First and last selected index, if anything is selected
    pub fn selection(&self) -> Option<(TextIndex, TextIndex)> {
        let sel = self.entry(SELECTION_TAG)?;
        let first = sel.ranges.first()?;
        let last = sel.ranges.last()?;
        Some((self.index(first.start), self.index(last.end)))
    }

    pub fn set_selection(&mut self, start: TextIndex, end: TextIndex) {
        self.clear_selection();
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.tag_add(SELECTION_TAG, start, end);
    }

    pub fn clear_selection(&mut self) {
        if let Some(sel) = self.entry_mut(SELECTION_TAG) {
            sel.ranges.clear();
        }
    }

    /// Strip every range from every tag, then make sure each catalog key is defined
    pub fn reset_tags(&mut self, catalog: &StyleCatalog) {
        for tag in &mut self.tags {
            tag.ranges.clear();
        }
        for key in catalog.keys() {
            self.define_tag(key);
        }
    }

    fn entry(&self, name: &str) -> Option<&TagEntry> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut TagEntry> {
        self.tags.iter_mut().find(|tag| tag.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(line: usize, column: usize) -> TextIndex {
        TextIndex::new(line, column)
    }

    #[test]
    fn test_new_surface_has_selection_tag() {
        let surface = TextSurface::new();
        assert_eq!(surface.tag_names(), vec![SELECTION_TAG]);
        assert!(surface.selection().is_none());
        assert_eq!(surface.end_index(), TextIndex::START);
    }

    #[test]
    fn test_tag_add_coalesces() {
        let mut surface = TextSurface::from_text("Hello world");
        surface.tag_add("bold", idx(1, 0), idx(1, 3));
        surface.tag_add("bold", idx(1, 3), idx(1, 5));
        surface.tag_add("bold", idx(1, 8), idx(1, 11));
        assert_eq!(
            surface.tag_ranges("bold"),
            vec![(idx(1, 0), idx(1, 5)), (idx(1, 8), idx(1, 11))]
        );
        surface.tag_add("bold", idx(1, 4), idx(1, 9));
        assert_eq!(surface.tag_ranges("bold"), vec![(idx(1, 0), idx(1, 11))]);
    }

    #[test]
    fn test_tag_remove_splits() {
        let mut surface = TextSurface::from_text("Hello world");
        surface.tag_add("italic", idx(1, 0), idx(1, 11));
        surface.tag_remove("italic", idx(1, 5), idx(1, 6));
        assert_eq!(
            surface.tag_boundaries("italic"),
            vec![idx(1, 0), idx(1, 5), idx(1, 6), idx(1, 11)]
        );
        assert!(!surface.has_tag_at("italic", idx(1, 5)));
        assert!(surface.has_tag_at("italic", idx(1, 6)));
    }

    #[test]
    fn test_empty_add_still_defines_tag() {
        let mut surface = TextSurface::from_text("abc");
        surface.tag_add("code", idx(1, 2), idx(1, 2));
        assert!(surface.tag_names().contains(&"code"));
        assert!(surface.tag_ranges("code").is_empty());
    }

    #[test]
    fn test_insert_inside_range_extends_it() {
        let mut surface = TextSurface::from_text("abcdef");
        surface.tag_add("bold", idx(1, 1), idx(1, 4));
        surface.insert(idx(1, 2), "XY");
        assert_eq!(surface.text(), "abXYcdef");
        assert_eq!(surface.tag_ranges("bold"), vec![(idx(1, 1), idx(1, 6))]);
    }

    #[test]
    fn test_insert_at_boundary_does_not_extend() {
        let mut surface = TextSurface::from_text("abcdef");
        surface.tag_add("bold", idx(1, 1), idx(1, 4));
        surface.insert(idx(1, 1), "<");
        surface.insert(idx(1, 5), ">");
        assert_eq!(surface.text(), "a<bcd>ef");
        assert_eq!(surface.tag_ranges("bold"), vec![(idx(1, 2), idx(1, 5))]);
    }

    #[test]
    fn test_insert_newline_moves_ranges_to_next_line() {
        let mut surface = TextSurface::from_text("abc def");
        surface.tag_add("bold", idx(1, 4), idx(1, 7));
        surface.insert(idx(1, 3), "\n");
        assert_eq!(surface.tag_ranges("bold"), vec![(idx(2, 1), idx(2, 4))]);
    }

    #[test]
    fn test_delete_shrinks_and_drops_ranges() {
        let mut surface = TextSurface::from_text("0123456789");
        surface.tag_add("bold", idx(1, 2), idx(1, 4));
        surface.tag_add("italic", idx(1, 3), idx(1, 8));
        surface.delete(idx(1, 1), idx(1, 5));
        assert_eq!(surface.text(), "056789");
        assert!(surface.tag_ranges("bold").is_empty());
        assert_eq!(surface.tag_ranges("italic"), vec![(idx(1, 1), idx(1, 4))]);
    }

    #[test]
    fn test_delete_joins_neighbouring_ranges() {
        let mut surface = TextSurface::from_text("aaXbb");
        surface.tag_add("bold", idx(1, 0), idx(1, 2));
        surface.tag_add("bold", idx(1, 3), idx(1, 5));
        surface.delete(idx(1, 2), idx(1, 3));
        assert_eq!(surface.tag_ranges("bold"), vec![(idx(1, 0), idx(1, 4))]);
    }

    #[test]
    fn test_tag_names_at() {
        let mut surface = TextSurface::from_text("Hello");
        surface.tag_add("bold", idx(1, 0), idx(1, 2));
        surface.tag_add("code", idx(1, 1), idx(1, 5));
        assert_eq!(surface.tag_names_at(idx(1, 1)), vec!["bold", "code"]);
        assert_eq!(surface.tag_names_at(idx(1, 2)), vec!["code"]);
        assert!(surface.tag_names_at(idx(1, 5)).is_empty());
    }

    #[test]
    fn test_selection() {
        let mut surface = TextSurface::from_text("Hello world");
        surface.set_selection(idx(1, 6), idx(1, 0));
        assert_eq!(surface.selection(), Some((idx(1, 0), idx(1, 6))));
        assert!(surface.has_tag_at(SELECTION_TAG, idx(1, 0)));
        surface.set_selection(idx(1, 2), idx(1, 4));
        assert_eq!(surface.selection(), Some((idx(1, 2), idx(1, 4))));
        surface.clear_selection();
        assert!(surface.selection().is_none());
        surface.tag_delete(SELECTION_TAG);
        assert!(surface.tag_names().contains(&SELECTION_TAG));
    }

    #[test]
    fn test_reset_tags_keeps_definitions() {
        let catalog = StyleCatalog::builtin();
        let mut surface = TextSurface::from_text("Hello");
        surface.tag_add("custom", idx(1, 0), idx(1, 5));
        surface.set_selection(idx(1, 0), idx(1, 1));
        surface.reset_tags(&catalog);
        assert!(surface.tag_names().contains(&"custom"));
        assert!(surface.tag_ranges("custom").is_empty());
        assert!(surface.selection().is_none());
        assert_eq!(surface.tag_names().len(), 1 + 1 + catalog.len());
        assert_eq!(surface.tag_names()[0], SELECTION_TAG);
    }

    #[test]
    fn test_set_text_clears_ranges() {
        let mut surface = TextSurface::from_text("one");
        surface.tag_add("bold", idx(1, 0), idx(1, 3));
        surface.set_text("two\nlines");
        assert!(surface.tag_ranges("bold").is_empty());
        assert_eq!(surface.line_count(), 2);
        assert_eq!(surface.end_index(), idx(2, 5));
    }
}
