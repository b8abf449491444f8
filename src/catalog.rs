// catalog.rs - Fixed table of named style tags and how they render

use crate::color::to_hex_color;

pub const DEFAULT_TEXT_FONT: &str = "Bahnschrift";
pub const DEFAULT_CODE_FONT: &str = "Consolas";
pub const BASE_FONT_SIZE: u16 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlant {
    Roman,
    Italic,
}

/// Rendering directive attached to a tag. Unset fields inherit the surface default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDirective {
    pub font_family: Option<String>,
    pub font_size: Option<u16>,
    pub font_weight: Option<FontWeight>,
    pub font_slant: Option<FontSlant>,
    pub foreground: Option<String>,
    pub background: Option<String>,
}

impl StyleDirective {
    fn font(family: &str, size: u16) -> Self {
        Self {
            font_family: Some(family.to_string()),
            font_size: Some(size),
            ..Default::default()
        }
    }

    fn background(r: u8, g: u8, b: u8) -> Self {
        Self {
            background: Some(to_hex_color(r, g, b)),
            ..Default::default()
        }
    }

    fn foreground(r: u8, g: u8, b: u8) -> Self {
        Self {
            foreground: Some(to_hex_color(r, g, b)),
            ..Default::default()
        }
    }

    /// Font description in the "family size [bold] [italic]" form, if any font field is set
    pub fn font_spec(&self) -> Option<String> {
        let family = self.font_family.as_deref()?;
        let mut spec = family.to_string();
        if let Some(size) = self.font_size {
            spec.push_str(&format!(" {}", size));
        }
        if self.font_weight == Some(FontWeight::Bold) {
            spec.push_str(" bold");
        }
        if self.font_slant == Some(FontSlant::Italic) {
            spec.push_str(" italic");
        }
        Some(spec)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    /// Label shown in the Format menu
    pub name: String,
    /// Lowercased name, the key persisted in documents
    pub key: String,
    pub directive: StyleDirective,
}

impl StyleEntry {
    fn new(name: &str, directive: StyleDirective) -> Self {
        Self {
            name: name.to_string(),
            key: name.to_lowercase(),
            directive,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StyleCatalog {
    entries: Vec<StyleEntry>,
    fallback: StyleDirective,
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StyleCatalog {
    pub fn builtin() -> Self {
        Self::with_fonts(DEFAULT_TEXT_FONT, DEFAULT_CODE_FONT)
    }

    pub fn with_fonts(text_font: &str, code_font: &str) -> Self {
        let bold = StyleDirective {
            font_weight: Some(FontWeight::Bold),
            ..StyleDirective::font(text_font, BASE_FONT_SIZE)
        };
        let italic = StyleDirective {
            font_slant: Some(FontSlant::Italic),
            ..StyleDirective::font(text_font, BASE_FONT_SIZE)
        };
        let code = StyleDirective {
            background: Some(to_hex_color(200, 200, 200)),
            ..StyleDirective::font(code_font, BASE_FONT_SIZE)
        };

        let entries = vec![
            StyleEntry::new("Bold", bold),
            StyleEntry::new("Italic", italic),
            StyleEntry::new("Code", code),
            StyleEntry::new("Normal Size", StyleDirective::font(text_font, 15)),
            StyleEntry::new("Larger Size", StyleDirective::font(text_font, 25)),
            StyleEntry::new("Largest Size", StyleDirective::font(text_font, 35)),
            StyleEntry::new("Highlight", StyleDirective::background(255, 255, 0)),
            StyleEntry::new("Highlight Red", StyleDirective::background(255, 0, 0)),
            StyleEntry::new("Highlight Green", StyleDirective::background(0, 255, 0)),
            StyleEntry::new("Highlight Black", StyleDirective::background(0, 0, 0)),
            StyleEntry::new("Text White", StyleDirective::foreground(255, 255, 255)),
            StyleEntry::new("Text Grey", StyleDirective::foreground(200, 200, 200)),
            StyleEntry::new("Text Blue", StyleDirective::foreground(0, 0, 255)),
            StyleEntry::new("Text green", StyleDirective::foreground(0, 255, 0)),
            StyleEntry::new("Text Red", StyleDirective::foreground(255, 0, 0)),
        ];

        Self {
            entries,
            fallback: StyleDirective::default(),
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Directive for `key`; unknown tags render with no special style
    pub fn directive(&self, key: &str) -> &StyleDirective {
        self.lookup(key)
            .map(|entry| &entry.directive)
            .unwrap_or(&self.fallback)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn entries(&self) -> impl Iterator<Item = &StyleEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
