// src/session.rs - Editor session: the one document a shell is working on

use crate::catalog::StyleCatalog;
use crate::codec;
use crate::command::Command;
use crate::config::RteConfig;
use crate::document::{SELECTION_TAG, StyledDocument, TagRange};
use crate::error::{Result, RteError};
use crate::position::TextIndex;
use crate::store;
use crate::surface::TextSurface;
use log::{debug, info};
use std::path::{Path, PathBuf};

pub const APPLICATION_NAME: &str = "Rich Text Editor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Owns the editing surface and everything the shell's handlers share.
/// Handlers borrow it one event at a time.
pub struct EditorSession {
    pub surface: TextSurface,
    pub catalog: StyleCatalog,
    pub file_path: Option<PathBuf>,
    pub modified: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self::with_catalog(StyleCatalog::builtin())
    }

    pub fn with_catalog(catalog: StyleCatalog) -> Self {
        let mut surface = TextSurface::new();
        surface.reset_tags(&catalog);
        Self {
            surface,
            catalog,
            file_path: None,
            modified: false,
        }
    }

    pub fn from_config(config: &RteConfig) -> Self {
        Self::with_catalog(config.catalog())
    }

    pub fn execute(&mut self, cmd: Command) -> Result<bool> {
        // Returns true if should exit
        match cmd {
            Command::Open(path) => self.open(&path)?,
            Command::Save(path) => {
                self.save(path.as_deref())?;
            }
            Command::ToggleTag(key) => {
                self.toggle_tag(&key)?;
            }
            Command::Exit => return Ok(true),
        }
        Ok(false)
    }

    /// Read and decode `path`, then replace the surface with it.
    /// Nothing changes if reading or decoding fails.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let bytes = store::open(path)?;
        let document = codec::decode(&bytes)?;
        self.load_document(&document);
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        info!("Opened {}", path.display());
        Ok(())
    }

    /// Clear the surface, reset every tag and re-apply each range of `document`
    pub fn load_document(&mut self, document: &StyledDocument) {
        self.surface.set_text(&document.content);
        self.surface.reset_tags(&self.catalog);
        for (name, ranges) in &document.tags {
            if name != SELECTION_TAG && !self.catalog.contains(name) {
                debug!("Tag {:?} is not in the style catalog, it will render unstyled", name);
            }
            self.surface.define_tag(name);
            for range in ranges {
                self.surface.tag_add(name, range.start, range.end);
            }
        }
    }

    /// Build a fresh document from the current text and every defined tag except the selection
    pub fn harvest(&self) -> StyledDocument {
        let mut document = StyledDocument::template();
        document.content = self.surface.text();

        for name in self.surface.tag_names() {
            if name == SELECTION_TAG {
                continue;
            }
            let ranges = self
                .surface
                .tag_boundaries(name)
                .chunks_exact(2)
                .map(|pair| TagRange::new(pair[0], pair[1]))
                .collect();
            document.tags.insert(name.to_string(), ranges);
        }
        document
    }

    /// Save to `path`, or to the current file path when `path` is `None`.
    /// Returns the path written, which always ends in `.rte`.
    pub fn save(&mut self, path: Option<&Path>) -> Result<PathBuf> {
        let target = path
            .map(Path::to_path_buf)
            .or_else(|| self.file_path.clone())
            .ok_or(RteError::NoFilePath)?;

        let bytes = codec::encode(&self.harvest())?;
        let written = store::save(&target, &bytes)?;
        self.file_path = Some(written.clone());
        self.modified = false;
        Ok(written)
    }

    pub fn select(&mut self, start: TextIndex, end: TextIndex) {
        self.surface.set_selection(start, end);
    }

    pub fn clear_selection(&mut self) {
        self.surface.clear_selection();
    }

    /// Add `key` to the whole selection, or remove it from the whole selection
    /// if the first selected character already carries it.
    pub fn toggle_tag(&mut self, key: &str) -> Result<ToggleOutcome> {
        let (start, end) = self.surface.selection().ok_or(RteError::NoSelection)?;

        let outcome = if self.surface.tag_names_at(start).contains(&key) {
            self.surface.tag_remove(key, start, end);
            ToggleOutcome::Removed
        } else {
            self.surface.tag_add(key, start, end);
            ToggleOutcome::Added
        };
        self.modified = true;
        debug!("Toggle {:?} on {}..{}: {:?}", key, start, end, outcome);
        Ok(outcome)
    }

    /// Insert typed text and mark the session dirty
    pub fn type_text(&mut self, at: TextIndex, text: &str) {
        self.surface.insert(at, text);
        self.on_keystroke();
    }

    pub fn on_keystroke(&mut self) {
        self.modified = true;
    }

    pub fn window_title(&self) -> String {
        let marker = if self.modified { "*" } else { "" };
        match &self.file_path {
            Some(path) => format!("{} - {}{}", APPLICATION_NAME, marker, path.display()),
            None if self.modified => format!("{} - *untitled", APPLICATION_NAME),
            None => APPLICATION_NAME.to_string(),
        }
    }
}
