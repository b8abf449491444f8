use crate::catalog::StyleCatalog;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open(PathBuf),
    /// Save to the given path, or to the session's current one
    Save(Option<PathBuf>),
    ToggleTag(String),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Save,
    Exit,
}

/// What a menu entry does once chosen. Open and Save need a path from the shell's dialog first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    File(MenuAction),
    Toggle(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub accelerator: Option<&'static str>,
    pub target: MenuTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub label: &'static str,
    pub items: Vec<MenuItem>,
}

/// File and Format menus. Format carries one toggle per catalog entry.
pub fn menu_bar(catalog: &StyleCatalog) -> Vec<Menu> {
    let file = Menu {
        label: "File",
        items: vec![
            MenuItem {
                label: "Open".to_string(),
                accelerator: Some("Ctrl+O"),
                target: MenuTarget::File(MenuAction::Open),
            },
            MenuItem {
                label: "Save".to_string(),
                accelerator: Some("Ctrl+S"),
                target: MenuTarget::File(MenuAction::Save),
            },
            MenuItem {
                label: "Exit".to_string(),
                accelerator: None,
                target: MenuTarget::File(MenuAction::Exit),
            },
        ],
    };

    let format = Menu {
        label: "Format",
        items: catalog
            .entries()
            .map(|entry| MenuItem {
                label: entry.name.clone(),
                accelerator: None,
                target: MenuTarget::Toggle(entry.key.clone()),
            })
            .collect(),
    };

    vec![file, format]
}

/// Map a Ctrl+<key> chord to its menu action
pub fn shortcut(key: char) -> Option<MenuAction> {
    match key.to_ascii_lowercase() {
        'o' => Some(MenuAction::Open),
        's' => Some(MenuAction::Save),
        _ => None,
    }
}
