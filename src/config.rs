use crate::catalog::{DEFAULT_CODE_FONT, DEFAULT_TEXT_FONT, StyleCatalog};
use crate::error::{Result, RteError};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RteConfig {
    pub font_family: String,
    pub code_font: String,
    /// Directory file dialogs start in and relative paths are resolved against
    pub initial_dir: PathBuf,
}

impl Default for RteConfig {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_TEXT_FONT.to_string(),
            code_font: DEFAULT_CODE_FONT.to_string(),
            initial_dir: PathBuf::from("."),
        }
    }
}

impl RteConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RteError::from_io(e, path))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RteError::Config(e.to_string()))
    }

    /// Load `explicit` if given, else the first discovered config file, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(find_config_file) {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn catalog(&self) -> StyleCatalog {
        StyleCatalog::with_fonts(&self.font_family, &self.code_font)
    }

    /// Relative paths are taken from `initial_dir`, absolute ones are kept
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.initial_dir.join(path)
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("rte")
}

pub fn find_config_file() -> Option<PathBuf> {
    let mut paths = vec![get_config_dir().join("config.toml")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".rte").join("config.toml"));
    }
    paths.into_iter().find(|p| p.exists())
}
