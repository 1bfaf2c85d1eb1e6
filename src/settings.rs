//! JSON settings stored under the user cache directory.

use crate::kernel::{EditorOptions, SyntaxMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".zpad";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_true")]
    pub line_numbers: bool,
    /// Mode of the editor while no file is open.
    #[serde(default = "default_initial_mode")]
    pub initial_mode: SyntaxMode,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            line_numbers: true,
            initial_mode: default_initial_mode(),
        }
    }
}

impl EditorSettings {
    /// Construction options for a fresh surface. Always starts read-only;
    /// the sync controller enables it once it knows the collection.
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            mode: self.initial_mode,
            theme: self.theme.clone(),
            line_numbers: self.line_numbers,
            read_only: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default = "default_true")]
    pub sidebar_visible: bool,
    #[serde(default = "default_true")]
    pub seed_samples: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor: EditorSettings::default(),
            sidebar_visible: true,
            seed_samples: true,
        }
    }
}

fn default_theme() -> String {
    "dracula".to_string()
}

fn default_initial_mode() -> SyntaxMode {
    SyntaxMode::from_extension(None)
}

fn default_true() -> bool {
    true
}

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "cannot read settings: {err}"),
            SettingsError::Parse(err) => write!(f, "invalid settings file: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_cache_dir()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Cannot determine cache directory")
        })?
        .join(SETTINGS_DIR)
        .join(LOG_DIR);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Writes default settings to `path` unless a file already exists there.
pub fn ensure_settings_file(path: &Path) -> io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(&Settings::default())
        .unwrap_or_else(|_| "{}".to_string());
    std::fs::write(path, content)
}

pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Loads the user's settings, creating the file with defaults on first run.
pub fn load_settings() -> Result<Settings, SettingsError> {
    let path = get_settings_path().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    ensure_settings_file(&path)?;
    load_settings_from(&path)
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
