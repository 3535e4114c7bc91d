//! Configuration loading and parsing.
//!
//! Parses `oxedit.toml` (or an override path provided by the binary). Every
//! table and key is optional; unknown fields are ignored so the file can grow
//! without warnings. A file that fails to parse falls back to defaults.
//!
//! ```toml
//! [editor]
//! tab_size = 4
//!
//! [file]
//! default_save_path = "samples/output.txt"
//!
//! [history]
//! max_snapshots = 0   # 0 = unlimited
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "oxedit.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_size")]
    pub tab_size: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: Self::default_tab_size(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_size() -> usize {
        4
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FileConfig {
    #[serde(default = "FileConfig::default_save_path")]
    pub default_save_path: PathBuf,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            default_save_path: Self::default_save_path(),
        }
    }
}

impl FileConfig {
    fn default_save_path() -> PathBuf {
        PathBuf::from("samples/output.txt")
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    #[serde(default)]
    pub max_snapshots: usize,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub file: FileConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
    /// Tab width after clamping to at least 1.
    pub effective_tab_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(None, ConfigFile::default())
    }
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    // Prefer a local working directory file before the platform config dir.
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("oxedit").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config::from_file(Some(content), file))
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    fn from_file(raw: Option<String>, file: ConfigFile) -> Self {
        let requested = file.editor.tab_size;
        let effective_tab_size = requested.max(1);
        if effective_tab_size != requested {
            info!(target: "config", requested, effective = effective_tab_size, "tab_size_clamped");
        }
        Self {
            raw,
            file,
            effective_tab_size,
        }
    }

    pub fn default_save_path(&self) -> &PathBuf {
        &self.file.file.default_save_path
    }

    /// Undo depth cap; 0 means unlimited.
    pub fn max_snapshots(&self) -> usize {
        self.file.history.max_snapshots
    }
}
