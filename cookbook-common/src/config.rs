//! Configuration loading and root folder resolution
//!
//! Resolution order, highest priority first:
//! 1. Command-line argument
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default
//!
//! A missing or unreadable config file is never fatal; it is logged and the
//! compiled defaults are used.

use crate::{Error, Locale, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable overriding the root folder
pub const ROOT_FOLDER_ENV: &str = "COOKBOOK_ROOT_FOLDER";

/// Environment variable overriding the site origin
pub const BASE_ENV: &str = "COOKBOOK_BASE";

/// Default site origin: the current directory holds `./json/*.json`
pub const DEFAULT_BASE: &str = ".";

/// Storage file name inside the root folder
pub const STORE_FILE_NAME: &str = "cookbook.db";

/// How the budget selector materializes a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveMode {
    /// Fetch recipe details and replace the document with ingredient/step pages
    #[default]
    Details,
    /// Append the selection to the existing shared document
    Merge,
}

impl std::str::FromStr for SaveMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "details" => Ok(SaveMode::Details),
            "merge" => Ok(SaveMode::Merge),
            other => Err(Error::InvalidInput(format!("unknown save mode: {}", other))),
        }
    }
}

/// `[save]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    pub mode: SaveMode,
    /// Also write the saved document to `data.json` in the export folder
    pub export: bool,
    /// Export folder; the root folder when absent
    pub export_dir: Option<PathBuf>,
}

/// Contents of `config.toml`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    /// Site origin: `http(s)://` base URL or a directory
    pub base: Option<String>,
    pub locale: Locale,
    pub log_level: Option<String>,
    pub save: SaveConfig,
}

impl TomlConfig {
    /// Parse a config file, failing on unreadable or malformed content
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load from an explicit path, else the platform config file, else defaults
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };

        match path {
            Some(path) => match Self::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

/// Resolve the root folder holding storage and rendered pages
pub fn resolve_root_folder(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &config.root_folder {
        return path.clone();
    }

    // Priority 4: OS-dependent compiled default
    get_default_root_folder()
}

/// Resolve the site origin string, same priority order as the root folder
pub fn resolve_base(cli_arg: Option<&str>, config: &TomlConfig) -> String {
    if let Some(base) = cli_arg {
        return base.to_string();
    }
    if let Ok(base) = std::env::var(BASE_ENV) {
        if !base.is_empty() {
            return base;
        }
    }
    config
        .base
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE.to_string())
}

/// `<config_dir>/cookbook/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cookbook").join("config.toml"))
}

/// Get OS-dependent default root folder path
pub fn get_default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/cookbook
        dirs::data_local_dir()
            .map(|d| d.join("cookbook"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/cookbook"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/cookbook
        dirs::data_dir()
            .map(|d| d.join("cookbook"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/cookbook"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\cookbook
        dirs::data_local_dir()
            .map(|d| d.join("cookbook"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\cookbook"))
    } else {
        PathBuf::from("./cookbook_data")
    }
}
