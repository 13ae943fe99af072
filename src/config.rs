//! On-disk configuration for the assistant launch.
//!
//! Stored as YAML at `{config_dir}/sprig/config.yaml`. A missing or broken
//! file falls back to defaults; configuration trouble must never block the
//! worktree workflow itself.

use crate::error::{Result, SprigError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Assistant command line; split with shell word rules before spawning,
    /// so embedded arguments are allowed.
    pub assistant: String,
    /// Extra arguments appended after the command's own words.
    pub assistant_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assistant: "claude".to_string(),
            assistant_args: Vec::new(),
        }
    }
}

impl Config {
    /// Platform config file location, when one can be determined.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sprig").join("config.yaml"))
    }

    /// Load from the platform location, defaulting when absent or unreadable.
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from a specific file, defaulting when absent or unreadable.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => serde_yaml::from_str(&raw).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SprigError::UserError(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        let raw = serde_yaml::to_string(self)
            .map_err(|e| SprigError::UserError(format!("failed to serialize config: {}", e)))?;
        fs::write(path, raw)
            .map_err(|e| SprigError::UserError(format!("failed to write {}: {}", path.display(), e)))
    }
}
