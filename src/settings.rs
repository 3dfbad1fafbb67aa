//! User settings, persisted as JSON
//!
//! Missing keys fall back to their defaults, so a settings file written
//! by an older version still loads.

use crate::metrics::AchievementPolicy;
use crate::session::SessionGoals;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Offer the insertion palette on blank lines
    pub show_context_menu: bool,
    /// How repeated achievements are reported
    pub achievements: AchievementPolicy,
    pub session_goals: SessionGoals,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_context_menu: true,
            achievements: AchievementPolicy::default(),
            session_goals: SessionGoals::default(),
        }
    }
}

/// Settings bound to the file they were loaded from
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Load settings from `path`. A missing file yields defaults; so does a
    /// file that is not valid JSON, with a warning.
    pub fn load(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let settings = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|source| SettingsError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "unreadable settings, using defaults");
                Settings::default()
            })
        } else {
            Settings::default()
        };
        Ok(Self { path, settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the settings and write them to disk
    pub fn update(&mut self, settings: Settings) -> SettingsResult<()> {
        self.settings = settings;
        self.persist()
    }

    fn persist(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let serialized = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, serialized).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Default settings path (`<config_dir>/screenwright/settings.json`)
pub fn default_settings_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".config"));
    config_dir.join("screenwright").join("settings.json")
}

/// Default history database path (`<data_dir>/screenwright/history.db`)
pub fn default_db_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    data_dir.join("screenwright").join("history.db")
}
