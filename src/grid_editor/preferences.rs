//! Persisted grid preferences
//!
//! The grid cell size and snap mode survive between sessions in a small TOML
//! file under the platform config directory. Loading never fails the
//! editor: a missing or unreadable file falls back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid_editor::placement::GridSettings;

const PREFERENCES_FILE: &str = "grid_preferences.toml";

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("No configuration directory available on this platform")]
    NoConfigDirectory,
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize grid preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The three persisted grid values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridPreferences {
    pub cell_width: f32,
    pub cell_depth: f32,
    pub center_snap: bool,
}

impl Default for GridPreferences {
    fn default() -> Self {
        Self::from(&GridSettings::default())
    }
}

impl From<&GridSettings> for GridPreferences {
    fn from(settings: &GridSettings) -> Self {
        Self {
            cell_width: settings.cell_size.x,
            cell_depth: settings.cell_size.y,
            center_snap: settings.center_snap,
        }
    }
}

impl GridPreferences {
    pub fn to_settings(&self) -> GridSettings {
        GridSettings::new(self.cell_width, self.cell_depth, self.center_snap)
    }

    /// Platform default location of the preferences file
    pub fn default_path() -> Result<PathBuf, PreferencesError> {
        directories::ProjectDirs::from("", "", "grid-tile-editor")
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
            .ok_or(PreferencesError::NoConfigDirectory)
    }

    /// Read preferences from `path`. Returns `Ok(None)` if the file does not
    /// exist yet.
    pub fn load(path: &Path) -> Result<Option<Self>, PreferencesError> {
        let toml_str = match std::fs::read_to_string(path) {
            Ok(toml_str) => toml_str,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PreferencesError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&toml_str)
            .map(Some)
            .map_err(|source| PreferencesError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        let toml_str = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PreferencesError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, toml_str).map_err(|source| PreferencesError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
