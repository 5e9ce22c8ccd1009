//! Loads grid preferences at startup and saves them when the grid changes

use bevy::prelude::*;

use crate::grid_editor::{
    preferences::GridPreferences,
    resources::{EditorGridSettings, PreferencesPath},
};

pub fn load_preferences_system(
    preferences_path: Res<PreferencesPath>,
    mut grid_settings: ResMut<EditorGridSettings>,
) {
    let Some(path) = preferences_path.0.as_deref() else {
        return;
    };

    match GridPreferences::load(path) {
        Ok(Some(preferences)) => {
            grid_settings.grid = preferences.to_settings();
            log::info!(
                "[Preferences] Loaded grid {}x{} (center snap: {}) from {}",
                preferences.cell_width,
                preferences.cell_depth,
                preferences.center_snap,
                path.display()
            );
        }
        Ok(None) => {
            log::info!("[Preferences] No saved preferences at {}, using defaults", path.display());
        }
        Err(error) => {
            log::warn!("[Preferences] {}", error);
        }
    }
}

/// Save when the persisted values differ from what was last written or read
pub fn save_preferences_system(
    preferences_path: Res<PreferencesPath>,
    grid_settings: Res<EditorGridSettings>,
    mut last_saved: Local<Option<GridPreferences>>,
) {
    let Some(path) = preferences_path.0.as_deref() else {
        return;
    };

    let current = GridPreferences::from(&grid_settings.grid);
    let Some(previous) = *last_saved else {
        // First run after startup loading; nothing has been edited yet.
        *last_saved = Some(current);
        return;
    };
    if !grid_settings.is_changed() || previous == current {
        return;
    }

    // Failures are not retried until the values change again.
    match current.save(path) {
        Ok(()) => log::debug!("[Preferences] Saved grid preferences to {}", path.display()),
        Err(error) => log::warn!("[Preferences] {}", error),
    }
    *last_saved = Some(current);
}
