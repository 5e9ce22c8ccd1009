use std::path::{Path, PathBuf};

use bevy::{
    prelude::{App, Commands, DefaultPlugins, PluginGroup, Startup, Vec3},
    window::{PresentMode, Window, WindowResolution},
};
use serde::Deserialize;

pub mod grid_editor;

use grid_editor::{
    placement::{GridSettings, PlacementBounds},
    preferences::GridPreferences,
    resources::{EditorGridSettings, GridEditorState, PreferencesPath, DEFAULT_UNDO_LIMIT},
    systems::spawn_editor_camera,
    GridEditorPlugin,
};

#[derive(Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub disable_vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Grid Editor".into(),
            width: 1600,
            height: 900,
            disable_vsync: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_width: f32,
    pub cell_depth: f32,
    pub center_snap: bool,
    pub extent: f32,
    pub visible: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        let grid = EditorGridSettings::default();
        Self {
            cell_width: grid.grid.cell_size.x,
            cell_depth: grid.grid.cell_size.y,
            center_snap: grid.grid.center_snap,
            extent: grid.extent,
            visible: grid.visible,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Whether the editor reacts to input at startup
    pub enabled: bool,
    pub undo_limit: usize,
    /// Load and save grid preferences between sessions
    pub persist_preferences: bool,
    /// Overrides the platform preferences location
    pub preferences_path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            undo_limit: DEFAULT_UNDO_LIMIT,
            persist_preferences: true,
            preferences_path: None,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Tiles may not be created left of this x coordinate
    pub min_x: Option<f32>,
    /// Tiles may not be created in front of this z coordinate
    pub min_z: Option<f32>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub grid: GridConfig,
    pub editor: EditorConfig,
    pub placement: PlacementConfig,
}

impl Config {
    pub fn grid_settings(&self) -> EditorGridSettings {
        EditorGridSettings {
            grid: GridSettings::new(self.grid.cell_width, self.grid.cell_depth, self.grid.center_snap),
            bounds: PlacementBounds {
                min_x: self.placement.min_x,
                min_z: self.placement.min_z,
            },
            visible: self.grid.visible,
            extent: self.grid.extent,
            ..Default::default()
        }
    }

    /// Where grid preferences live, or `None` when persistence is off
    pub fn preferences_path(&self) -> Option<PathBuf> {
        if !self.editor.persist_preferences {
            return None;
        }
        if let Some(path) = &self.editor.preferences_path {
            return Some(path.clone());
        }
        match GridPreferences::default_path() {
            Ok(path) => Some(path),
            Err(error) => {
                log::warn!("[Preferences] {}", error);
                None
            }
        }
    }
}

pub fn load_config(path: &Path) -> Config {
    let toml_str = match std::fs::read_to_string(path) {
        Ok(toml_str) => toml_str,
        Err(error) => {
            println!(
                "Failed to load configuration from {} with error: {}",
                path.to_string_lossy(),
                error
            );
            return Config::default();
        }
    };

    match toml::from_str(&toml_str) {
        Ok(config) => {
            println!("Read configuration from {}", path.to_string_lossy());
            config
        }
        Err(error) => {
            println!(
                "Failed to load configuration from {} with error: {}",
                path.to_string_lossy(),
                error
            );
            Config::default()
        }
    }
}

/// Open a window with an empty ground plane and the grid editor running
pub fn run_editor(config: &Config) {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(bevy::window::WindowPlugin {
                primary_window: Some(Window {
                    title: config.window.title.clone(),
                    present_mode: if config.window.disable_vsync {
                        PresentMode::Immediate
                    } else {
                        PresentMode::Fifo
                    },
                    resolution: WindowResolution::new(config.window.width, config.window.height),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                filter: "wgpu=error,naga=error,grid_tile_editor=info".to_string(),
                ..Default::default()
            }),
    );
    app.add_plugins(bevy_egui::EguiPlugin::default());

    app.insert_resource(config.grid_settings())
        .insert_resource(GridEditorState::new(config.editor.enabled, config.editor.undo_limit))
        .insert_resource(PreferencesPath(config.preferences_path()));

    app.add_plugins(GridEditorPlugin);
    app.add_systems(Startup, |mut commands: Commands| {
        spawn_editor_camera(&mut commands, Vec3::ZERO);
    });

    app.run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.grid.cell_width, 1.0);
        assert!(config.editor.enabled);
        assert!(config.placement.min_x.is_none());
    }

    #[test]
    fn config_sections_map_to_grid_settings() {
        let config: Config = toml::from_str(
            r#"
            [grid]
            cell_width = 2.0
            cell_depth = 0.5
            center_snap = true

            [placement]
            min_x = 0.0
            "#,
        )
        .unwrap();

        let settings = config.grid_settings();
        assert_eq!(settings.grid, GridSettings::new(2.0, 0.5, true));
        assert_eq!(settings.bounds.min_x, Some(0.0));
        assert_eq!(settings.bounds.min_z, None);
    }

    #[test]
    fn disabled_persistence_has_no_path() {
        let mut config = Config::default();
        config.editor.persist_preferences = false;
        config.editor.preferences_path = Some(PathBuf::from("ignored.toml"));
        assert!(config.preferences_path().is_none());
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/grid-tile-editor/config.toml"));
        assert_eq!(config.window.width, 1600);
    }
}
