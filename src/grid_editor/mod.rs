//! Grid Editor Module
//!
//! A level-design tool for laying out floor tiles on a ground-plane grid.
//! The designer works directly in the 3D scene view:
//!
//! - Ctrl + Click places a tile on the cell under the cursor
//! - Shift + Click deletes the tiles on that cell
//! - Click + Drag picks a tile up and drops it on another cell; dropping on
//!   an occupied cell sends it back
//!
//! # Architecture
//!
//! - `placement`: host-independent controller (event classification,
//!   snapping, tile layout, interaction session)
//! - `resources`: editor state, tile layout, grid settings, undo history
//! - `components`: tile, container and camera markers
//! - `systems`: pointer input, tile entity mirroring, undo/redo, grid drawing
//! - `ui`: egui editor window and status bar
//! - `preferences`: persisted grid settings

pub mod components;
pub mod placement;
pub mod preferences;
pub mod resources;
pub mod systems;
pub mod ui;

pub use components::{EditorCamera, GridTile, SelectedInEditor, TileContainer};

pub use resources::{
    EditorAction,
    EditorGridSettings,
    GridEditorState,
    HoveredCell,
    PlacedTiles,
    PreferencesPath,
    TileAssets,
    TileChanged,
};

use bevy::prelude::*;
use systems::{
    apply_tile_changes_system, editor_camera_system, grid_pointer_system, grid_render_system,
    hovered_cell_system, keyboard_shortcuts_system, load_preferences_system,
    save_preferences_system, selection_highlight_system, setup_tile_assets_system,
    undo_redo_system, HistoryRequest,
};
use ui::EditorUiPlugin;

/// Plugin for the grid editor
///
/// Resources already present in the app (e.g. inserted from configuration)
/// are kept; missing ones get defaults.
pub struct GridEditorPlugin;

impl Plugin for GridEditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GridEditorState>()
            .init_resource::<EditorGridSettings>()
            .init_resource::<PlacedTiles>()
            .init_resource::<HoveredCell>()
            .init_resource::<PreferencesPath>()
            .add_message::<TileChanged>()
            .add_message::<HistoryRequest>();

        app.add_plugins(EditorUiPlugin);

        app.add_systems(Startup, (setup_tile_assets_system, load_preferences_system));

        // Input first, then history, then the scene catches up with the layout.
        app.add_systems(
            Update,
            (
                keyboard_shortcuts_system,
                grid_pointer_system,
                undo_redo_system,
                apply_tile_changes_system,
                selection_highlight_system,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                editor_camera_system,
                grid_render_system,
                hovered_cell_system.after(grid_pointer_system),
                save_preferences_system,
            ),
        );

        log::info!("[GridEditorPlugin] Grid editor plugin initialized");
    }
}
