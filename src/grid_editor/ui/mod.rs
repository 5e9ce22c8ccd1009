//! Grid Editor UI Module
//!
//! egui panels for the grid editor.
//!
//! ```text
//! +---------------------------------------------+
//! |                      +-------------------+  |
//! |                      | Grid Editor       |  |
//! |    3D Viewport       | bindings, grid,   |  |
//! |                      | history           |  |
//! |                      +-------------------+  |
//! +---------------------------------------------+
//! | Status Bar                                  |
//! +---------------------------------------------+
//! ```

pub mod editor_window;
pub mod status_bar;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::grid_editor::{
    resources::{EditorGridSettings, GridEditorState, PlacedTiles, TileChanged},
    systems::{keyboard_shortcuts_system::set_editor_enabled, HistoryRequest},
};

use editor_window::{editor_window, EditorWindowResponse};
use status_bar::editor_status_bar;

/// Plugin for the grid editor UI systems
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, grid_editor_ui_system);

        log::info!("[EditorUiPlugin] Grid editor UI plugin initialized");
    }
}

/// Renders the editor window and status bar and applies what they changed
pub fn grid_editor_ui_system(
    mut contexts: EguiContexts,
    mut editor_state: ResMut<GridEditorState>,
    mut grid_settings: ResMut<EditorGridSettings>,
    mut tiles: ResMut<PlacedTiles>,
    mut history_requests: MessageWriter<HistoryRequest>,
    mut tile_changed: MessageWriter<TileChanged>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // Draw against a copy so resources are only flagged as changed when the
    // user actually edits something.
    let mut edited_grid = grid_settings.clone();
    let mut enabled = editor_state.enabled;

    editor_status_bar(ctx, &editor_state, &grid_settings, tiles.len());
    let response = editor_window(ctx, &editor_state, &mut edited_grid, &mut enabled);

    if edited_grid.grid != grid_settings.grid
        || edited_grid.visible != grid_settings.visible
        || edited_grid.extent != grid_settings.extent
    {
        *grid_settings = edited_grid;
    }

    if enabled != editor_state.enabled {
        for change in set_editor_enabled(&mut editor_state, &mut tiles, enabled) {
            tile_changed.write(TileChanged(change));
        }
    }

    match response {
        EditorWindowResponse::Undo => {
            history_requests.write(HistoryRequest::Undo);
        }
        EditorWindowResponse::Redo => {
            history_requests.write(HistoryRequest::Redo);
        }
        EditorWindowResponse::None => {}
    }
}
