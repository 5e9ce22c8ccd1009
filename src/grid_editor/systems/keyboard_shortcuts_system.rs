//! Keyboard shortcuts for the grid editor
//!
//! - F2: toggle the editor on and off
//! - Escape: drop the tile held by the pointer, returning it to its cell
//! - G: toggle grid line visibility

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::grid_editor::{
    placement::{TileChange, TileLayout},
    resources::{EditorGridSettings, GridEditorState, PlacedTiles, TileChanged},
};

/// Enable or disable the editor. Disabling cancels any drag in progress.
pub fn set_editor_enabled(
    state: &mut GridEditorState,
    tiles: &mut TileLayout,
    enabled: bool,
) -> Vec<TileChange> {
    if state.enabled == enabled {
        return Vec::new();
    }
    state.enabled = enabled;
    log::info!(
        "[GridEditor] Editor {}",
        if enabled { "enabled" } else { "disabled" }
    );

    if enabled {
        Vec::new()
    } else {
        state.session.cancel(tiles)
    }
}

pub fn keyboard_shortcuts_system(
    mut editor_state: ResMut<GridEditorState>,
    mut tiles: ResMut<PlacedTiles>,
    mut grid_settings: ResMut<EditorGridSettings>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tile_changed: MessageWriter<TileChanged>,
    mut egui_contexts: EguiContexts,
) {
    let keyboard_free = egui_contexts
        .ctx_mut()
        .map(|ctx| !ctx.wants_keyboard_input())
        .unwrap_or(true);
    if !keyboard_free {
        return;
    }

    let mut changes = Vec::new();

    if keyboard.just_pressed(KeyCode::F2) {
        let enabled = !editor_state.enabled;
        changes.extend(set_editor_enabled(&mut editor_state, &mut tiles, enabled));
    }

    if !editor_state.enabled {
        for change in changes {
            tile_changed.write(TileChanged(change));
        }
        return;
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        changes.extend(editor_state.session.cancel(&mut tiles));
        log::debug!("[GridEditor] Selection cleared via Escape");
    }

    if keyboard.just_pressed(KeyCode::KeyG) {
        grid_settings.visible = !grid_settings.visible;
    }

    for change in changes {
        tile_changed.write(TileChanged(change));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabling_mid_drag_returns_tile() {
        let mut state = GridEditorState::default();
        let mut tiles = TileLayout::new();
        let a = tiles.insert(Vec3::ZERO);

        state.session.handle_select(Vec3::ZERO, &tiles);
        state.session.handle_drag(Vec3::new(2.0, 0.0, 2.0), &mut tiles);

        let changes = set_editor_enabled(&mut state, &mut tiles, false);
        assert!(!state.enabled);
        assert_eq!(changes.len(), 1);
        assert_eq!(tiles.position(a), Some(Vec3::ZERO));
        assert!(state.session.is_idle());
    }

    #[test]
    fn enabling_twice_changes_nothing() {
        let mut state = GridEditorState::default();
        let mut tiles = TileLayout::new();
        assert!(set_editor_enabled(&mut state, &mut tiles, true).is_empty());
        assert!(state.enabled);
    }
}
