//! Undo/Redo System for the Grid Editor
//!
//! Each history entry is the group of tile changes one editor action made.
//! Undo applies their inverses in reverse order; redo re-applies them.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::grid_editor::{
    placement::{TileChange, TileLayout},
    resources::{GridEditorState, PlacedTiles, TileChanged},
};

/// Undo/redo requested from outside the keyboard, e.g. editor window buttons
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRequest {
    Undo,
    Redo,
}

/// Undo the most recent action. Returns the changes applied to the layout.
pub fn undo_last(state: &mut GridEditorState, tiles: &mut TileLayout) -> Vec<TileChange> {
    let Some(action) = state.pop_undo() else {
        log::info!("[UndoRedo] Nothing to undo");
        return Vec::new();
    };

    // A tile held by the pointer would otherwise keep a stale rollback.
    let mut applied = state.session.cancel(tiles);
    for change in action.changes.iter().rev() {
        let inverse = change.inverse();
        if tiles.apply(&inverse) {
            applied.push(inverse);
        } else {
            log::debug!("[UndoRedo] Skipped {:?}, layout no longer matches", inverse);
        }
    }

    log::info!(
        "[UndoRedo] Undid {}, {} steps remaining",
        action.label,
        state.undo_stack.len()
    );
    state.push_redo(action);
    state.is_modified = true;
    applied
}

/// Redo the most recently undone action
pub fn redo_last(state: &mut GridEditorState, tiles: &mut TileLayout) -> Vec<TileChange> {
    let Some(action) = state.pop_redo() else {
        log::info!("[UndoRedo] Nothing to redo");
        return Vec::new();
    };

    let mut applied = state.session.cancel(tiles);
    for change in &action.changes {
        if tiles.apply(change) {
            applied.push(*change);
        } else {
            log::debug!("[UndoRedo] Skipped {:?}, layout no longer matches", change);
        }
    }

    log::info!(
        "[UndoRedo] Redid {}, {} steps remaining",
        action.label,
        state.redo_stack.len()
    );
    state.push_undo(action);
    state.is_modified = true;
    applied
}

/// System to handle undo/redo shortcuts and requests
pub fn undo_redo_system(
    mut editor_state: ResMut<GridEditorState>,
    mut tiles: ResMut<PlacedTiles>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageReader<HistoryRequest>,
    mut tile_changed: MessageWriter<TileChanged>,
    mut egui_contexts: EguiContexts,
) {
    let mut pending: Vec<HistoryRequest> = requests.read().copied().collect();

    let keyboard_free = egui_contexts
        .ctx_mut()
        .map(|ctx| !ctx.wants_keyboard_input())
        .unwrap_or(true);

    if editor_state.enabled && keyboard_free {
        let ctrl_pressed = keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);
        let shift_pressed = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);

        if ctrl_pressed && keyboard.just_pressed(KeyCode::KeyZ) {
            pending.push(if shift_pressed {
                HistoryRequest::Redo
            } else {
                HistoryRequest::Undo
            });
        }
        if ctrl_pressed && keyboard.just_pressed(KeyCode::KeyY) {
            pending.push(HistoryRequest::Redo);
        }
    }

    for request in pending {
        let applied = match request {
            HistoryRequest::Undo => undo_last(&mut editor_state, &mut tiles),
            HistoryRequest::Redo => redo_last(&mut editor_state, &mut tiles),
        };
        for change in applied {
            tile_changed.write(TileChanged(change));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_editor::placement::{GridSettings, TileId};
    use crate::grid_editor::resources::EditorAction;

    fn settings() -> GridSettings {
        GridSettings::new(1.0, 1.0, true)
    }

    fn record(state: &mut GridEditorState, label: &'static str, history: Vec<TileChange>) {
        state.push_action(EditorAction { label, changes: history });
    }

    #[test]
    fn undo_and_redo_create() {
        let mut state = GridEditorState::default();
        let mut tiles = TileLayout::new();

        let outcome = state.session.handle_create(Vec3::new(1.0, 0.0, 1.0), &mut tiles);
        record(&mut state, "Create", outcome.history);
        let id = tiles.iter().next().map(|tile| tile.id);

        let undone = undo_last(&mut state, &mut tiles);
        assert!(tiles.is_empty());
        assert_eq!(undone.len(), 1);

        redo_last(&mut state, &mut tiles);
        assert_eq!(tiles.iter().next().map(|tile| tile.id), id);
        assert!(state.can_undo());
        assert!(!state.can_redo());
    }

    #[test]
    fn undo_delete_restores_every_tile_with_same_ids() {
        let mut state = GridEditorState::default();
        let mut tiles = TileLayout::new();
        let a = tiles.insert(Vec3::ZERO);
        let b = tiles.insert(Vec3::ZERO);

        let outcome = state.session.handle_delete(Vec3::ZERO, &mut tiles);
        record(&mut state, "Delete", outcome.history);
        assert!(tiles.is_empty());

        undo_last(&mut state, &mut tiles);
        let mut ids: Vec<TileId> = tiles.iter().map(|tile| tile.id).collect();
        ids.sort();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn undo_move_puts_tile_back() {
        let mut state = GridEditorState::default();
        let mut tiles = TileLayout::new();
        let a = tiles.insert(Vec3::ZERO);

        state.session.handle_select(Vec3::ZERO, &tiles);
        state.session.handle_drag(Vec3::new(3.0, 0.0, 0.0), &mut tiles);
        let outcome = state.session.handle_release(&mut tiles, &settings());
        record(&mut state, "Release", outcome.history);

        undo_last(&mut state, &mut tiles);
        assert_eq!(tiles.position(a), Some(Vec3::ZERO));

        redo_last(&mut state, &mut tiles);
        assert_eq!(tiles.position(a), Some(Vec3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn undo_during_drag_cancels_the_drag_first() {
        let mut state = GridEditorState::default();
        let mut tiles = TileLayout::new();
        let outcome = state.session.handle_create(Vec3::ZERO, &mut tiles);
        record(&mut state, "Create", outcome.history);
        let a = tiles.iter().next().map(|tile| tile.id);

        if let Some(id) = a {
            state.session.handle_select(Vec3::ZERO, &tiles);
            state.session.handle_drag(Vec3::new(5.0, 0.0, 5.0), &mut tiles);
            assert_eq!(state.session.selected_tile(), Some(id));
        }

        let applied = undo_last(&mut state, &mut tiles);
        assert!(state.session.is_idle());
        assert!(tiles.is_empty());
        assert_eq!(applied.len(), 2);
    }

    #[test]
    fn nothing_to_undo_is_a_noop() {
        let mut state = GridEditorState::default();
        let mut tiles = TileLayout::new();
        assert!(undo_last(&mut state, &mut tiles).is_empty());
        assert!(redo_last(&mut state, &mut tiles).is_empty());
    }
}
