//! Grid Editor Resources

use std::collections::VecDeque;
use std::path::PathBuf;

use bevy::prelude::*;

use crate::grid_editor::placement::{
    GridSettings, InteractionSession, PlacementBounds, TileChange, TileLayout,
};

/// Default number of undo steps kept in history
pub const DEFAULT_UNDO_LIMIT: usize = 100;

/// One undo step: every change made by a single editor action
#[derive(Debug, Clone, PartialEq)]
pub struct EditorAction {
    pub label: &'static str,
    pub changes: Vec<TileChange>,
}

/// Main resource for grid editor state
#[derive(Resource)]
pub struct GridEditorState {
    /// Whether the editor reacts to pointer input
    pub enabled: bool,

    /// Pointer interaction in progress
    pub session: InteractionSession,

    /// Whether tiles changed since the editor was opened
    pub is_modified: bool,

    pub undo_stack: VecDeque<EditorAction>,
    pub redo_stack: Vec<EditorAction>,
    pub undo_limit: usize,
}

impl Default for GridEditorState {
    fn default() -> Self {
        Self::new(true, DEFAULT_UNDO_LIMIT)
    }
}

impl GridEditorState {
    pub fn new(enabled: bool, undo_limit: usize) -> Self {
        Self {
            enabled,
            session: InteractionSession::default(),
            is_modified: false,
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            undo_limit: undo_limit.max(1),
        }
    }

    /// Register an action for undo and clear the redo stack
    pub fn push_action(&mut self, action: EditorAction) {
        if action.changes.is_empty() {
            return;
        }

        self.undo_stack.push_back(action);
        while self.undo_stack.len() > self.undo_limit {
            self.undo_stack.pop_front();
        }

        self.redo_stack.clear();
        self.is_modified = true;
    }

    pub fn pop_undo(&mut self) -> Option<EditorAction> {
        self.undo_stack.pop_back()
    }

    /// Push onto the undo stack without touching redo history
    pub fn push_undo(&mut self, action: EditorAction) {
        self.undo_stack.push_back(action);
        while self.undo_stack.len() > self.undo_limit {
            self.undo_stack.pop_front();
        }
    }

    pub fn push_redo(&mut self, action: EditorAction) {
        self.redo_stack.push(action);
        if self.redo_stack.len() > self.undo_limit {
            self.redo_stack.remove(0);
        }
    }

    pub fn pop_redo(&mut self) -> Option<EditorAction> {
        self.redo_stack.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

/// Authoritative set of placed tiles. Scene entities follow it.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct PlacedTiles(pub TileLayout);

/// Resource to track grid settings
#[derive(Resource, Clone)]
pub struct EditorGridSettings {
    /// Snapping lattice
    pub grid: GridSettings,
    /// Where tiles may be created
    pub bounds: PlacementBounds,
    /// Whether grid lines are drawn
    pub visible: bool,
    /// Grid extent (total size)
    pub extent: f32,
    /// Grid color
    pub color: Color,
}

impl Default for EditorGridSettings {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            bounds: PlacementBounds::default(),
            visible: true,
            extent: 50.0,
            color: Color::srgba(0.5, 0.5, 0.5, 0.5),
        }
    }
}

/// Where grid preferences are persisted; `None` disables persistence
#[derive(Resource, Default, Debug, Clone)]
pub struct PreferencesPath(pub Option<PathBuf>);

/// Snapped cell under the cursor, if the cursor is over the ground plane
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct HoveredCell(pub Option<Vec3>);

/// Mesh and materials shared by every tile entity
#[derive(Resource)]
pub struct TileAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub selected_material: Handle<StandardMaterial>,
}

/// Scene-side mirror of a layout change
#[derive(Message, Debug, Clone, Copy)]
pub struct TileChanged(pub TileChange);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_editor::placement::TileId;

    fn created(id: u64) -> EditorAction {
        EditorAction {
            label: "Create",
            changes: vec![TileChange::Created {
                id: TileId(id),
                position: Vec3::ZERO,
            }],
        }
    }

    #[test]
    fn history_is_bounded() {
        let mut state = GridEditorState::new(true, 3);
        for id in 0..5 {
            state.push_action(created(id));
        }
        assert_eq!(state.undo_stack.len(), 3);
        assert_eq!(state.undo_stack.front(), Some(&created(2)));
    }

    #[test]
    fn new_action_clears_redo() {
        let mut state = GridEditorState::default();
        state.push_action(created(1));
        if let Some(action) = state.pop_undo() {
            state.push_redo(action);
        }
        assert!(state.can_redo());

        state.push_action(created(2));
        assert!(!state.can_redo());
        assert!(state.is_modified);
    }

    #[test]
    fn empty_actions_are_not_recorded() {
        let mut state = GridEditorState::default();
        state.push_action(EditorAction {
            label: "Create",
            changes: Vec::new(),
        });
        assert!(!state.can_undo());
        assert!(!state.is_modified);
    }
}
