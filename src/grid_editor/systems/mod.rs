//! Grid Editor Systems
//!
//! Bevy adapter around the placement controller: pointer input, tile entity
//! mirroring, undo/redo, grid drawing and preference persistence.

pub mod editor_camera_system;
pub mod grid_system;
pub mod keyboard_shortcuts_system;
pub mod pointer_input_system;
pub mod preferences_system;
pub mod selection_highlight_system;
pub mod tile_sync_system;
pub mod undo_system;

pub use editor_camera_system::{editor_camera_system, spawn_editor_camera};
pub use grid_system::{grid_render_system, hovered_cell_system};
pub use keyboard_shortcuts_system::keyboard_shortcuts_system;
pub use pointer_input_system::grid_pointer_system;
pub use preferences_system::{load_preferences_system, save_preferences_system};
pub use selection_highlight_system::selection_highlight_system;
pub use tile_sync_system::{apply_tile_changes_system, setup_tile_assets_system};
pub use undo_system::{undo_redo_system, HistoryRequest};
