//! Grid Placement Controller
//!
//! Host-independent decision logic for the grid editor. Given a pointer
//! event and the current tile layout, the controller decides which action
//! the designer asked for, snaps the pointer to the grid, and mutates the
//! layout. Everything it changed is reported back as [`TileChange`] records
//! so the host can mirror them onto scene entities and the undo history.
//!
//! Nothing in here touches the ECS world; the Bevy systems in
//! `grid_editor::systems` are the adapter layer.

pub mod controller;
pub mod event;
pub mod layout;
pub mod snap;

pub use controller::{InteractionSession, PlacementOutcome, Selection};
pub use event::{classify_event, EventPhase, Modifiers, PointerButton, PointerEvent, RequestedAction};
pub use layout::{approximately, Tile, TileChange, TileId, TileLayout, DEFAULT_EPSILON};
pub use snap::{snap_to_grid, GridSettings, PlacementBounds, MIN_CELL_SIZE};
