//! Interaction handling for a single pointer session.
//!
//! The session holds the tile picked by a plain click and where it came
//! from, so that a drop on an occupied cell can be rolled back.

use bevy::math::Vec3;

use super::event::{PointerEvent, RequestedAction};
use super::layout::{TileChange, TileId, TileLayout, DEFAULT_EPSILON};
use super::snap::{snap_to_grid, GridSettings};

/// The tile currently held by the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub tile: TileId,
    /// Position the tile had when it was picked up
    pub rollback: Vec3,
    /// Set once the tile has been moved by a drag
    pub dragged: bool,
}

/// Result of handling one pointer event
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlacementOutcome {
    pub action: RequestedAction,
    /// Snapped position the action targeted, if it used one
    pub target: Option<Vec3>,
    /// Every change the scene has to mirror
    pub changes: Vec<TileChange>,
    /// Changes to register as one undo step
    pub history: Vec<TileChange>,
}

impl PlacementOutcome {
    fn new(action: RequestedAction) -> Self {
        Self {
            action,
            ..Default::default()
        }
    }

    fn recorded(mut self, change: TileChange) -> Self {
        self.changes.push(change);
        self.history.push(change);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Transient state of a pointer interaction: `Idle` when nothing is selected,
/// `Selected` between a select and its release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSession {
    selection: Option<Selection>,
    /// Absolute tolerance used when matching tile positions
    pub epsilon: f32,
}

impl Default for InteractionSession {
    fn default() -> Self {
        Self {
            selection: None,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl InteractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn selected_tile(&self) -> Option<TileId> {
        self.selection.map(|selection| selection.tile)
    }

    pub fn is_idle(&self) -> bool {
        self.selection.is_none()
    }

    /// Drop the selection without settling the tile, e.g. when the editor is
    /// disabled mid-drag. A dragged tile goes back to its rollback position.
    pub fn cancel(&mut self, tiles: &mut TileLayout) -> Vec<TileChange> {
        let Some(selection) = self.selection.take() else {
            return Vec::new();
        };
        if !selection.dragged {
            return Vec::new();
        }
        tiles
            .set_position(selection.tile, selection.rollback)
            .map(|from| TileChange::Moved {
                id: selection.tile,
                from,
                to: selection.rollback,
            })
            .into_iter()
            .collect()
    }

    /// Classify an event and run the matching handler
    pub fn handle(&mut self, event: &PointerEvent, tiles: &mut TileLayout, settings: &GridSettings) -> PlacementOutcome {
        let action = event.action();
        let snapped = snap_to_grid(event.world_point, settings);

        match action {
            RequestedAction::CreateRequested => self.handle_create(snapped, tiles),
            RequestedAction::DeleteRequested => self.handle_delete(snapped, tiles),
            RequestedAction::SelectRequested => self.handle_select(snapped, tiles),
            RequestedAction::DragRequested => self.handle_drag(event.world_point, tiles),
            RequestedAction::ReleaseRequested => self.handle_release(tiles, settings),
            RequestedAction::None => PlacementOutcome::new(action),
        }
    }

    /// Place a new tile on an empty cell; an occupied cell is left alone
    pub fn handle_create(&self, snapped: Vec3, tiles: &mut TileLayout) -> PlacementOutcome {
        let mut outcome = PlacementOutcome::new(RequestedAction::CreateRequested);
        outcome.target = Some(snapped);

        if tiles.count_at(snapped, self.epsilon) > 0 {
            return outcome;
        }

        let id = tiles.insert(snapped);
        outcome.recorded(TileChange::Created { id, position: snapped })
    }

    /// Remove every tile on the cell
    pub fn handle_delete(&mut self, snapped: Vec3, tiles: &mut TileLayout) -> PlacementOutcome {
        let mut outcome = PlacementOutcome::new(RequestedAction::DeleteRequested);
        outcome.target = Some(snapped);

        for id in tiles.find_at(snapped, self.epsilon) {
            if self.selected_tile() == Some(id) {
                self.selection = None;
            }
            if let Some(tile) = tiles.remove(id) {
                outcome = outcome.recorded(TileChange::Deleted {
                    id,
                    position: tile.position,
                });
            }
        }
        outcome
    }

    /// Pick up the first tile on the cell
    pub fn handle_select(&mut self, snapped: Vec3, tiles: &TileLayout) -> PlacementOutcome {
        let mut outcome = PlacementOutcome::new(RequestedAction::SelectRequested);
        outcome.target = Some(snapped);

        let selected = tiles
            .find_at(snapped, self.epsilon)
            .first()
            .and_then(|&id| tiles.get(id).copied());
        if let Some(tile) = selected {
            self.selection = Some(Selection {
                tile: tile.id,
                rollback: tile.position,
                dragged: false,
            });
        }
        outcome
    }

    /// Follow the pointer with the selected tile, unsnapped
    pub fn handle_drag(&mut self, point: Vec3, tiles: &mut TileLayout) -> PlacementOutcome {
        let mut outcome = PlacementOutcome::new(RequestedAction::DragRequested);
        let Some(selection) = self.selection else {
            return outcome;
        };

        let Some(from) = tiles.set_position(selection.tile, point) else {
            // The tile vanished underneath us (undo, delete); forget it.
            self.selection = None;
            return outcome;
        };
        self.selection = Some(Selection {
            dragged: true,
            ..selection
        });
        if from != point {
            outcome.changes.push(TileChange::Moved {
                id: selection.tile,
                from,
                to: point,
            });
        }
        outcome
    }

    /// Settle the selected tile on the cell it was dropped on, or send it
    /// back where it came from when that cell is already taken. The session
    /// is idle afterwards.
    pub fn handle_release(&mut self, tiles: &mut TileLayout, settings: &GridSettings) -> PlacementOutcome {
        let mut outcome = PlacementOutcome::new(RequestedAction::ReleaseRequested);
        let Some(selection) = self.selection.take() else {
            return outcome;
        };
        if !selection.dragged {
            return outcome;
        }
        let Some(current) = tiles.position(selection.tile) else {
            return outcome;
        };

        let drop = snap_to_grid(current, settings);
        outcome.target = Some(drop);

        // The dragged tile itself is not on the drop cell yet, so any match
        // is a second tile there.
        let occupied = tiles
            .find_at(drop, self.epsilon)
            .into_iter()
            .any(|id| id != selection.tile);
        let destination = if occupied { selection.rollback } else { drop };

        tiles.set_position(selection.tile, destination);
        if current != destination {
            outcome.changes.push(TileChange::Moved {
                id: selection.tile,
                from: current,
                to: destination,
            });
        }
        if !occupied && destination != selection.rollback {
            outcome.history.push(TileChange::Moved {
                id: selection.tile,
                from: selection.rollback,
                to: destination,
            });
        }
        outcome
    }
}
