//! Grid Editor Components

use bevy::prelude::*;

use crate::grid_editor::placement::TileId;

/// Scene entity mirroring one placed tile
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTile {
    pub id: TileId,
}

/// Parent entity all tile entities are attached to
#[derive(Component, Default)]
pub struct TileContainer;

/// Marker for the tile currently held by the pointer
#[derive(Component, Default)]
pub struct SelectedInEditor;

/// The scene view camera used for pointer ray casts
#[derive(Component, Default)]
pub struct EditorCamera;
