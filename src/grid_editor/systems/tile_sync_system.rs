//! Tile entity mirroring
//!
//! The tile layout is the source of truth; this system keeps one scene
//! entity per tile, parented under the "Grid" container.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::grid_editor::{
    components::{GridTile, TileContainer},
    placement::{TileChange, TileId},
    resources::{EditorGridSettings, TileAssets, TileChanged},
};

/// Tiles never shrink below this footprint, even with snapping disabled
const MIN_TILE_FOOTPRINT: f32 = 0.1;
/// Fraction of the cell a tile covers, leaving a visible seam
const TILE_FILL: f32 = 0.96;
const TILE_THICKNESS: f32 = 0.05;

/// Transform of a tile entity at `position` for the given cell size
pub fn tile_transform(position: Vec3, cell_size: Vec2) -> Transform {
    let footprint = (cell_size * TILE_FILL).max(Vec2::splat(MIN_TILE_FOOTPRINT));
    Transform::from_translation(position).with_scale(Vec3::new(footprint.x, TILE_THICKNESS, footprint.y))
}

/// Create the shared tile mesh and materials
pub fn setup_tile_assets_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.6, 0.65),
        perceptual_roughness: 0.9,
        ..Default::default()
    });
    let selected_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.75, 0.2),
        emissive: LinearRgba::rgb(0.3, 0.2, 0.0),
        ..Default::default()
    });

    commands.insert_resource(TileAssets {
        mesh,
        material,
        selected_material,
    });
}

fn spawn_tile(
    commands: &mut Commands,
    tile_assets: &TileAssets,
    container: Entity,
    id: TileId,
    transform: Transform,
) -> Entity {
    commands
        .spawn((
            GridTile { id },
            Mesh3d(tile_assets.mesh.clone()),
            MeshMaterial3d(tile_assets.material.clone()),
            transform,
            Name::new(format!("Tile {}", id)),
            ChildOf(container),
        ))
        .id()
}

/// System that applies `TileChanged` messages to the scene
pub fn apply_tile_changes_system(
    mut commands: Commands,
    mut tile_changed: MessageReader<TileChanged>,
    tile_assets: Option<Res<TileAssets>>,
    grid_settings: Res<EditorGridSettings>,
    query_tiles: Query<(Entity, &GridTile)>,
    query_container: Query<Entity, With<TileContainer>>,
    mut container: Local<Option<Entity>>,
) {
    if tile_changed.is_empty() {
        return;
    }
    let Some(tile_assets) = tile_assets else {
        return;
    };

    let container = match *container {
        Some(entity) if query_container.contains(entity) => entity,
        _ => {
            let entity = query_container.iter().next().unwrap_or_else(|| {
                log::debug!("[GridEditor] Creating tile container");
                commands
                    .spawn((
                        TileContainer,
                        Transform::default(),
                        Visibility::default(),
                        Name::new("Grid"),
                    ))
                    .id()
            });
            *container = Some(entity);
            entity
        }
    };

    let mut entities: HashMap<TileId, Entity> = query_tiles
        .iter()
        .map(|(entity, tile)| (tile.id, entity))
        .collect();
    let cell_size = grid_settings.grid.cell_size;

    for TileChanged(change) in tile_changed.read() {
        match *change {
            TileChange::Created { id, position } => {
                let transform = tile_transform(position, cell_size);
                if let Some(&entity) = entities.get(&id) {
                    commands.entity(entity).insert(transform);
                } else {
                    let entity = spawn_tile(&mut commands, &tile_assets, container, id, transform);
                    entities.insert(id, entity);
                }
            }
            TileChange::Deleted { id, .. } => {
                if let Some(entity) = entities.remove(&id) {
                    commands.entity(entity).despawn();
                }
            }
            TileChange::Moved { id, to, .. } => {
                if let Some(&entity) = entities.get(&id) {
                    commands.entity(entity).insert(tile_transform(to, cell_size));
                } else {
                    log::warn!("[GridEditor] Moved tile {} has no scene entity", id);
                }
            }
        }
    }
}
