//! Highlights the tile held by the pointer

use bevy::prelude::*;

use crate::grid_editor::{
    components::{GridTile, SelectedInEditor},
    resources::{GridEditorState, TileAssets},
};

pub fn selection_highlight_system(
    mut commands: Commands,
    editor_state: Res<GridEditorState>,
    tile_assets: Option<Res<TileAssets>>,
    mut query_tiles: Query<(Entity, &GridTile, &mut MeshMaterial3d<StandardMaterial>, Has<SelectedInEditor>)>,
) {
    let Some(tile_assets) = tile_assets else {
        return;
    };
    let selected = editor_state.session.selected_tile();

    for (entity, tile, mut material, is_marked) in query_tiles.iter_mut() {
        let is_selected = selected == Some(tile.id);
        if is_selected == is_marked {
            continue;
        }

        if is_selected {
            commands.entity(entity).insert(SelectedInEditor);
            material.0 = tile_assets.selected_material.clone();
        } else {
            commands.entity(entity).remove::<SelectedInEditor>();
            material.0 = tile_assets.material.clone();
        }
    }
}
