//! Editor Grid System
//!
//! Draws the snapping grid on the ground plane with gizmos, plus an outline
//! of the cell under the cursor.
//!
//! Snapped points always sit at the visual center of a cell: with
//! center-snap off the lines run along the lattice, with center-snap on they
//! are shifted by half a cell.

use bevy::prelude::*;

use crate::grid_editor::{
    placement::GridSettings,
    resources::{EditorGridSettings, GridEditorState, HoveredCell},
};

/// Line intensity is raised on every tenth line
const MAJOR_LINE_EVERY: i64 = 10;
/// Drawing more lines than this per axis is just noise
const MAX_LINES_PER_AXIS: i64 = 2000;
const HOVER_LIFT: f32 = 0.01;

/// Positions of the grid lines along one axis within `[-half_extent, half_extent]`.
/// Each entry carries the lattice index so major lines can be picked out.
pub fn grid_line_positions(cell: f32, half_extent: f32, center_snap: bool) -> Vec<(i64, f32)> {
    let offset = if center_snap { cell / 2.0 } else { 0.0 };
    let first = ((-half_extent - offset) / cell).ceil() as i64;
    let last = ((half_extent - offset) / cell).floor() as i64;
    if last < first || last - first > MAX_LINES_PER_AXIS {
        return Vec::new();
    }

    (first..=last)
        .map(|index| (index, index as f32 * cell + offset))
        .collect()
}

fn line_color(base: Color, index: i64) -> Color {
    if index % MAJOR_LINE_EVERY == 0 {
        base.with_alpha(0.8)
    } else {
        base
    }
}

/// System that renders the editor grid using gizmos
pub fn grid_render_system(
    editor_state: Res<GridEditorState>,
    grid_settings: Res<EditorGridSettings>,
    mut gizmos: Gizmos,
) {
    if !editor_state.enabled || !grid_settings.visible {
        return;
    }

    let GridSettings { cell_size, center_snap } = grid_settings.grid;
    let half_extent = grid_settings.extent / 2.0;

    if grid_settings.grid.snapping_enabled() {
        // Lines along X, spaced by cell depth
        for (index, z) in grid_line_positions(cell_size.y, half_extent, center_snap) {
            gizmos.line(
                Vec3::new(-half_extent, 0.0, z),
                Vec3::new(half_extent, 0.0, z),
                line_color(grid_settings.color, index),
            );
        }

        // Lines along Z, spaced by cell width
        for (index, x) in grid_line_positions(cell_size.x, half_extent, center_snap) {
            gizmos.line(
                Vec3::new(x, 0.0, -half_extent),
                Vec3::new(x, 0.0, half_extent),
                line_color(grid_settings.color, index),
            );
        }
    }

    // Origin axes for reference
    let axis_length = 5.0;
    gizmos.line(Vec3::ZERO, Vec3::X * axis_length, Color::srgb(1.0, 0.0, 0.0));
    gizmos.line(Vec3::ZERO, Vec3::Y * axis_length, Color::srgb(0.0, 1.0, 0.0));
    gizmos.line(Vec3::ZERO, Vec3::Z * axis_length, Color::srgb(0.0, 0.0, 1.0));
}

/// System that outlines the cell a click would target
pub fn hovered_cell_system(
    editor_state: Res<GridEditorState>,
    grid_settings: Res<EditorGridSettings>,
    hovered_cell: Res<HoveredCell>,
    mut gizmos: Gizmos,
) {
    if !editor_state.enabled {
        return;
    }
    let Some(center) = hovered_cell.0 else {
        return;
    };

    let center = center + Vec3::Y * HOVER_LIFT;
    let color = if grid_settings.bounds.contains(center) {
        Color::srgb(1.0, 0.85, 0.2)
    } else {
        Color::srgb(0.9, 0.2, 0.2)
    };

    if !grid_settings.grid.snapping_enabled() {
        let arm = 0.25;
        gizmos.line(center - Vec3::X * arm, center + Vec3::X * arm, color);
        gizmos.line(center - Vec3::Z * arm, center + Vec3::Z * arm, color);
        return;
    }

    let half = grid_settings.grid.cell_size / 2.0;
    let corners = [
        center + Vec3::new(-half.x, 0.0, -half.y),
        center + Vec3::new(half.x, 0.0, -half.y),
        center + Vec3::new(half.x, 0.0, half.y),
        center + Vec3::new(-half.x, 0.0, half.y),
    ];
    for (start, end) in corners.iter().zip(corners.iter().cycle().skip(1)) {
        gizmos.line(*start, *end, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_editor::placement::snap_to_grid;

    #[test]
    fn lattice_lines_cover_extent() {
        let lines = grid_line_positions(1.0, 2.0, false);
        let positions: Vec<f32> = lines.iter().map(|(_, position)| *position).collect();
        assert_eq!(positions, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn center_snap_shifts_lines_by_half_a_cell() {
        let lines = grid_line_positions(1.0, 2.0, true);
        let positions: Vec<f32> = lines.iter().map(|(_, position)| *position).collect();
        assert_eq!(positions, vec![-1.5, -0.5, 0.5, 1.5]);
    }

    #[test]
    fn snapped_points_fall_between_lines() {
        for center_snap in [false, true] {
            let settings = GridSettings::new(1.0, 1.0, center_snap);
            let lines: Vec<f32> = grid_line_positions(1.0, 10.0, center_snap)
                .into_iter()
                .map(|(_, position)| position)
                .collect();
            let snapped = snap_to_grid(Vec3::new(0.3, 0.0, 0.7), &settings);
            assert!(
                !lines.iter().any(|line| (line - snapped.x).abs() < 1e-4),
                "snapped point sits on a grid line"
            );
        }
    }

    #[test]
    fn absurd_density_draws_nothing() {
        assert!(grid_line_positions(0.001, 1000.0, false).is_empty());
    }
}
