//! Status Bar for the Grid Editor
//!
//! Displays editor state, tile count, selection and grid settings.

use bevy_egui::egui;

use crate::grid_editor::resources::{EditorGridSettings, GridEditorState};

/// Render the status bar (bottom panel)
pub fn editor_status_bar(
    ctx: &egui::Context,
    editor_state: &GridEditorState,
    grid_settings: &EditorGridSettings,
    tile_count: usize,
) {
    egui::TopBottomPanel::bottom("grid_editor_status_bar")
        .exact_height(24.0)
        .show(ctx, |ui| {
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                if editor_state.enabled {
                    ui.label(egui::RichText::new("Editing").strong().color(egui::Color32::GREEN));
                } else {
                    ui.label(egui::RichText::new("Disabled").strong().color(egui::Color32::GRAY));
                }
                ui.separator();

                if editor_state.is_modified {
                    ui.label(egui::RichText::new("● Modified").color(egui::Color32::YELLOW));
                    ui.separator();
                }

                ui.label(format!("Tiles: {}", tile_count));
                ui.separator();

                match editor_state.session.selection() {
                    Some(selection) => ui.label(format!("Holding tile {}", selection.tile)),
                    None => ui.label("No selection"),
                };
                ui.separator();

                let grid = &grid_settings.grid;
                if grid.snapping_enabled() {
                    ui.label(format!(
                        "Grid: {:.2} x {:.2} ({})",
                        grid.cell_size.x,
                        grid.cell_size.y,
                        if grid.center_snap { "lattice" } else { "cell centers" }
                    ));
                } else {
                    ui.label("Grid: snapping off");
                }
            });
        });
}
