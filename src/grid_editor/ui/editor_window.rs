//! The "Grid Editor" window: key bindings, grid settings and history

use bevy_egui::egui;

use crate::grid_editor::{
    placement::MIN_CELL_SIZE,
    resources::{EditorGridSettings, GridEditorState},
};

/// What the user asked for through the window buttons
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EditorWindowResponse {
    #[default]
    None,
    Undo,
    Redo,
}

const BINDINGS: [(&str, &str); 4] = [
    ("Create Tile", "Ctrl + Click"),
    ("Delete Tile", "Shift + Click"),
    ("Move Tile", "Click + Drag"),
    ("Drop Tile", "Escape"),
];

pub fn editor_window(
    ctx: &egui::Context,
    editor_state: &GridEditorState,
    grid_settings: &mut EditorGridSettings,
    enabled: &mut bool,
) -> EditorWindowResponse {
    let mut response = EditorWindowResponse::None;

    egui::Window::new("Grid Editor")
        .default_width(260.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.checkbox(enabled, "Editing enabled (F2)");
            ui.separator();

            ui.heading("Controls");
            egui::Grid::new("grid_editor_bindings")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (action, binding) in BINDINGS {
                        ui.label(action);
                        ui.label(egui::RichText::new(binding).monospace());
                        ui.end_row();
                    }
                });
            ui.separator();

            ui.heading("Grid");
            grid_settings_section(ui, grid_settings);
            ui.separator();

            ui.horizontal(|ui| {
                let undo = ui.add_enabled(editor_state.can_undo(), egui::Button::new("Undo").shortcut_text("Ctrl+Z"));
                if undo.clicked() {
                    log::info!("[GridEditor] Undo clicked");
                    response = EditorWindowResponse::Undo;
                }

                let redo = ui.add_enabled(editor_state.can_redo(), egui::Button::new("Redo").shortcut_text("Ctrl+Y"));
                if redo.clicked() {
                    log::info!("[GridEditor] Redo clicked");
                    response = EditorWindowResponse::Redo;
                }
            });
        });

    response
}

fn grid_settings_section(ui: &mut egui::Ui, grid_settings: &mut EditorGridSettings) {
    egui::Grid::new("grid_editor_settings")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Cell width");
            ui.add(
                egui::DragValue::new(&mut grid_settings.grid.cell_size.x)
                    .speed(0.05)
                    .range(0.0..=100.0),
            );
            ui.end_row();

            ui.label("Cell depth");
            ui.add(
                egui::DragValue::new(&mut grid_settings.grid.cell_size.y)
                    .speed(0.05)
                    .range(0.0..=100.0),
            );
            ui.end_row();

            ui.label("Extent");
            ui.add(
                egui::DragValue::new(&mut grid_settings.extent)
                    .speed(1.0)
                    .range(1.0..=1000.0),
            );
            ui.end_row();
        });

    ui.checkbox(&mut grid_settings.grid.center_snap, "Snap to lattice points");
    ui.checkbox(&mut grid_settings.visible, "Show grid (G)");

    if !grid_settings.grid.snapping_enabled() {
        ui.label(
            egui::RichText::new(format!(
                "Snapping is off while a cell dimension is {} or less",
                MIN_CELL_SIZE
            ))
            .color(egui::Color32::YELLOW),
        );
    }
}
