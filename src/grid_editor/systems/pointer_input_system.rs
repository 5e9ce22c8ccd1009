//! Scene-view pointer handling
//!
//! Projects the cursor onto the ground plane, turns mouse button state into
//! pointer events and feeds them to the placement controller.

use bevy::{
    input::ButtonInput,
    prelude::*,
    window::PrimaryWindow,
};
use bevy_egui::EguiContexts;

use crate::grid_editor::{
    placement::{EventPhase, Modifiers, PointerEvent, RequestedAction},
    resources::{EditorAction, EditorGridSettings, GridEditorState, HoveredCell, PlacedTiles, TileChanged},
};

/// Intersect the cursor ray with the `y = 0` plane
pub fn cursor_ground_point(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Vec3> {
    let cursor_position = window.cursor_position()?;
    let ray = camera.viewport_to_world(camera_transform, cursor_position).ok()?;
    let distance = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Y))?;
    Some(ray.get_point(distance))
}

pub fn modifiers_from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Modifiers {
    Modifiers {
        ctrl: keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]),
        shift: keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        alt: keyboard.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]),
    }
}

/// Decide which pointer phase this frame represents, if any.
///
/// A drag is only reported on frames where the ground point moved.
fn pointer_phase(
    mouse_input: &ButtonInput<MouseButton>,
    ground_point: Option<Vec3>,
    last_point: Option<Vec3>,
) -> Option<EventPhase> {
    if mouse_input.just_pressed(MouseButton::Left) {
        Some(EventPhase::Down)
    } else if mouse_input.just_released(MouseButton::Left) {
        Some(EventPhase::Up)
    } else if mouse_input.pressed(MouseButton::Left) && ground_point.is_some() && ground_point != last_point {
        Some(EventPhase::Drag)
    } else {
        None
    }
}

/// System that dispatches scene-view clicks and drags to the controller
#[allow(clippy::too_many_arguments)]
pub fn grid_pointer_system(
    mut editor_state: ResMut<GridEditorState>,
    mut tiles: ResMut<PlacedTiles>,
    mut hovered_cell: ResMut<HoveredCell>,
    grid_settings: Res<EditorGridSettings>,
    mut egui_ctx: EguiContexts,
    mouse_input: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    query_window: Query<&Window, With<PrimaryWindow>>,
    query_camera: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut tile_changed: MessageWriter<TileChanged>,
    mut last_point: Local<Option<Vec3>>,
) {
    if !editor_state.enabled {
        hovered_cell.0 = None;
        return;
    }

    let Ok(window) = query_window.single() else {
        return;
    };

    let ground_point = query_camera
        .iter()
        .find_map(|(camera, camera_transform)| cursor_ground_point(window, camera, camera_transform));

    let over_ui = egui_ctx
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
        .unwrap_or(false);

    hovered_cell.0 = if over_ui {
        None
    } else {
        ground_point.map(|point| grid_settings.grid.snap(point))
    };

    let Some(phase) = pointer_phase(&mouse_input, ground_point, *last_point) else {
        return;
    };

    // Clicks on editor panels are not scene clicks, but a drag that ends
    // over a panel must still release its tile.
    if phase == EventPhase::Down && over_ui {
        return;
    }

    let Some(world_point) = ground_point.or(*last_point) else {
        return;
    };
    *last_point = ground_point;

    let event = PointerEvent::new(phase, modifiers_from_keyboard(&keyboard), world_point);
    if event.action() == RequestedAction::CreateRequested
        && !grid_settings.bounds.contains(grid_settings.grid.snap(world_point))
    {
        log::debug!("[Placement] Create at {:?} is outside placement bounds", world_point);
        return;
    }

    let outcome = editor_state
        .session
        .handle(&event, &mut tiles, &grid_settings.grid);

    if outcome.action != RequestedAction::DragRequested && outcome.action != RequestedAction::None {
        log::debug!(
            "[Placement] {} at {:?}: {} change(s)",
            outcome.action.display_name(),
            outcome.target,
            outcome.changes.len()
        );
    }

    for change in &outcome.changes {
        tile_changed.write(TileChanged(*change));
    }

    if !outcome.history.is_empty() {
        log::info!(
            "[Placement] {} registered for undo ({} tile change(s))",
            outcome.action.display_name(),
            outcome.history.len()
        );
        editor_state.push_action(EditorAction {
            label: outcome.action.display_name(),
            changes: outcome.history,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_map_to_down_and_up() {
        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Left);
        assert_eq!(pointer_phase(&mouse, Some(Vec3::ZERO), None), Some(EventPhase::Down));

        mouse.clear();
        mouse.release(MouseButton::Left);
        assert_eq!(pointer_phase(&mouse, Some(Vec3::ZERO), None), Some(EventPhase::Up));
    }

    #[test]
    fn held_button_drags_only_when_point_moves() {
        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Left);
        mouse.clear();

        let here = Some(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(pointer_phase(&mouse, here, here), None);
        assert_eq!(pointer_phase(&mouse, here, Some(Vec3::ZERO)), Some(EventPhase::Drag));
        assert_eq!(pointer_phase(&mouse, None, here), None);
    }

    #[test]
    fn keyboard_modifiers_are_collected() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ControlRight);
        keyboard.press(KeyCode::ShiftLeft);

        let modifiers = modifiers_from_keyboard(&keyboard);
        assert!(modifiers.ctrl);
        assert!(modifiers.shift);
        assert!(!modifiers.alt);
    }
}
