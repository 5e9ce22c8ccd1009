//! Scene view camera
//!
//! A fixed-angle camera looking down at the ground plane. Arrow keys pan it
//! across the grid, PageUp/PageDown move it closer or further away.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::grid_editor::components::EditorCamera;

const PAN_SPEED: f32 = 12.0;
const ZOOM_SPEED: f32 = 15.0;
const MIN_HEIGHT: f32 = 2.0;
const MAX_HEIGHT: f32 = 200.0;

/// Spawn the editor camera and a light, looking at `focus`
pub fn spawn_editor_camera(commands: &mut Commands, focus: Vec3) {
    commands.spawn((
        Camera3d::default(),
        EditorCamera,
        Transform::from_translation(focus + Vec3::new(0.0, 18.0, 14.0)).looking_at(focus, Vec3::Y),
        Name::new("Editor Camera"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: false,
            ..Default::default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Editor Light"),
    ));
}

/// Camera movement for one frame from the pressed keys
pub fn camera_motion(keyboard: &ButtonInput<KeyCode>) -> Vec3 {
    let mut motion = Vec3::ZERO;
    if keyboard.pressed(KeyCode::ArrowLeft) {
        motion.x -= PAN_SPEED;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        motion.x += PAN_SPEED;
    }
    if keyboard.pressed(KeyCode::ArrowUp) {
        motion.z -= PAN_SPEED;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        motion.z += PAN_SPEED;
    }
    if keyboard.pressed(KeyCode::PageUp) {
        motion.y -= ZOOM_SPEED;
    }
    if keyboard.pressed(KeyCode::PageDown) {
        motion.y += ZOOM_SPEED;
    }
    motion
}

pub fn editor_camera_system(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut egui_contexts: EguiContexts,
    mut query_camera: Query<&mut Transform, With<EditorCamera>>,
) {
    let keyboard_free = egui_contexts
        .ctx_mut()
        .map(|ctx| !ctx.wants_keyboard_input())
        .unwrap_or(true);
    if !keyboard_free {
        return;
    }

    let motion = camera_motion(&keyboard) * time.delta_secs();
    if motion == Vec3::ZERO {
        return;
    }

    for mut transform in query_camera.iter_mut() {
        // Zoom along the view direction so the focus stays centered
        let forward = transform.forward();
        let height = transform.translation.y;
        let target_height = (height + motion.y).clamp(MIN_HEIGHT, MAX_HEIGHT);
        if forward.y.abs() > f32::EPSILON {
            transform.translation += *forward * ((height - target_height) / -forward.y);
        }
        transform.translation.x += motion.x;
        transform.translation.z += motion.z;
    }
}
