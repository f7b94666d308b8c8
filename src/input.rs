//! Input module - PlayerInput resource and capture_input system

use bevy::prelude::*;

/// Continuous movement axes for one paddle, each in {-1, 0, +1}.
/// Court space runs y-down, so "up the screen" is a negative y axis.
#[derive(Default, Clone, Copy, Debug)]
pub struct PadAxes {
    pub move_x: f32,
    pub move_y: f32,
}

/// Buffered keyboard state for the active mode
#[derive(Resource, Default)]
pub struct PlayerInput {
    /// WASD; drills route these axes to their single paddle
    pub top: PadAxes,
    /// Arrow keys
    pub bottom: PadAxes,
    pub serve_held: bool,
    /// Key-down edge, accumulated until the serve system consumes it
    pub serve_pressed: bool,
    /// Key-up edge, accumulated until the serve system consumes it
    pub serve_released: bool,
}

/// Runs in Update to capture keyboard state before the fixed tick reads it
pub fn capture_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    let mut top = PadAxes::default();
    if keyboard.pressed(KeyCode::KeyA) {
        top.move_x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        top.move_x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) {
        top.move_y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        top.move_y += 1.0;
    }
    input.top = top;

    let mut bottom = PadAxes::default();
    if keyboard.pressed(KeyCode::ArrowLeft) {
        bottom.move_x -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        bottom.move_x += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowUp) {
        bottom.move_y -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        bottom.move_y += 1.0;
    }
    input.bottom = bottom;

    // Serve key edges accumulate until consumed, held state overwrites
    if keyboard.just_pressed(KeyCode::Space) {
        input.serve_pressed = true;
    }
    if keyboard.just_released(KeyCode::Space) {
        input.serve_released = true;
    }
    input.serve_held = keyboard.pressed(KeyCode::Space);
}
