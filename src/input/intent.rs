//! Keyboard-to-intent translation.

use bevy::prelude::*;

/// Per-tick input snapshot consumed by the player state machine.
///
/// The movement vector is jointly normalized (unit length or zero), so the
/// simulation never sees a faster diagonal. Everything downstream of this
/// resource is input-device agnostic; a joystick adapter would write the
/// same fields.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct ActionIntent {
    /// Desired movement direction, unit length or zero.
    pub move_dir: Vec2,
    /// Punch requested this tick.
    pub punch: bool,
    /// Slide requested this tick.
    pub slide: bool,
}

impl ActionIntent {
    /// Whether any movement is being requested.
    pub fn moving(&self) -> bool {
        self.move_dir != Vec2::ZERO
    }
}

/// Build the tick's [`ActionIntent`] from the keyboard.
///
/// WASD or arrows to move, J to punch, Shift to slide.
pub fn read_keyboard_intent(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<ActionIntent>,
) {
    let mut direction = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        direction.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        direction.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }

    // Normalize to prevent faster diagonal movement
    intent.move_dir = direction.normalize_or_zero();
    intent.punch = keyboard.pressed(KeyCode::KeyJ);
    intent.slide = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
}
