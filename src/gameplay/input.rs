//! Input polling into a frame-local intent snapshot.
//!
//! One gathering system per frame reads the keyboard and active touches;
//! everything downstream consumes only [`MoveIntent`]. Discrete triggers
//! (spell selection, follow toggle, pause) are polled by their own modules.

use bevy::prelude::*;

use crate::{GameSet, gameplay_running};

// === Constants ===

/// Minimum drag length (logical pixels) before a touch registers as movement.
const TOUCH_DEAD_ZONE: f32 = 12.0;

// === Resources ===

/// Frame-local movement intent, rebuilt every frame.
#[derive(Resource, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Touch-drag direction, normalized. Overrides the key intents when set.
    pub drag: Option<Vec2>,
}

impl MoveIntent {
    /// Resolves the snapshot into a movement direction (normalized or zero).
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        if let Some(drag) = self.drag {
            return drag;
        }
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y += 1.0;
        }
        if self.down {
            dir.y -= 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

// === Systems ===

/// Polls keyboard and touch state into the frame's [`MoveIntent`].
fn gather_move_intent(
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    mut intent: ResMut<MoveIntent>,
) {
    intent.up = keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp);
    intent.down = keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);
    intent.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    intent.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);

    intent.drag = touches.iter().next().and_then(|touch| {
        let drag = touch.position() - touch.start_position();
        (drag.length() > TOUCH_DEAD_ZONE).then(|| {
            // Screen-space y grows downward; world-space y grows upward.
            Vec2::new(drag.x, -drag.y).normalize()
        })
    });
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<MoveIntent>().init_resource::<MoveIntent>();

    app.add_systems(
        Update,
        gather_move_intent
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
}
