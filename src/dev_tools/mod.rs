//! Development tools — only included with `cargo run --features dev`.
//!
//! World inspector and a debug enemy spawner. Stripped from release builds.

use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::gameplay::arena::TILE_SIZE;
use crate::gameplay::enemies::spawn_enemy;
use crate::{GameSet, gameplay_running};

/// Number of enemies spawned per E key press.
const ENEMIES_PER_SPAWN: u32 = 3;

/// Debug spawn health, matching an early wave.
const DEBUG_SPAWN_HEALTH: f32 = 60.0;

fn debug_spawn_enemies(keyboard: Res<ButtonInput<KeyCode>>, mut commands: Commands) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }

    for i in 0..ENEMIES_PER_SPAWN {
        let position = Vec2::new(300.0, (i as f32 - 1.0) * TILE_SIZE * 1.5);
        let _ = spawn_enemy(&mut commands, i, position, DEBUG_SPAWN_HEALTH);
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((EguiPlugin::default(), WorldInspectorPlugin::new()));

    app.add_systems(
        Update,
        debug_spawn_enemies
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
}
