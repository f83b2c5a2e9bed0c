//! Arena layout: the single-screen play field, background, and bounds.

use bevy::prelude::*;

use crate::theme::palette;
use crate::{GameSet, GameState, Z_ARENA, gameplay_running};

// === Constants ===

/// Side length of one tile in world units. Actor sprites are one tile square.
pub const TILE_SIZE: f32 = 64.0;

/// Arena width in world units (one 800×450 window).
pub const ARENA_WIDTH: f32 = 800.0;

/// Arena height in world units.
pub const ARENA_HEIGHT: f32 = 450.0;

/// Center of the arena in world coordinates.
pub const ARENA_CENTER: Vec2 = Vec2::ZERO;

// === Components ===

/// Marker: this entity's center is clamped into the arena every frame.
/// Carried by the player and apprentice; enemies may roam past the edges.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Confined;

// === Pure Functions ===

/// Clamps a position so a tile-sized sprite stays fully inside the arena.
#[must_use]
pub fn clamp_to_arena(pos: Vec2) -> Vec2 {
    let half_w = ARENA_WIDTH / 2.0 - TILE_SIZE / 2.0;
    let half_h = ARENA_HEIGHT / 2.0 - TILE_SIZE / 2.0;
    Vec2::new(pos.x.clamp(-half_w, half_w), pos.y.clamp(-half_h, half_h))
}

// === Systems ===

fn setup_arena(mut commands: Commands) {
    commands.spawn((
        Name::new("Arena Background"),
        Sprite::from_color(
            palette::ARENA_BACKGROUND,
            Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
        ),
        Transform::from_xyz(ARENA_CENTER.x, ARENA_CENTER.y, Z_ARENA),
        DespawnOnExit(GameState::Gameplay),
    ));
}

/// Pulls confined actors back inside the arena after movement.
fn confine_actors(mut actors: Query<&mut Transform, With<Confined>>) {
    for mut transform in &mut actors {
        let clamped = clamp_to_arena(transform.translation.truncate());
        transform.translation.x = clamped.x;
        transform.translation.y = clamped.y;
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Confined>();

    app.add_systems(OnEnter(GameState::Gameplay), setup_arena);

    app.add_systems(
        Update,
        confine_actors
            .in_set(GameSet::Movement)
            .run_if(gameplay_running),
    );
}
