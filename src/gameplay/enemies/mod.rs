//! Enemy archetype, sprite variants, and crowd behavior.

pub mod flocking;
pub mod waves;

use avian2d::prelude::*;
use bevy::prelude::*;

use super::arena::TILE_SIZE;
use super::combat::status_bars::{ACTOR_BAR_HEIGHT, ACTOR_BAR_WIDTH, ACTOR_BAR_Y_OFFSET, StatusBarConfig};
use super::{Health, Movement};
use crate::theme::palette;
use crate::third_party::CollisionLayer;
use crate::{GameState, Z_ACTOR};

// === Constants ===

/// Enemy movement speed (world units per second).
pub const ENEMY_SPEED: f32 = 120.0;

// === Components ===

/// Marker for enemy entities.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Enemy;

/// Sprite-variant selector. Only affects tinting, never behavior.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct EnemyVariant(pub u32);

impl EnemyVariant {
    /// Tint for this variant, cycling through the enemy palette.
    #[must_use]
    pub fn color(self) -> Color {
        let tints = palette::ENEMY_TINTS;
        tints[self.0 as usize % tints.len()]
    }
}

// === Spawning ===

/// Spawn an enemy with all required components.
/// Single source of truth for the enemy archetype. Enemies are dynamic
/// pushboxes colliding only with each other, so the crowd shoves itself
/// apart instead of stacking while the casters stay unpushable.
pub fn spawn_enemy(commands: &mut Commands, variant: u32, position: Vec2, health: f32) -> Entity {
    commands
        .spawn((
            Name::new(format!("Enemy {variant}")),
            Enemy,
            EnemyVariant(variant),
            Movement { speed: ENEMY_SPEED },
            Health::new(health),
            StatusBarConfig {
                width: ACTOR_BAR_WIDTH,
                height: ACTOR_BAR_HEIGHT,
                y_offset: ACTOR_BAR_Y_OFFSET,
            },
            Sprite::from_color(EnemyVariant(variant).color(), Vec2::splat(TILE_SIZE)),
            Transform::from_xyz(position.x, position.y, Z_ACTOR),
            RigidBody::Dynamic,
            Collider::rectangle(TILE_SIZE, TILE_SIZE),
            CollisionLayers::new([CollisionLayer::Crowd], [CollisionLayer::Crowd]),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::ZERO,
            DespawnOnExit(GameState::Gameplay),
        ))
        .id()
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Enemy>().register_type::<EnemyVariant>();

    app.add_plugins((flocking::plugin, waves::plugin));
}
