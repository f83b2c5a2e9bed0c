//! Enemy steering: seek the player with local separation from the crowd.
//!
//! Each enemy walks straight at the player, nudged apart from neighbors
//! closer than one tile so the wave arrives as a loose cluster.

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use super::Enemy;
use crate::gameplay::Movement;
use crate::gameplay::arena::TILE_SIZE;
use crate::gameplay::player::Player;
use crate::{GameSet, gameplay_running};

// === Constants ===

/// Neighbors within this radius contribute separation (one tile).
pub const SEPARATION_RADIUS: f32 = TILE_SIZE;

/// Repulsion weight numerator; closer neighbors push harder.
const SEPARATION_WEIGHT: f32 = TILE_SIZE / 1.5;

/// Separation magnitude bounds, as fractions of the enemy's speed. The floor
/// keeps separation from vanishing entirely; the ceiling keeps point-blank
/// neighbors from launching each other.
const SEPARATION_MIN_FACTOR: f32 = 0.0005;
const SEPARATION_MAX_FACTOR: f32 = 0.5;

/// Enemies whose center is within this distance of the player stop advancing.
pub const ENGAGE_RADIUS: f32 = TILE_SIZE;

/// Below this distance two enemies are treated as coincident and contribute
/// nothing (the repulsion direction would be undefined).
const COINCIDENT_EPSILON: f32 = 1e-4;

// === Pure Functions ===

/// Average inverse-distance repulsion from neighbors within one tile,
/// clamped into `[speed * 0.0005, speed * 0.5]`. Zero when nothing
/// contributes.
#[must_use]
pub fn separation(position: Vec2, speed: f32, neighbors: &[Vec2]) -> Vec2 {
    let mut push = Vec2::ZERO;
    let mut contributors = 0u32;
    for &neighbor in neighbors {
        let offset = position - neighbor;
        let distance = offset.length();
        if distance >= SEPARATION_RADIUS || distance < COINCIDENT_EPSILON {
            continue;
        }
        push += offset / distance * (SEPARATION_WEIGHT / distance);
        contributors += 1;
    }
    if contributors == 0 {
        return Vec2::ZERO;
    }

    let averaged = push / contributors as f32;
    if averaged.length_squared() < COINCIDENT_EPSILON {
        // Symmetric pushes cancelled out; no usable direction.
        return Vec2::ZERO;
    }
    averaged.clamp_length(speed * SEPARATION_MIN_FACTOR, speed * SEPARATION_MAX_FACTOR)
}

/// Steering direction: unit seek toward the player plus the clamped
/// separation. Deliberately unnormalized — separation may partly cancel or
/// reinforce the approach.
#[must_use]
pub fn steer(position: Vec2, speed: f32, player: Vec2, neighbors: &[Vec2]) -> Vec2 {
    (player - position).normalize_or_zero() + separation(position, speed, neighbors)
}

// === Systems ===

/// Writes each enemy's velocity from the steering rule. Positions are
/// snapshotted first so every enemy sees the same frame's neighbors.
fn enemy_steering(
    players: Query<&Transform, With<Player>>,
    mut enemies: Query<
        (
            Entity,
            &Transform,
            &Movement,
            &mut LinearVelocity,
            &mut Sprite,
        ),
        (With<Enemy>, Without<Player>),
    >,
) {
    let Ok(player_transform) = players.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    let snapshots: Vec<(Entity, Vec2)> = enemies
        .iter()
        .map(|(entity, transform, ..)| (entity, transform.translation.truncate()))
        .collect();

    for (entity, transform, movement, mut velocity, mut sprite) in &mut enemies {
        let position = transform.translation.truncate();
        let to_player = player_pos - position;

        if to_player.length() <= ENGAGE_RADIUS {
            velocity.0 = Vec2::ZERO;
        } else {
            let neighbors: Vec<Vec2> = snapshots
                .iter()
                .filter(|(other, _)| *other != entity)
                .map(|(_, pos)| *pos)
                .collect();
            velocity.0 = steer(position, movement.speed, player_pos, &neighbors) * movement.speed;
        }

        if to_player.x != 0.0 {
            sprite.flip_x = to_player.x < 0.0;
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        enemy_steering
            .in_set(GameSet::Movement)
            .run_if(gameplay_running),
    );
}
