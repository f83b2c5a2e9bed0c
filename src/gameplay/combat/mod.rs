//! Combat resolution: contact damage, invincibility, death, and defeat.

pub mod status_bars;

use bevy::prelude::*;

use super::apprentice::Apprentice;
use super::arena::TILE_SIZE;
use super::enemies::Enemy;
use super::enemies::waves::{WaveState, WavesSurvived};
use super::player::Player;
use super::{Health, Invincibility};
use crate::{GameSet, GameState, gameplay_running};

// === Constants ===

/// Damage dealt by one enemy contact hit.
pub const ENEMY_DAMAGE: f32 = 10.0;

/// Post-hit grace period for the player.
pub const PLAYER_INVINCIBILITY_SECS: f32 = 0.2;

/// Post-hit grace period for the apprentice.
pub const APPRENTICE_INVINCIBILITY_SECS: f32 = 0.4;

// === Messages ===

/// Fired when an enemy dies.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct EnemyDied {
    pub position: Vec2,
}

// === Pure Functions ===

/// Overlap test between two tile-sized boxes centered on sprite centers.
#[must_use]
pub fn boxes_overlap(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < TILE_SIZE && (a.y - b.y).abs() < TILE_SIZE
}

// === Systems ===

/// Counts down invincibility grace periods.
fn tick_invincibility(time: Res<Time>, mut timers: Query<&mut Invincibility>) {
    for mut invincibility in &mut timers {
        invincibility.tick(time.delta_secs());
    }
}

/// Applies contact damage from overlapping enemies to vulnerable characters.
/// The first hit of a frame triggers invincibility, so a character takes at
/// most one hit per grace period however many enemies pile on.
fn contact_damage(
    enemies: Query<&Transform, With<Enemy>>,
    mut characters: Query<
        (&Transform, &mut Health, &mut Invincibility, Has<Player>),
        (Without<Enemy>, Or<(With<Player>, With<Apprentice>)>),
    >,
) {
    for (transform, mut health, mut invincibility, is_player) in &mut characters {
        if invincibility.is_active() {
            continue;
        }
        let center = transform.translation.truncate();
        for enemy_transform in &enemies {
            if !boxes_overlap(center, enemy_transform.translation.truncate()) {
                continue;
            }
            health.damage(ENEMY_DAMAGE);
            invincibility.trigger(if is_player {
                PLAYER_INVINCIBILITY_SECS
            } else {
                APPRENTICE_INVINCIBILITY_SECS
            });
            break;
        }
    }
}

/// Marks dead enemies: a message for the audio layer, then a deferred
/// despawn applied at the frame's sync point — the collection is never
/// mutated while anything is still iterating it.
fn enemy_death(
    mut commands: Commands,
    enemies: Query<(Entity, &Transform, &Health), With<Enemy>>,
    mut messages: MessageWriter<EnemyDied>,
) {
    for (entity, transform, health) in &enemies {
        if health.is_depleted() {
            messages.write(EnemyDied {
                position: transform.translation.truncate(),
            });
            commands.entity(entity).despawn();
        }
    }
}

/// Ends the run when either character falls.
fn detect_defeat(
    characters: Query<&Health, Or<(With<Player>, With<Apprentice>)>>,
    wave_state: Res<WaveState>,
    mut survived: ResMut<WavesSurvived>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if characters.iter().any(Health::is_depleted) {
        survived.0 = wave_state.wave;
        info!("defeated on wave {}", wave_state.wave);
        next_state.set(GameState::Ending);
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.add_message::<EnemyDied>();

    app.add_systems(
        Update,
        (tick_invincibility, contact_damage)
            .chain()
            .in_set(GameSet::Combat)
            .run_if(gameplay_running),
    );

    app.add_systems(
        Update,
        (enemy_death, detect_defeat)
            .in_set(GameSet::Death)
            .run_if(gameplay_running),
    );

    app.add_plugins(status_bars::plugin);
}
