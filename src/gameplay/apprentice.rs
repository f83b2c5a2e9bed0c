//! Apprentice companion: archetype and follow behavior.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::arena::{Confined, TILE_SIZE};
use super::combat::status_bars::{ACTOR_BAR_HEIGHT, ACTOR_BAR_WIDTH, ACTOR_BAR_Y_OFFSET, StatusBarConfig};
use super::player::Player;
use super::{Health, Invincibility, Mana, Movement};
use crate::theme::palette;
use crate::{GameSet, GameState, Z_ACTOR, gameplay_running};

// === Constants ===

/// Apprentice movement speed (world units per second).
pub const APPRENTICE_SPEED: f32 = 180.0;

/// Apprentice maximum health.
pub const APPRENTICE_MAX_HEALTH: f32 = 100.0;

/// Apprentice maximum mana.
pub const APPRENTICE_MAX_MANA: f32 = 50.0;

/// Apprentice mana regeneration (per second, always).
pub const APPRENTICE_MANA_REGEN: f32 = 5.0;

/// A following apprentice starts moving once farther than this from the player.
pub const FOLLOW_RESUME_DISTANCE: f32 = TILE_SIZE * 1.5;

// === Components ===

/// Marker for the apprentice.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Apprentice;

/// Whether the apprentice currently seeks the player.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct FollowPlayer(pub bool);

// === Spawning ===

/// Spawn the apprentice with all required components.
/// Single source of truth for the apprentice archetype.
pub fn spawn_apprentice(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            Name::new("Apprentice"),
            Apprentice,
            FollowPlayer(true),
            Confined,
            Movement {
                speed: APPRENTICE_SPEED,
            },
            Health::new(APPRENTICE_MAX_HEALTH),
            Mana::new(APPRENTICE_MAX_MANA, APPRENTICE_MANA_REGEN),
            Invincibility::default(),
            StatusBarConfig {
                width: ACTOR_BAR_WIDTH,
                height: ACTOR_BAR_HEIGHT,
                y_offset: ACTOR_BAR_Y_OFFSET,
            },
            Sprite::from_color(palette::APPRENTICE, Vec2::splat(TILE_SIZE)),
            Transform::from_xyz(position.x, position.y, Z_ACTOR),
            RigidBody::Kinematic,
            LinearVelocity::ZERO,
            DespawnOnExit(GameState::Gameplay),
        ))
        .id()
}

// === Systems ===

fn setup_apprentice(mut commands: Commands) {
    let _ = spawn_apprentice(&mut commands, Vec2::new(TILE_SIZE, 0.0));
}

/// Toggles the follow behavior on a key press.
fn toggle_follow(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut apprentices: Query<&mut FollowPlayer, With<Apprentice>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyF) {
        return;
    }
    for mut follow in &mut apprentices {
        follow.0 = !follow.0;
    }
}

/// Seeks the player while following and farther than the resume distance.
/// A non-following apprentice never moves, whatever the player does.
fn apprentice_follow(
    players: Query<&Transform, With<Player>>,
    mut apprentices: Query<
        (
            &FollowPlayer,
            &Movement,
            &Transform,
            &mut LinearVelocity,
            &mut Sprite,
        ),
        (With<Apprentice>, Without<Player>),
    >,
) {
    let Ok(player_transform) = players.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (follow, movement, transform, mut velocity, mut sprite) in &mut apprentices {
        if !follow.0 {
            velocity.0 = Vec2::ZERO;
            continue;
        }

        let offset = player_pos - transform.translation.truncate();
        let distance = offset.length();
        if distance > FOLLOW_RESUME_DISTANCE {
            let dir = offset / distance;
            velocity.0 = dir * movement.speed;
            if dir.x != 0.0 {
                sprite.flip_x = dir.x < 0.0;
            }
        } else {
            velocity.0 = Vec2::ZERO;
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Apprentice>().register_type::<FollowPlayer>();

    app.add_systems(OnEnter(GameState::Gameplay), setup_apprentice);

    app.add_systems(
        Update,
        (
            toggle_follow.in_set(GameSet::Input),
            apprentice_follow.in_set(GameSet::Movement),
        )
            .run_if(gameplay_running),
    );
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn create_follow_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, apprentice_follow);
        app
    }

    fn spawn_test_player_at(world: &mut World, x: f32) -> Entity {
        world
            .spawn((
                Player,
                Transform::from_xyz(x, 0.0, 0.0),
            ))
            .id()
    }

    fn spawn_test_apprentice_at(world: &mut World, x: f32, following: bool) -> Entity {
        world
            .spawn((
                Apprentice,
                FollowPlayer(following),
                Movement {
                    speed: APPRENTICE_SPEED,
                },
                Sprite::from_color(Color::WHITE, Vec2::splat(TILE_SIZE)),
                Transform::from_xyz(x, 0.0, 0.0),
                LinearVelocity::ZERO,
            ))
            .id()
    }

    #[test]
    fn distant_following_apprentice_seeks_player() {
        let mut app = create_follow_test_app();
        spawn_test_player_at(app.world_mut(), 500.0);
        let apprentice = spawn_test_apprentice_at(app.world_mut(), 0.0, true);

        app.update();

        let velocity = app.world().get::<LinearVelocity>(apprentice).unwrap();
        assert!(
            velocity.0.x > 0.0,
            "apprentice should seek the player, got {:?}",
            velocity.0
        );
        assert!((velocity.0.length() - APPRENTICE_SPEED).abs() < 0.01);
    }

    #[test]
    fn close_apprentice_stays_put() {
        let mut app = create_follow_test_app();
        spawn_test_player_at(app.world_mut(), TILE_SIZE);
        let apprentice = spawn_test_apprentice_at(app.world_mut(), 0.0, true);

        app.update();

        let velocity = app.world().get::<LinearVelocity>(apprentice).unwrap();
        assert!(velocity.0.length() < f32::EPSILON);
    }

    #[test]
    fn apprentice_resumes_just_past_the_threshold() {
        let mut app = create_follow_test_app();
        spawn_test_player_at(app.world_mut(), FOLLOW_RESUME_DISTANCE + 1.0);
        let apprentice = spawn_test_apprentice_at(app.world_mut(), 0.0, true);

        app.update();

        let velocity = app.world().get::<LinearVelocity>(apprentice).unwrap();
        assert!(velocity.0.x > 0.0);
    }

    #[test]
    fn non_following_apprentice_never_moves() {
        let mut app = create_follow_test_app();
        spawn_test_player_at(app.world_mut(), 700.0);
        let apprentice = spawn_test_apprentice_at(app.world_mut(), 0.0, false);

        app.update();

        let velocity = app.world().get::<LinearVelocity>(apprentice).unwrap();
        assert!(
            velocity.0.length() < f32::EPSILON,
            "follow is off; apprentice must hold still, got {:?}",
            velocity.0
        );
    }

    #[test]
    fn toggle_key_flips_follow_state() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_systems(Update, toggle_follow);

        let apprentice = spawn_test_apprentice_at(app.world_mut(), 0.0, true);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyF);
        app.update();

        assert!(!app.world().get::<FollowPlayer>(apprentice).unwrap().0);
    }
}
