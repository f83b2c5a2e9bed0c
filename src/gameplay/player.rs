//! Player mage: archetype, movement, and facing.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::arena::{Confined, TILE_SIZE};
use super::combat::status_bars::{ACTOR_BAR_HEIGHT, ACTOR_BAR_WIDTH, ACTOR_BAR_Y_OFFSET, StatusBarConfig};
use super::input::MoveIntent;
use super::spells::SpellCaster;
use super::{Health, Invincibility, Mana, Movement};
use crate::theme::palette;
use crate::{GameSet, GameState, Z_ACTOR, gameplay_running};

// === Constants ===

/// Player movement speed (world units per second).
pub const PLAYER_SPEED: f32 = 200.0;

/// Player maximum health.
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Player maximum mana.
pub const PLAYER_MAX_MANA: f32 = 100.0;

/// Player mana regeneration (per second, while not casting).
pub const PLAYER_MANA_REGEN: f32 = 10.0;

// === Components ===

/// Marker for the player mage.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Player;

// === Spawning ===

/// Spawn the player with all required components.
/// Single source of truth for the player archetype.
pub fn spawn_player(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            Name::new("Player"),
            Player,
            Confined,
            Movement {
                speed: PLAYER_SPEED,
            },
            Health::new(PLAYER_MAX_HEALTH),
            Mana::new(PLAYER_MAX_MANA, PLAYER_MANA_REGEN),
            Invincibility::default(),
            SpellCaster::default(),
            StatusBarConfig {
                width: ACTOR_BAR_WIDTH,
                height: ACTOR_BAR_HEIGHT,
                y_offset: ACTOR_BAR_Y_OFFSET,
            },
            Sprite::from_color(palette::PLAYER, Vec2::splat(TILE_SIZE)),
            Transform::from_xyz(position.x, position.y, Z_ACTOR),
            RigidBody::Kinematic,
            LinearVelocity::ZERO,
            DespawnOnExit(GameState::Gameplay),
        ))
        .id()
}

// === Systems ===

fn setup_player(mut commands: Commands) {
    let _ = spawn_player(&mut commands, Vec2::new(-TILE_SIZE, 0.0));
}

/// Applies the frame's movement intent to the player's velocity and facing.
fn player_movement(
    intent: Res<MoveIntent>,
    mut players: Query<(&Movement, &mut LinearVelocity, &mut Sprite), With<Player>>,
) {
    for (movement, mut velocity, mut sprite) in &mut players {
        let dir = intent.direction();
        velocity.0 = dir * movement.speed;
        if dir.x != 0.0 {
            sprite.flip_x = dir.x < 0.0;
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Player>();

    app.add_systems(OnEnter(GameState::Gameplay), setup_player);

    app.add_systems(
        Update,
        player_movement
            .in_set(GameSet::Movement)
            .run_if(gameplay_running),
    );
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::testing::assert_entity_count;

    fn create_player_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<MoveIntent>();
        app.add_systems(Update, player_movement);
        app
    }

    fn spawn_test_player(world: &mut World) -> Entity {
        world
            .spawn((
                Player,
                Movement {
                    speed: PLAYER_SPEED,
                },
                Sprite::from_color(Color::WHITE, Vec2::splat(TILE_SIZE)),
                LinearVelocity::ZERO,
            ))
            .id()
    }

    #[test]
    fn intent_sets_velocity_at_move_speed() {
        let mut app = create_player_test_app();
        let player = spawn_test_player(app.world_mut());

        app.world_mut().resource_mut::<MoveIntent>().right = true;
        app.update();

        let velocity = app.world().get::<LinearVelocity>(player).unwrap();
        assert!(
            (velocity.0 - Vec2::new(PLAYER_SPEED, 0.0)).length() < f32::EPSILON,
            "expected rightward velocity at move speed, got {:?}",
            velocity.0
        );
    }

    #[test]
    fn idle_intent_stops_the_player() {
        let mut app = create_player_test_app();
        let player = spawn_test_player(app.world_mut());

        app.world_mut().resource_mut::<MoveIntent>().right = true;
        app.update();
        *app.world_mut().resource_mut::<MoveIntent>() = MoveIntent::default();
        app.update();

        let velocity = app.world().get::<LinearVelocity>(player).unwrap();
        assert!(velocity.0.length() < f32::EPSILON);
    }

    #[test]
    fn moving_left_flips_the_sprite() {
        let mut app = create_player_test_app();
        let player = spawn_test_player(app.world_mut());

        app.world_mut().resource_mut::<MoveIntent>().left = true;
        app.update();

        assert!(app.world().get::<Sprite>(player).unwrap().flip_x);

        // Facing persists while moving vertically.
        *app.world_mut().resource_mut::<MoveIntent>() = MoveIntent {
            up: true,
            ..default()
        };
        app.update();
        assert!(app.world().get::<Sprite>(player).unwrap().flip_x);
    }

    #[test]
    fn spawn_player_creates_one_player() {
        let mut app = create_player_test_app();

        let _ = spawn_player(&mut app.world_mut().commands(), Vec2::ZERO);
        app.world_mut().flush();

        assert_entity_count::<With<Player>>(&mut app, 1);
    }
}
