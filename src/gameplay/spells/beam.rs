//! Ray beam rendering: a stretched sprite between the two caster anchors.

use bevy::prelude::*;

use super::{SpellCaster, SpellKind, ray_anchor};
use crate::gameplay::apprentice::Apprentice;
use crate::gameplay::player::Player;
use crate::theme::palette;
use crate::{GameSet, GameState, Z_BEAM, gameplay_running};

// === Constants ===

/// Beam sprite thickness (pixels).
const BEAM_THICKNESS: f32 = 6.0;

// === Components ===

/// Marker for the beam sprite.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Beam;

// === Systems ===

/// Stretches the beam between the anchors while casting; removes it otherwise.
fn update_beam(
    mut commands: Commands,
    players: Query<(&Transform, &SpellCaster), With<Player>>,
    apprentices: Query<&Transform, (With<Apprentice>, Without<Player>)>,
    mut beams: Query<
        (Entity, &mut Transform, &mut Sprite),
        (With<Beam>, Without<Player>, Without<Apprentice>),
    >,
) {
    let Ok((player_transform, caster)) = players.single() else {
        return;
    };
    let Ok(apprentice_transform) = apprentices.single() else {
        return;
    };

    if !caster.casting {
        for (entity, ..) in &beams {
            commands.entity(entity).despawn();
        }
        return;
    }

    let a = ray_anchor(player_transform.translation.truncate());
    let b = ray_anchor(apprentice_transform.translation.truncate());
    let delta = b - a;
    let midpoint = (a + b) / 2.0;
    let rotation = Quat::from_rotation_z(delta.y.atan2(delta.x));
    let size = Vec2::new(delta.length(), BEAM_THICKNESS);
    let color = match caster.active {
        SpellKind::ManaRay => palette::MANA_BEAM,
        SpellKind::DeathRay => palette::DEATH_BEAM,
        SpellKind::None => return,
    };

    if let Ok((_, mut transform, mut sprite)) = beams.single_mut() {
        transform.translation = midpoint.extend(Z_BEAM);
        transform.rotation = rotation;
        sprite.custom_size = Some(size);
        sprite.color = color;
    } else {
        commands.spawn((
            Name::new("Spell Beam"),
            Beam,
            Sprite::from_color(color, size),
            Transform {
                translation: midpoint.extend(Z_BEAM),
                rotation,
                ..default()
            },
            DespawnOnExit(GameState::Gameplay),
        ));
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Beam>();

    app.add_systems(
        Update,
        update_beam.in_set(GameSet::Ui).run_if(gameplay_running),
    );
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::testing::assert_entity_count;

    fn create_beam_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.add_systems(Update, update_beam);
        app
    }

    fn spawn_casters(world: &mut World, casting: bool) {
        let _ = world.spawn((
            Player,
            SpellCaster {
                active: SpellKind::ManaRay,
                casting,
            },
            Transform::from_xyz(0.0, 0.0, 0.0),
        ));
        let _ = world.spawn((Apprentice, Transform::from_xyz(120.0, 0.0, 0.0)));
    }

    #[test]
    fn casting_spawns_a_single_beam() {
        let mut app = create_beam_test_app();
        spawn_casters(app.world_mut(), true);

        app.update();
        app.update();

        assert_entity_count::<With<Beam>>(&mut app, 1);
    }

    #[test]
    fn idle_caster_has_no_beam() {
        let mut app = create_beam_test_app();
        spawn_casters(app.world_mut(), false);

        app.update();

        assert_entity_count::<With<Beam>>(&mut app, 0);
    }

    #[test]
    fn beam_spans_the_anchor_gap() {
        let mut app = create_beam_test_app();
        spawn_casters(app.world_mut(), true);

        app.update();
        app.update();

        let mut query = app.world_mut().query_filtered::<&Sprite, With<Beam>>();
        let sprite = query.single(app.world()).unwrap();
        let size = sprite.custom_size.expect("beam has an explicit size");
        assert!((size.x - 120.0).abs() < 1e-4);
    }
}
