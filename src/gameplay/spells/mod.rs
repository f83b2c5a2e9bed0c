//! Spell casting: a ray channeled between the player's and apprentice's
//! anchors, gated by a shared mana economy.
//!
//! The player selects a spell; selection attempts an immediate cast. A cast
//! sustains frame to frame, draining mana, until it becomes unaffordable or
//! the casters drift out of range — stopping clears only the casting flag,
//! never the selection.

pub mod beam;

use bevy::prelude::*;

use super::apprentice::Apprentice;
use super::enemies::Enemy;
use super::player::Player;
use super::{Health, Mana};
use crate::{GameSet, gameplay_running};

// === Constants ===

/// Vertical offset from sprite center to the casting-ray anchor.
pub const RAY_ANCHOR_Y_OFFSET: f32 = 16.0;

/// Perpendicular distance from the ray segment within which enemies interact.
pub const RAY_HIT_DISTANCE: f32 = 48.0;

/// Death ray damage per second to each enemy inside the band.
pub const DEATH_RAY_DAMAGE: f32 = 40.0;

/// Player mana burned per second per enemy intersecting a mana ray.
pub const MANA_RAY_BURN: f32 = 8.0;

/// Apprentice mana restored per second while a mana ray is sustained.
pub const MANA_RAY_TRANSFER: f32 = 15.0;

// === Types ===

/// Spell selection. `None` is the empty selection with the zero definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum SpellKind {
    /// Nothing selected.
    #[default]
    None,
    /// Channels mana into the apprentice. Enemies crossing the ray burn
    /// player mana instead of taking damage.
    ManaRay,
    /// Damages enemies in the ray band, draining both casters.
    DeathRay,
}

/// Static definition of a spell's costs and reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpellDef {
    /// Mana deducted from the player on initiation.
    pub initial_cost: f32,
    /// Player mana drained per second while sustained.
    pub cost_per_sec: f32,
    /// Maximum anchor-to-anchor distance at which the spell starts or sustains.
    pub activation_distance: f32,
}

/// Look up the immutable definition for a spell kind.
#[must_use]
pub const fn spell_def(kind: SpellKind) -> SpellDef {
    match kind {
        SpellKind::None => SpellDef {
            initial_cost: 0.0,
            cost_per_sec: 0.0,
            activation_distance: 0.0,
        },
        SpellKind::ManaRay => SpellDef {
            initial_cost: 5.0,
            cost_per_sec: 10.0,
            activation_distance: 300.0,
        },
        SpellKind::DeathRay => SpellDef {
            initial_cost: 20.0,
            cost_per_sec: 25.0,
            activation_distance: 250.0,
        },
    }
}

// === Components ===

/// The player's spell state: the selected kind and whether it is sustained.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct SpellCaster {
    pub active: SpellKind,
    pub casting: bool,
}

// === Messages ===

/// Fired when a cast is initiated.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastStarted {
    pub kind: SpellKind,
}

// === Pure Functions ===

/// Casting-ray anchor for a sprite-centered position.
#[must_use]
pub fn ray_anchor(center: Vec2) -> Vec2 {
    center + Vec2::new(0.0, RAY_ANCHOR_Y_OFFSET)
}

/// Shortest distance from `point` to the segment between `a` and `b`.
#[must_use]
pub fn segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Attempts to start the selected spell. Deducts the initial cost on success.
pub fn try_initiate(caster: &mut SpellCaster, player_mana: &mut Mana, anchor_distance: f32) -> bool {
    if caster.casting || caster.active == SpellKind::None {
        return false;
    }
    let def = spell_def(caster.active);
    if anchor_distance > def.activation_distance {
        return false;
    }
    if !player_mana.try_spend(def.initial_cost) {
        return false;
    }
    caster.casting = true;
    true
}

/// Advances the casting state machine by one frame.
///
/// Sustains an active cast (upkeep from the player, mana coupling on the
/// apprentice), stops it when unaffordable or out of range, and otherwise
/// regenerates player mana and re-attempts initiation in the same frame.
/// Returns true when a new cast was initiated this tick.
pub fn cast_tick(
    caster: &mut SpellCaster,
    player_mana: &mut Mana,
    apprentice_mana: &mut Mana,
    anchor_distance: f32,
    dt: f32,
) -> bool {
    // The apprentice regenerates every frame, casting or not.
    apprentice_mana.regen(dt);

    if caster.casting {
        let def = spell_def(caster.active);
        let in_range = anchor_distance <= def.activation_distance;
        if !in_range || !player_mana.try_spend(def.cost_per_sec * dt) {
            caster.casting = false;
            return false;
        }
        match caster.active {
            SpellKind::ManaRay => apprentice_mana.restore(MANA_RAY_TRANSFER * dt),
            SpellKind::DeathRay => {
                apprentice_mana.drain(def.cost_per_sec * dt);
                if apprentice_mana.is_empty() {
                    caster.casting = false;
                }
            }
            SpellKind::None => {}
        }
        return false;
    }

    player_mana.regen(dt);
    try_initiate(caster, player_mana, anchor_distance)
}

// === Systems ===

/// Spell selection keys. Selecting attempts an immediate cast via the
/// same-frame `tick_casting` pass.
fn select_spell(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut casters: Query<&mut SpellCaster, With<Player>>,
) {
    let selection = if keyboard.just_pressed(KeyCode::Digit1) {
        Some(SpellKind::ManaRay)
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        Some(SpellKind::DeathRay)
    } else if keyboard.just_pressed(KeyCode::Digit0) {
        Some(SpellKind::None)
    } else {
        None
    };
    let Some(kind) = selection else {
        return;
    };
    for mut caster in &mut casters {
        if caster.active != kind {
            caster.active = kind;
            caster.casting = false;
        }
    }
}

/// Drives the casting state machine from the two casters' anchors.
fn tick_casting(
    time: Res<Time>,
    mut players: Query<(&Transform, &mut SpellCaster, &mut Mana), (With<Player>, Without<Apprentice>)>,
    mut apprentices: Query<(&Transform, &mut Mana), (With<Apprentice>, Without<Player>)>,
    mut messages: MessageWriter<CastStarted>,
) {
    let Ok((player_transform, mut caster, mut player_mana)) = players.single_mut() else {
        return;
    };
    let Ok((apprentice_transform, mut apprentice_mana)) = apprentices.single_mut() else {
        return;
    };

    let anchor_distance = ray_anchor(player_transform.translation.truncate())
        .distance(ray_anchor(apprentice_transform.translation.truncate()));

    if cast_tick(
        &mut caster,
        &mut player_mana,
        &mut apprentice_mana,
        anchor_distance,
        time.delta_secs(),
    ) {
        messages.write(CastStarted {
            kind: caster.active,
        });
    }
}

/// Applies ray-band effects to enemies while a spell is sustained.
fn ray_effects(
    time: Res<Time>,
    mut players: Query<(&Transform, &SpellCaster, &mut Mana), (With<Player>, Without<Apprentice>)>,
    apprentices: Query<&Transform, (With<Apprentice>, Without<Player>)>,
    mut enemies: Query<
        (&Transform, &mut Health),
        (With<Enemy>, Without<Player>, Without<Apprentice>),
    >,
) {
    let Ok((player_transform, caster, mut player_mana)) = players.single_mut() else {
        return;
    };
    if !caster.casting {
        return;
    }
    let Ok(apprentice_transform) = apprentices.single() else {
        return;
    };

    let a = ray_anchor(player_transform.translation.truncate());
    let b = ray_anchor(apprentice_transform.translation.truncate());
    let dt = time.delta_secs();

    for (enemy_transform, mut health) in &mut enemies {
        let center = enemy_transform.translation.truncate();
        if segment_distance(center, a, b) > RAY_HIT_DISTANCE {
            continue;
        }
        match caster.active {
            SpellKind::DeathRay => health.damage(DEATH_RAY_DAMAGE * dt),
            SpellKind::ManaRay => player_mana.drain(MANA_RAY_BURN * dt),
            SpellKind::None => {}
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<SpellCaster>().add_message::<CastStarted>();

    app.add_systems(
        Update,
        select_spell.in_set(GameSet::Input).run_if(gameplay_running),
    );

    app.add_systems(
        Update,
        (tick_casting, ray_effects)
            .chain()
            .in_set(GameSet::Spells)
            .run_if(gameplay_running),
    );

    app.add_plugins(beam::plugin);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DT: f32 = 1.0 / 60.0;

    fn caster_with(kind: SpellKind) -> SpellCaster {
        SpellCaster {
            active: kind,
            casting: false,
        }
    }

    fn full_mana(max: f32) -> Mana {
        Mana::new(max, 10.0)
    }

    #[test]
    fn no_spell_has_zero_definition() {
        let def = spell_def(SpellKind::None);
        assert_eq!(def.initial_cost, 0.0);
        assert_eq!(def.cost_per_sec, 0.0);
        assert_eq!(def.activation_distance, 0.0);
    }

    #[test]
    fn segment_distance_of_point_on_segment_is_zero() {
        let d = segment_distance(Vec2::new(50.0, 0.0), Vec2::ZERO, Vec2::new(100.0, 0.0));
        assert!(d.abs() < 1e-5);
    }

    #[test]
    fn segment_distance_is_perpendicular_inside_the_span() {
        let d = segment_distance(Vec2::new(50.0, 30.0), Vec2::ZERO, Vec2::new(100.0, 0.0));
        assert!((d - 30.0).abs() < 1e-4);
    }

    #[test]
    fn segment_distance_uses_endpoints_outside_the_span() {
        let d = segment_distance(Vec2::new(-40.0, 30.0), Vec2::ZERO, Vec2::new(100.0, 0.0));
        assert!((d - 50.0).abs() < 1e-4);
    }

    #[test]
    fn segment_distance_handles_degenerate_segment() {
        let d = segment_distance(Vec2::new(3.0, 4.0), Vec2::ZERO, Vec2::ZERO);
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn ray_anchor_sits_above_the_sprite_center() {
        assert_eq!(
            ray_anchor(Vec2::new(10.0, 20.0)),
            Vec2::new(10.0, 20.0 + RAY_ANCHOR_Y_OFFSET)
        );
    }

    #[test]
    fn initiation_deducts_the_initial_cost() {
        let mut caster = caster_with(SpellKind::ManaRay);
        let mut mana = full_mana(100.0);

        assert!(try_initiate(&mut caster, &mut mana, 100.0));
        assert!(caster.casting);
        assert_eq!(mana.current, 95.0);
    }

    #[test]
    fn initiation_fails_without_mana() {
        let mut caster = caster_with(SpellKind::DeathRay);
        let mut mana = full_mana(100.0);
        mana.drain(90.0); // 10 left < 20 initial cost

        assert!(!try_initiate(&mut caster, &mut mana, 100.0));
        assert!(!caster.casting);
        assert_eq!(mana.current, 10.0);
    }

    #[test]
    fn initiation_fails_out_of_range() {
        let mut caster = caster_with(SpellKind::ManaRay);
        let mut mana = full_mana(100.0);

        let too_far = spell_def(SpellKind::ManaRay).activation_distance + 1.0;
        assert!(!try_initiate(&mut caster, &mut mana, too_far));
        assert!(!caster.casting);
        assert_eq!(mana.current, 100.0);
    }

    #[test]
    fn no_selection_never_initiates() {
        let mut caster = caster_with(SpellKind::None);
        let mut mana = full_mana(100.0);

        assert!(!try_initiate(&mut caster, &mut mana, 0.0));
        assert!(!caster.casting);
    }

    #[test]
    fn sustain_drains_upkeep_per_tick() {
        let mut caster = caster_with(SpellKind::ManaRay);
        let mut player_mana = full_mana(100.0);
        let mut apprentice_mana = full_mana(50.0);
        apprentice_mana.drain(50.0);
        caster.casting = true;

        let started = cast_tick(&mut caster, &mut player_mana, &mut apprentice_mana, 100.0, DT);

        assert!(!started);
        assert!(caster.casting);
        let expected = 100.0 - spell_def(SpellKind::ManaRay).cost_per_sec * DT;
        assert!((player_mana.current - expected).abs() < 1e-4);
    }

    #[test]
    fn sustained_mana_ray_feeds_the_apprentice() {
        let mut caster = caster_with(SpellKind::ManaRay);
        let mut player_mana = full_mana(100.0);
        let mut apprentice_mana = Mana::new(50.0, 5.0);
        apprentice_mana.drain(40.0);
        caster.casting = true;

        let _ = cast_tick(&mut caster, &mut player_mana, &mut apprentice_mana, 100.0, DT);

        let expected = 10.0 + (5.0 + MANA_RAY_TRANSFER) * DT;
        assert!((apprentice_mana.current - expected).abs() < 1e-4);
    }

    #[test]
    fn sustained_death_ray_drains_the_apprentice() {
        let mut caster = caster_with(SpellKind::DeathRay);
        let mut player_mana = full_mana(100.0);
        let mut apprentice_mana = Mana::new(50.0, 0.0);
        caster.casting = true;

        let _ = cast_tick(&mut caster, &mut player_mana, &mut apprentice_mana, 100.0, DT);

        let expected = 50.0 - spell_def(SpellKind::DeathRay).cost_per_sec * DT;
        assert!((apprentice_mana.current - expected).abs() < 1e-4);
        assert!(caster.casting);
    }

    #[test]
    fn empty_apprentice_pool_force_stops_a_death_ray() {
        let mut caster = caster_with(SpellKind::DeathRay);
        let mut player_mana = full_mana(100.0);
        let mut apprentice_mana = Mana::new(50.0, 0.0);
        apprentice_mana.drain(49.9); // next drain tick bottoms out
        caster.casting = true;

        let _ = cast_tick(&mut caster, &mut player_mana, &mut apprentice_mana, 100.0, DT);

        assert!(!caster.casting);
        assert_eq!(caster.active, SpellKind::DeathRay, "selection survives");
    }

    #[test]
    fn exhaustion_stops_the_cast_but_keeps_the_selection() {
        let mut caster = caster_with(SpellKind::ManaRay);
        let mut player_mana = Mana::new(100.0, 0.0);
        player_mana.drain(100.0);
        let mut apprentice_mana = full_mana(50.0);
        caster.casting = true;

        let _ = cast_tick(&mut caster, &mut player_mana, &mut apprentice_mana, 100.0, DT);

        assert!(!caster.casting);
        assert_eq!(caster.active, SpellKind::ManaRay);
    }

    #[test]
    fn drifting_out_of_range_stops_the_cast() {
        let mut caster = caster_with(SpellKind::ManaRay);
        let mut player_mana = full_mana(100.0);
        let mut apprentice_mana = full_mana(50.0);
        caster.casting = true;

        let too_far = spell_def(SpellKind::ManaRay).activation_distance + 1.0;
        let _ = cast_tick(&mut caster, &mut player_mana, &mut apprentice_mana, too_far, DT);

        assert!(!caster.casting);
        assert_eq!(player_mana.current, 100.0, "no upkeep charged");
    }

    #[test]
    fn regen_only_runs_while_not_casting() {
        let mut caster = caster_with(SpellKind::None);
        let mut player_mana = Mana::new(100.0, 10.0);
        player_mana.drain(50.0);
        let mut apprentice_mana = full_mana(50.0);

        let _ = cast_tick(&mut caster, &mut player_mana, &mut apprentice_mana, 100.0, 1.0);
        assert!((player_mana.current - 60.0).abs() < 1e-4);

        // While casting, the player pool only pays upkeep — no regen.
        caster.active = SpellKind::ManaRay;
        caster.casting = true;
        let before = player_mana.current;
        let _ = cast_tick(&mut caster, &mut player_mana, &mut apprentice_mana, 100.0, 1.0);
        assert!(player_mana.current < before);
    }

    #[test]
    fn regen_can_re_trigger_initiation_in_the_same_frame() {
        let mut caster = caster_with(SpellKind::ManaRay);
        let mut player_mana = Mana::new(100.0, 10.0);
        player_mana.drain(95.5); // 4.5 left; initial cost is 5

        let mut apprentice_mana = full_mana(50.0);

        // One second of regen brings the pool to 14.5 ≥ 5, so the very same
        // tick initiates the cast.
        let started = cast_tick(&mut caster, &mut player_mana, &mut apprentice_mana, 100.0, 1.0);

        assert!(started);
        assert!(caster.casting);
    }

    #[test]
    fn death_ray_damage_is_exact_over_sustained_seconds() {
        // Two seconds of sustained death ray against a stationary enemy in
        // the band must remove exactly 2 * DEATH_RAY_DAMAGE health.
        let mut caster = caster_with(SpellKind::DeathRay);
        caster.casting = true;
        let mut player_mana = Mana::new(1000.0, 0.0);
        let mut apprentice_mana = Mana::new(1000.0, 0.0);
        let mut enemy = Health::new(1000.0);

        let seconds = 2.0;
        let steps = (seconds / DT).round() as u32;
        for _ in 0..steps {
            let _ = cast_tick(&mut caster, &mut player_mana, &mut apprentice_mana, 100.0, DT);
            assert!(caster.casting, "pools are deep enough to sustain throughout");
            // What ray_effects applies to an enemy inside the band each frame.
            enemy.damage(DEATH_RAY_DAMAGE * DT);
        }

        let dealt = 1000.0 - enemy.current;
        assert!(
            (dealt - seconds * DEATH_RAY_DAMAGE).abs() < 0.01,
            "expected {} damage, dealt {dealt}",
            seconds * DEATH_RAY_DAMAGE
        );

        // Upkeep is just as exact: cost_per_sec * seconds from the player.
        let upkeep = 1000.0 - player_mana.current;
        let expected = spell_def(SpellKind::DeathRay).cost_per_sec * seconds;
        assert!((upkeep - expected).abs() < 0.01);
    }
}
