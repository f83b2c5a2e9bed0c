//! World-space status bars above actors: health, plus mana for casters.

use bevy::prelude::*;

use crate::gameplay::{Health, Mana};
use crate::{GameSet, gameplay_running};

// === Constants ===

/// Health bar colors.
const HEALTH_BAR_BG_COLOR: Color = Color::srgb(0.8, 0.1, 0.1);
const HEALTH_BAR_FILL_COLOR: Color = Color::srgb(0.1, 0.9, 0.1);

/// Mana bar colors.
const MANA_BAR_BG_COLOR: Color = Color::srgb(0.15, 0.15, 0.4);
const MANA_BAR_FILL_COLOR: Color = Color::srgb(0.25, 0.45, 0.95);

/// Default bar width for tile-sized actors (pixels).
pub const ACTOR_BAR_WIDTH: f32 = 48.0;

/// Default bar height for tile-sized actors (pixels).
pub const ACTOR_BAR_HEIGHT: f32 = 4.0;

/// Default bar Y offset for tile-sized actors (pixels above center).
pub const ACTOR_BAR_Y_OFFSET: f32 = 40.0;

/// Vertical gap between the health bar and the mana bar beneath it.
const MANA_BAR_GAP: f32 = 6.0;

// === Components ===

/// Marker: red background bar (full width, shows "missing" HP).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HealthBarBackground;

/// Marker: green foreground bar (scales with current/max HP).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HealthBarFill;

/// Marker: dark background bar behind the mana fill.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ManaBarBackground;

/// Marker: blue foreground bar (scales with current/max mana).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ManaBarFill;

/// Configuration for status bar sizing. Required on actors that show bars.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct StatusBarConfig {
    pub width: f32,
    pub height: f32,
    pub y_offset: f32,
}

// === Systems ===

/// Spawns bar children when `Health` lands on an entity carrying a
/// `StatusBarConfig`. Entities that also carry `Mana` get a second bar.
fn spawn_status_bars(
    add: On<Add, Health>,
    configs: Query<(&StatusBarConfig, Has<Mana>)>,
    mut commands: Commands,
) {
    let Ok((config, has_mana)) = configs.get(add.entity) else {
        return; // Entity has Health but opted out of bars.
    };
    let size = Vec2::new(config.width, config.height);
    commands.entity(add.entity).with_children(|parent| {
        parent.spawn((
            Name::new("Health Bar BG"),
            Sprite::from_color(HEALTH_BAR_BG_COLOR, size),
            Transform::from_xyz(0.0, config.y_offset, 1.0),
            HealthBarBackground,
        ));
        parent.spawn((
            Name::new("Health Bar Fill"),
            Sprite::from_color(HEALTH_BAR_FILL_COLOR, size),
            Transform::from_xyz(0.0, config.y_offset, 1.1),
            HealthBarFill,
        ));
        if has_mana {
            let y_offset = config.y_offset - MANA_BAR_GAP;
            parent.spawn((
                Name::new("Mana Bar BG"),
                Sprite::from_color(MANA_BAR_BG_COLOR, size),
                Transform::from_xyz(0.0, y_offset, 1.0),
                ManaBarBackground,
            ));
            parent.spawn((
                Name::new("Mana Bar Fill"),
                Sprite::from_color(MANA_BAR_FILL_COLOR, size),
                Transform::from_xyz(0.0, y_offset, 1.1),
                ManaBarFill,
            ));
        }
    });
}

/// Updates health bar fill width based on current/max HP.
fn update_health_bars(
    health_query: Query<(&Health, &Children, &StatusBarConfig)>,
    mut bar_query: Query<&mut Transform, With<HealthBarFill>>,
) {
    for (health, children, config) in &health_query {
        for child in children.iter() {
            if let Ok(mut transform) = bar_query.get_mut(child) {
                let ratio = health.ratio();
                transform.scale.x = ratio;
                // Shift left to keep the bar left-aligned as it shrinks.
                transform.translation.x = config.width.mul_add(-(1.0 - ratio), 0.0) / 2.0;
            }
        }
    }
}

/// Updates mana bar fill width based on current/max mana.
fn update_mana_bars(
    mana_query: Query<(&Mana, &Children, &StatusBarConfig)>,
    mut bar_query: Query<&mut Transform, (With<ManaBarFill>, Without<HealthBarFill>)>,
) {
    for (mana, children, config) in &mana_query {
        for child in children.iter() {
            if let Ok(mut transform) = bar_query.get_mut(child) {
                let ratio = mana.ratio();
                transform.scale.x = ratio;
                transform.translation.x = config.width.mul_add(-(1.0 - ratio), 0.0) / 2.0;
            }
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<HealthBarBackground>()
        .register_type::<HealthBarFill>()
        .register_type::<ManaBarBackground>()
        .register_type::<ManaBarFill>()
        .register_type::<StatusBarConfig>();

    app.add_observer(spawn_status_bars);

    app.add_systems(
        Update,
        (update_health_bars, update_mana_bars)
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}
