//! Wave progression: clear detection, inter-wave countdown, and ring spawning.

use bevy::prelude::*;
use rand::Rng;

use super::{Enemy, spawn_enemy};
use crate::gameplay::arena::{ARENA_CENTER, TILE_SIZE};
use crate::{GameSet, GameState, gameplay_running};

// === Constants ===

/// Seconds between a cleared field and the next wave spawning.
pub const WAVE_DELAY_SECS: f32 = 5.0;

/// Spawn ring radius around the arena center.
pub const SPAWN_RADIUS: f32 = 400.0;

/// Maximum per-axis magnitude of the random offset shared by a wave's spawns.
pub const SPAWN_JITTER: f32 = TILE_SIZE / 2.0;

// === Pure Functions ===

/// Number of enemies in a wave.
#[must_use]
pub const fn wave_enemy_count(wave: u32) -> u32 {
    2 * wave
}

/// Starting health of each enemy in a wave.
#[must_use]
pub fn wave_enemy_health(wave: u32) -> f32 {
    50.0 + wave as f32 * 10.0
}

/// Evenly spaced positions on the spawn ring, all shifted by `offset`.
#[must_use]
pub fn wave_spawn_positions(count: u32, center: Vec2, radius: f32, offset: Vec2) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / count.max(1) as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius + offset
        })
        .collect()
}

// === Resources ===

/// Wave progression state. Reset each time gameplay is entered.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct WaveState {
    /// Current wave id. Increments when the field clears.
    pub wave: u32,
    /// True while the inter-wave countdown runs.
    pub waiting: bool,
    /// Seconds accumulated toward [`WAVE_DELAY_SECS`].
    pub timer_secs: f32,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            wave: 1,
            waiting: false,
            timer_secs: 0.0,
        }
    }
}

/// Wave count reached, shown on the ending screen.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct WavesSurvived(pub u32);

// === Messages ===

/// Fired when a wave's enemies spawn.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveStarted {
    pub wave: u32,
}

// === Systems ===

fn reset_waves(mut commands: Commands) {
    commands.insert_resource(WaveState::default());
    commands.insert_resource(WavesSurvived::default());
}

/// The opening wave spawns the moment gameplay starts; the clear → wait →
/// spawn cycle produces every wave after it.
fn spawn_first_wave(mut commands: Commands, mut messages: MessageWriter<WaveStarted>) {
    spawn_wave(&mut commands, 1, &mut messages);
}

/// Detects a cleared field, runs the countdown, and spawns the next wave.
fn tick_waves(
    time: Res<Time>,
    enemies: Query<(), With<Enemy>>,
    mut state: ResMut<WaveState>,
    mut commands: Commands,
    mut messages: MessageWriter<WaveStarted>,
) {
    if !state.waiting {
        if enemies.is_empty() {
            state.waiting = true;
            state.wave += 1;
            state.timer_secs = 0.0;
        }
        return;
    }

    state.timer_secs += time.delta_secs();
    if state.timer_secs < WAVE_DELAY_SECS {
        return;
    }

    let wave = state.wave;
    spawn_wave(&mut commands, wave, &mut messages);
    state.waiting = false;
    state.timer_secs = 0.0;
}

/// Spawns a wave's enemies on the ring, all sharing one random offset.
fn spawn_wave(commands: &mut Commands, wave: u32, messages: &mut MessageWriter<WaveStarted>) {
    let mut rng = rand::rng();
    let offset = Vec2::new(
        rng.random_range(-SPAWN_JITTER..=SPAWN_JITTER),
        rng.random_range(-SPAWN_JITTER..=SPAWN_JITTER),
    );

    let health = wave_enemy_health(wave);
    let positions = wave_spawn_positions(wave_enemy_count(wave), ARENA_CENTER, SPAWN_RADIUS, offset);
    for (variant, position) in positions.into_iter().enumerate() {
        let _ = spawn_enemy(commands, variant as u32, position, health);
    }

    info!("wave {wave} started");
    messages.write(WaveStarted { wave });
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<WaveState>()
        .register_type::<WavesSurvived>()
        .init_resource::<WaveState>()
        .init_resource::<WavesSurvived>()
        .add_message::<WaveStarted>();

    app.add_systems(
        OnEnter(GameState::Gameplay),
        (reset_waves, spawn_first_wave).chain(),
    );

    app.add_systems(
        Update,
        tick_waves.in_set(GameSet::Waves).run_if(gameplay_running),
    );
}
