//! Gameplay domain: shared actor components and the per-frame simulation plugins.

pub mod apprentice;
pub mod arena;
pub mod combat;
pub mod enemies;
pub mod hud;
pub mod input;
pub mod player;
pub mod spells;

use bevy::prelude::*;

use crate::GameState;

// === Shared Components ===

/// Hit points with clamped mutation. `current` never leaves `[0, max]`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    /// Creates a full health pool.
    #[must_use]
    pub const fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Applies damage, clamping at zero.
    pub fn damage(&mut self, amount: f32) {
        self.current = (self.current - amount).clamp(0.0, self.max);
    }

    /// Restores health, clamping at the maximum.
    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount).clamp(0.0, self.max);
    }

    /// Whether the pool has run out.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Fill fraction in `[0, 1]`, for bar rendering.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        (self.current / self.max).clamp(0.0, 1.0)
    }
}

/// Mana pool with clamped mutation and a passive regeneration rate.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Mana {
    pub current: f32,
    pub max: f32,
    pub regen_per_sec: f32,
}

impl Mana {
    /// Creates a full mana pool.
    #[must_use]
    pub const fn new(max: f32, regen_per_sec: f32) -> Self {
        Self {
            current: max,
            max,
            regen_per_sec,
        }
    }

    /// Passive regeneration for one frame, clamped at the maximum.
    pub fn regen(&mut self, dt: f32) {
        self.restore(self.regen_per_sec * dt);
    }

    /// Adds mana, clamping at the maximum.
    pub fn restore(&mut self, amount: f32) {
        self.current = (self.current + amount).clamp(0.0, self.max);
    }

    /// Removes mana, clamping at zero.
    pub fn drain(&mut self, amount: f32) {
        self.current = (self.current - amount).clamp(0.0, self.max);
    }

    /// Deducts `amount` only if affordable. Returns whether the spend happened.
    pub fn try_spend(&mut self, amount: f32) -> bool {
        if self.current < amount {
            return false;
        }
        self.drain(amount);
        true
    }

    /// Whether the pool has run out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    /// Fill fraction in `[0, 1]`, for bar rendering.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        (self.current / self.max).clamp(0.0, 1.0)
    }
}

/// Post-hit grace period. Active while `remaining_secs` is above zero.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Invincibility {
    pub remaining_secs: f32,
}

impl Invincibility {
    /// Starts (or restarts) the grace period.
    pub fn trigger(&mut self, duration_secs: f32) {
        self.remaining_secs = duration_secs;
    }

    /// Counts the grace period down by one frame.
    pub fn tick(&mut self, dt: f32) {
        self.remaining_secs = (self.remaining_secs - dt).max(0.0);
    }

    /// Whether hits are currently ignored.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.remaining_secs > 0.0
    }
}

/// Movement capability: speed in world units per second.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Movement {
    pub speed: f32,
}

// === Resources ===

/// `Time<Virtual>` elapsed seconds captured when gameplay began.
#[derive(Resource, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct GameStartTime(pub f32);

// === Systems ===

fn record_game_start(time: Res<Time<Virtual>>, mut commands: Commands) {
    commands.insert_resource(GameStartTime(time.elapsed_secs()));
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Health>()
        .register_type::<Mana>()
        .register_type::<Invincibility>()
        .register_type::<Movement>()
        .register_type::<GameStartTime>()
        .init_resource::<GameStartTime>();

    app.add_systems(OnEnter(GameState::Gameplay), record_game_start);

    app.add_plugins((
        arena::plugin,
        input::plugin,
        player::plugin,
        apprentice::plugin,
        enemies::plugin,
        spells::plugin,
        combat::plugin,
        hud::plugin,
    ));
}
