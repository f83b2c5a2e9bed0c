//! Testing utilities for Bevy systems.

#![cfg(test)]

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::GameState;
use crate::menus::Menu;

/// Minimal app with both state machines initialized — the base for
/// state-aware system tests.
pub fn create_base_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.init_state::<GameState>();
    app.init_state::<Menu>();
    app
}

/// Transitions the app into gameplay and applies the change.
pub fn transition_to_gameplay(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Gameplay);
    app.update();
}

/// Asserts the number of entities matching the query filter.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let count = app
        .world_mut()
        .query_filtered::<(), F>()
        .iter(app.world())
        .count();
    assert_eq!(count, expected, "expected {expected} entities, found {count}");
}

/// Advances virtual time and runs one update.
#[allow(dead_code)]
pub fn advance_and_update(app: &mut App, dt: std::time::Duration) {
    app.world_mut()
        .resource_mut::<Time<Virtual>>()
        .advance_by(dt);
    app.update();
}
