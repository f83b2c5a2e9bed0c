//! Menu overlays that can appear on top of a screen.
//!
//! The `Menu` state is orthogonal to `GameState` — `Menu::Pause` appears
//! while `GameState::Gameplay` stays active underneath.

mod pause;

use bevy::prelude::*;

/// Menu overlay states. Orthogonal to `GameState`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum Menu {
    /// No menu overlay is active.
    #[default]
    None,
    /// Pause menu (shown in-game).
    Pause,
}

pub fn plugin(app: &mut App) {
    app.init_state::<Menu>();
    app.add_plugins(pause::plugin);

    // Pause/unpause virtual time when the overlay opens/closes. This freezes
    // physics and every timer- and dt-driven gameplay system at once.
    app.add_systems(OnExit(Menu::None), pause_virtual_time);
    app.add_systems(OnEnter(Menu::None), unpause_virtual_time);
}

fn pause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn unpause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}
