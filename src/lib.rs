//! The Apprentice — a top-down arena survival game.
//!
//! A player-controlled mage and an apprentice companion against waves of
//! pursuing enemies. Spells are channeled as a ray between the two casters,
//! gated by a shared mana economy.

pub mod audio;
#[cfg(feature = "dev")]
mod dev_tools;
pub mod gameplay;
pub mod menus;
pub mod screens;
#[cfg(test)]
pub mod testing;
pub mod theme;
pub mod third_party;

use bevy::prelude::*;

// === States ===

/// Primary game screens. Title → Gameplay → Ending, looping back to Title
/// (or straight into Gameplay via "play again").
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum GameState {
    /// Initial asset-loading state.
    #[default]
    Loading,
    /// Title screen.
    Title,
    /// Active gameplay.
    Gameplay,
    /// Defeat screen, shows the wave reached.
    Ending,
}

// === System Sets ===

/// Frame-ordered gameplay stages. Configured as a chain so every stage reads
/// the previous stage's output within the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Input polling into the frame's `MoveIntent` snapshot.
    Input,
    /// Player / apprentice / enemy steering.
    Movement,
    /// Spell casting state machine and ray effects.
    Spells,
    /// Contact damage and invincibility timers.
    Combat,
    /// Death resolution and defeat detection.
    Death,
    /// Wave-clear detection and spawning.
    Waves,
    /// Presentation reads: bars, banner, beam.
    Ui,
}

// === Z Layers ===

/// Arena background quad.
pub const Z_ARENA: f32 = 0.0;
/// Player, apprentice, and enemy sprites.
pub const Z_ACTOR: f32 = 10.0;
/// Spell beam, drawn over actors.
pub const Z_BEAM: f32 = 15.0;

// === Run Conditions ===

/// Condition: the gameplay screen is active and no menu overlay is open.
pub fn gameplay_running(
    game_state: Res<State<GameState>>,
    menu: Res<State<menus::Menu>>,
) -> bool {
    *game_state.get() == GameState::Gameplay && *menu.get() == menus::Menu::None
}

// === Plugin ===

/// Top-level plugin: states, set ordering, and every domain plugin.
pub fn plugin(app: &mut App) {
    app.init_state::<GameState>();

    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Movement,
            GameSet::Spells,
            GameSet::Combat,
            GameSet::Death,
            GameSet::Waves,
            GameSet::Ui,
        )
            .chain(),
    );

    app.add_systems(Startup, setup_camera);

    app.add_plugins((
        theme::plugin,
        menus::plugin,
        screens::plugin,
        gameplay::plugin,
        audio::plugin,
    ));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);
}

/// Spawns the global 2D camera. Persists across all states (do NOT add `DespawnOnExit`).
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn game_state_default_is_loading() {
        assert_eq!(GameState::default(), GameState::Loading);
    }

    #[test]
    fn game_states_are_distinct() {
        assert_ne!(GameState::Loading, GameState::Title);
        assert_ne!(GameState::Title, GameState::Gameplay);
        assert_ne!(GameState::Gameplay, GameState::Ending);
    }
}
