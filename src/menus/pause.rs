//! Pause overlay: toggle input and the dimmed "PAUSED" screen.

use bevy::prelude::*;

use super::Menu;
use crate::GameState;
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Pause), setup_pause_overlay);
    app.add_systems(Update, handle_pause_input);
}

/// Escape toggles the pause overlay during gameplay; Q quits to the title
/// while paused.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    game_state: Res<State<GameState>>,
    menu: Res<State<Menu>>,
    mut next_menu: ResMut<NextState<Menu>>,
    mut next_game_state: ResMut<NextState<GameState>>,
) {
    match menu.get() {
        Menu::None => {
            if *game_state.get() == GameState::Gameplay
                && keyboard.just_pressed(KeyCode::Escape)
            {
                next_menu.set(Menu::Pause);
            }
        }
        Menu::Pause => {
            if keyboard.just_pressed(KeyCode::Escape) {
                next_menu.set(Menu::None);
            }
            if keyboard.just_pressed(KeyCode::KeyQ) {
                next_menu.set(Menu::None);
                next_game_state.set(GameState::Title);
            }
        }
    }
}

fn setup_pause_overlay(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Pause Overlay"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        GlobalZIndex(1),
        DespawnOnExit(Menu::Pause),
        children![
            widget::header("PAUSED"),
            widget::prompt("Press ESC to Resume | Q to Quit"),
        ],
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_pause_test_app() -> App {
        let mut app = crate::testing::create_base_test_app();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_systems(Update, handle_pause_input);
        // Enter gameplay so Escape is armed.
        crate::testing::transition_to_gameplay(&mut app);
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        app.update();
        // No InputPlugin in this app, so expire the press by hand.
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(key);
        input.clear();
        app.update();
    }

    #[test]
    fn escape_opens_the_pause_overlay() {
        let mut app = create_pause_test_app();

        press(&mut app, KeyCode::Escape);

        assert_eq!(*app.world().resource::<State<Menu>>().get(), Menu::Pause);
    }

    #[test]
    fn escape_again_closes_the_overlay() {
        let mut app = create_pause_test_app();

        press(&mut app, KeyCode::Escape);
        press(&mut app, KeyCode::Escape);

        assert_eq!(*app.world().resource::<State<Menu>>().get(), Menu::None);
    }

    #[test]
    fn quit_returns_to_the_title() {
        let mut app = create_pause_test_app();

        press(&mut app, KeyCode::Escape);
        press(&mut app, KeyCode::KeyQ);

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::Title
        );
        assert_eq!(*app.world().resource::<State<Menu>>().get(), Menu::None);
    }

    #[test]
    fn escape_does_nothing_on_the_title_screen() {
        let mut app = create_pause_test_app();
        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Title);
        app.update();

        press(&mut app, KeyCode::Escape);

        assert_eq!(*app.world().resource::<State<Menu>>().get(), Menu::None);
    }
}
