//! Title screen plugin.

use bevy::prelude::*;

use crate::GameState;
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Title), setup_title_screen)
        .add_systems(
            Update,
            handle_title_input.run_if(in_state(GameState::Title)),
        );
}

fn setup_title_screen(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Title Screen"),
        DespawnOnExit(GameState::Title),
        children![
            (
                Text::new("The Apprentice"),
                TextFont::from_font_size(palette::FONT_SIZE_TITLE),
                TextColor(palette::HEADER_TEXT),
            ),
            widget::button(
                "Start",
                |_: On<Pointer<Click>>, mut next_state: ResMut<NextState<GameState>>| {
                    next_state.set(GameState::Gameplay);
                },
            ),
            widget::prompt("WASD move | 1/2 select spell | 0 dismiss | F follow | ESC pause"),
            widget::prompt("Press SPACE to Start"),
        ],
    ));
}

fn handle_title_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        next_state.set(GameState::Gameplay);
    }
}
