//! Ending screen: the run's result with play-again and title exits.

use bevy::prelude::*;

use crate::GameState;
use crate::gameplay::enemies::waves::WavesSurvived;
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Ending), setup_ending_screen)
        .add_systems(
            Update,
            handle_ending_input.run_if(in_state(GameState::Ending)),
        );
}

fn setup_ending_screen(mut commands: Commands, survived: Res<WavesSurvived>) {
    commands.spawn((
        widget::ui_root("Ending Screen"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        DespawnOnExit(GameState::Ending),
        children![(
            Name::new("Ending Panel"),
            Node {
                width: Val::Px(500.0),
                min_height: Val::Px(300.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceEvenly,
                padding: UiRect::all(Val::Px(40.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(palette::PANEL_BACKGROUND),
            BorderColor::all(palette::PANEL_BORDER),
            children![
                (
                    Text::new("THE APPRENTICE HAS FALLEN"),
                    TextFont::from_font_size(palette::FONT_SIZE_LABEL),
                    TextColor(palette::DEATH_BEAM),
                ),
                widget::label(format!("You reached wave {}", survived.0)),
                widget::button(
                    "Play Again",
                    |_: On<Pointer<Click>>, mut next_state: ResMut<NextState<GameState>>| {
                        next_state.set(GameState::Gameplay);
                    },
                ),
                widget::button(
                    "Title",
                    |_: On<Pointer<Click>>, mut next_state: ResMut<NextState<GameState>>| {
                        next_state.set(GameState::Title);
                    },
                ),
            ],
        )],
    ));
}

/// Space restarts straight away, mirroring the Play Again button.
fn handle_ending_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        next_state.set(GameState::Gameplay);
    }
}
