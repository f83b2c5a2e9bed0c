//! Elapsed survival time display.

use bevy::prelude::*;

use crate::gameplay::GameStartTime;
use crate::theme::{palette, widget};
use crate::{GameSet, GameState, gameplay_running};

/// Marker for the survival timer text.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct SurvivalTimerDisplay;

/// Formats whole seconds as `MM:SS`.
#[must_use]
pub fn format_elapsed(elapsed_secs: f32) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_secs = elapsed_secs.max(0.0) as u32;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

fn setup_survival_timer(mut commands: Commands) {
    commands.spawn((
        Name::new("Survival Timer"),
        SurvivalTimerDisplay,
        Text::new("00:00"),
        TextFont::from_font_size(palette::FONT_SIZE_HUD),
        TextColor(palette::BODY_TEXT),
        widget::top_right(16.0, 8.0),
        DespawnOnExit(GameState::Gameplay),
    ));
}

fn update_survival_timer(
    time: Res<Time<Virtual>>,
    start: Res<GameStartTime>,
    mut display: Single<&mut Text, With<SurvivalTimerDisplay>>,
) {
    **display = Text::new(format_elapsed(time.elapsed_secs() - start.0));
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<SurvivalTimerDisplay>();

    app.add_systems(OnEnter(GameState::Gameplay), setup_survival_timer);

    app.add_systems(
        Update,
        update_survival_timer
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}
