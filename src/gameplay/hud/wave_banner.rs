//! Wave banner: current wave id, or the countdown to the next one.

use bevy::prelude::*;

use crate::gameplay::enemies::waves::{WAVE_DELAY_SECS, WaveState};
use crate::theme::{palette, widget};
use crate::{GameSet, GameState, gameplay_running};

// === Components ===

/// Marker for the wave banner text.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct WaveBanner;

// === Pure Functions ===

/// Banner text for the current wave state.
#[must_use]
pub fn banner_text(state: &WaveState) -> String {
    if state.waiting {
        let remaining = (WAVE_DELAY_SECS - state.timer_secs).max(0.0).ceil();
        format!("Wave {} in {remaining:.0}s", state.wave)
    } else {
        format!("Wave {}", state.wave)
    }
}

// === Systems ===

fn setup_wave_banner(mut commands: Commands) {
    commands.spawn((
        Name::new("Wave Banner"),
        WaveBanner,
        Text::new("Wave 1"),
        TextFont::from_font_size(palette::FONT_SIZE_HUD),
        TextColor(palette::HEADER_TEXT),
        widget::top_left(16.0, 8.0),
        DespawnOnExit(GameState::Gameplay),
    ));
}

fn update_wave_banner(state: Res<WaveState>, mut banner: Single<&mut Text, With<WaveBanner>>) {
    **banner = Text::new(banner_text(&state));
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<WaveBanner>();

    app.add_systems(OnEnter(GameState::Gameplay), setup_wave_banner);

    app.add_systems(
        Update,
        update_wave_banner
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}
