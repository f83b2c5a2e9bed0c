//! In-game HUD: wave banner and survival timer.

mod survival_timer;
mod wave_banner;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((wave_banner::plugin, survival_timer::plugin));
}
