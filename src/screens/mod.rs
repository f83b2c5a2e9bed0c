//! Screen plugins for each game state.

mod ending;
mod loading;
mod title;

use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_plugins((loading::plugin, title::plugin, ending::plugin));
}
