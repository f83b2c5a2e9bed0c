//! The Apprentice game entry point.

use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "The Apprentice".to_string(),
                        resolution: (800, 450).into(),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins((the_apprentice::third_party::plugin, the_apprentice::plugin))
        .run();
}
