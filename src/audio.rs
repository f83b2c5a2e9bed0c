//! Message-driven sound effects.
//!
//! Gameplay never touches the audio device: it emits messages, and this
//! module turns them into one-shot `AudioPlayer` entities.

use bevy::prelude::*;

use crate::gameplay::combat::EnemyDied;
use crate::gameplay::enemies::waves::WaveStarted;
use crate::gameplay::spells::CastStarted;

// === Resources ===

/// Sound handles loaded at startup.
#[derive(Resource, Debug)]
pub struct SoundAssets {
    pub wave_started: Handle<AudioSource>,
    pub enemy_died: Handle<AudioSource>,
    pub cast_started: Handle<AudioSource>,
}

// === Systems ===

fn load_sounds(asset_server: Res<AssetServer>, mut commands: Commands) {
    commands.insert_resource(SoundAssets {
        wave_started: asset_server.load("audio/wave_started.ogg"),
        enemy_died: asset_server.load("audio/enemy_died.ogg"),
        cast_started: asset_server.load("audio/cast_started.ogg"),
    });
}

/// Spawns a despawn-on-finish player for every gameplay sound message.
fn play_gameplay_sounds(
    sounds: Res<SoundAssets>,
    mut waves: MessageReader<WaveStarted>,
    mut deaths: MessageReader<EnemyDied>,
    mut casts: MessageReader<CastStarted>,
    mut commands: Commands,
) {
    for _ in waves.read() {
        commands.spawn((
            AudioPlayer(sounds.wave_started.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
    for _ in deaths.read() {
        commands.spawn((
            AudioPlayer(sounds.enemy_died.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
    for _ in casts.read() {
        commands.spawn((
            AudioPlayer(sounds.cast_started.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    // Both systems stand down in headless runs (no asset server, no handles).
    app.add_systems(
        Startup,
        load_sounds.run_if(resource_exists::<AssetServer>),
    );
    app.add_systems(
        Update,
        play_gameplay_sounds.run_if(resource_exists::<SoundAssets>),
    );
}
