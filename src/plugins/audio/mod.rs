//! Sound cue boundary.
//!
//! Gameplay emits fire-and-forget cues; playback itself belongs to the
//! platform layer. The sink below is the single place a playback backend
//! hooks into, so gameplay code never knows whether audio is wired up
//! (headless tests are not).

use bevy::prelude::*;

use crate::common::messages::register_message;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Fire,
    Explosion,
    GainLife,
}

pub fn plugin(app: &mut App) {
    register_message::<SoundCue>(app);
    app.add_systems(Update, drain_sound_cues);
}

fn drain_sound_cues(mut cues: MessageReader<SoundCue>) {
    for cue in cues.read() {
        debug!("sound cue: {cue:?}");
    }
}
