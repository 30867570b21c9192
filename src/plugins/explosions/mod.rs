//! Explosion factory: short-lived flash sprites.
//!
//! The contact resolver only decides *where* an explosion happens; this
//! module owns the temporary entity and its scale-in / fade-out animation.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::messages::register_message;
use crate::common::state::GameState;
use crate::plugins::audio::SoundCue;

const EXPLOSION_SECS: f32 = 0.2;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnExplosion(pub Vec2);

#[derive(Component, Debug)]
pub struct Explosion {
    timer: Timer,
}

pub fn plugin(app: &mut App) {
    register_message::<SpawnExplosion>(app);
    app.add_systems(
        Update,
        (spawn_explosions, animate_explosions.after(spawn_explosions))
            .run_if(in_state(GameState::InGame)),
    );
}

pub fn spawn_explosions(
    mut commands: Commands,
    mut reader: MessageReader<SpawnExplosion>,
    mut cues: MessageWriter<SoundCue>,
) {
    for SpawnExplosion(at) in reader.read() {
        commands.spawn((
            Name::new("Explosion"),
            Explosion { timer: Timer::from_seconds(EXPLOSION_SECS, TimerMode::Once) },
            Sprite {
                color: Color::srgb(1.0, 0.6, 0.15),
                custom_size: Some(Vec2::splat(56.0)),
                ..default()
            },
            Transform { translation: at.extend(3.0), scale: Vec3::splat(0.1), ..default() },
            DespawnOnExit(GameState::InGame),
        ));
        cues.write(SoundCue::Explosion);
    }
}

/// Scale in over the first half of the lifetime, fade out over the second.
pub fn animate_explosions(
    time: Res<Time>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut Explosion, &mut Transform, &mut Sprite)>,
) {
    for (e, mut explosion, mut tf, mut sprite) in &mut q {
        explosion.timer.tick(time.delta());

        let dur = explosion.timer.duration().as_secs_f32().max(0.0001);
        let t = (explosion.timer.elapsed_secs() / dur).clamp(0.0, 1.0);

        tf.scale = Vec3::splat((t * 2.0).clamp(0.1, 1.0));

        let mut c = sprite.color.to_srgba();
        c.alpha = if t < 0.5 { 1.0 } else { 1.0 - (t - 0.5) * 2.0 };
        sprite.color = c.into();

        if explosion.timer.is_finished() {
            commands.entity(e).despawn();
        }
    }
}
