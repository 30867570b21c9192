//! World plugin: scrolling star field backdrop.
//!
//! We intentionally build the backdrop from solid-color sprites so the
//! project has no assets. The field is seeded deterministically; stars
//! drift at per-star rates for a cheap parallax and wrap around the
//! arena's vertical span. Scrolling runs only while the session does.

use bevy::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::{arena::Arena, state::GameState, tunables::Tunables};
use crate::plugins::session::Session;

const STAR_COUNT: usize = 90;
const FIELD_SEED: u64 = 0x5EED_57A5;

#[derive(Component)]
struct Star {
    drift: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_starfield);
    app.add_systems(
        Update,
        scroll_starfield.run_if(in_state(GameState::InGame)),
    );
}

fn spawn_starfield(mut commands: Commands, arena: Res<Arena>) {
    let mut rng = SmallRng::seed_from_u64(FIELD_SEED);

    for _ in 0..STAR_COUNT {
        let x = rng.random_range(-arena.half_width..=arena.half_width);
        let y = rng.random_range(arena.cull_y()..=arena.spawn_y());
        // Deeper stars are smaller, dimmer and slower.
        let depth = rng.random_range(0.3..=1.0_f32);

        commands.spawn((
            Star { drift: depth },
            Sprite {
                color: Color::srgb(0.6 * depth + 0.2, 0.6 * depth + 0.2, 0.7 * depth + 0.3),
                custom_size: Some(Vec2::splat(1.0 + depth * 2.5)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
        ));
    }
}

fn scroll_starfield(
    time: Res<Time>,
    session: Res<Session>,
    tunables: Res<Tunables>,
    arena: Res<Arena>,
    mut q_stars: Query<(&mut Transform, &Star)>,
) {
    if !session.is_running() {
        return;
    }

    let span = arena.spawn_y() - arena.cull_y();
    let dy = tunables.scroll_speed * time.delta_secs();

    for (mut tf, star) in &mut q_stars {
        tf.translation.y -= dy * star.drift;
        if tf.translation.y < arena.cull_y() {
            tf.translation.y += span;
        }
    }
}
