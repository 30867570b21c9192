//! Pickups plugin: bonus-life drops.
//!
//! Consumes the director's `SpawnLife` requests. A pickup falls straight
//! down a random lane; catching it is resolved by the contact rules,
//! missing it just lets it fall past the cull line.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::{arena::Arena, layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::contact::Category;
use crate::plugins::session::{self, SpawnLife};

const PICKUP_SIZE: Vec2 = Vec2::new(26.0, 26.0);
const LANE_MARGIN: f32 = 30.0;

#[derive(Component)]
pub struct LifePickup;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        spawn_lives
            .after(session::tick_spawn_timers)
            .run_if(in_state(GameState::InGame)),
    );
    app.add_systems(
        FixedUpdate,
        despawn_fallen.run_if(in_state(GameState::InGame)),
    );
}

pub fn spawn_lives(
    mut commands: Commands,
    mut reader: MessageReader<SpawnLife>,
    arena: Res<Arena>,
    tunables: Res<Tunables>,
    mut rng: Local<Option<SmallRng>>,
) {
    let rng = rng.get_or_insert_with(SmallRng::from_os_rng);

    for _ in reader.read() {
        let x = rng.random_range(-arena.half_width + LANE_MARGIN..=arena.half_width - LANE_MARGIN);
        let fall = (arena.cull_y() - arena.spawn_y()) / tunables.life_fall_secs;

        commands.spawn((
            Name::new("Life"),
            LifePickup,
            Category::Life,
            Sprite {
                color: Color::srgb(0.3, 0.9, 0.4),
                custom_size: Some(PICKUP_SIZE),
                ..default()
            },
            Transform::from_xyz(x, arena.spawn_y(), 2.0),
            RigidBody::Kinematic,
            Collider::rectangle(PICKUP_SIZE.x, PICKUP_SIZE.y),
            CollisionLayers::new(Layer::Life, [Layer::Player]),
            LinearVelocity(Vec2::new(0.0, fall)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

pub fn despawn_fallen(
    mut commands: Commands,
    arena: Res<Arena>,
    q: Query<(Entity, &Transform), With<LifePickup>>,
) {
    for (e, tf) in &q {
        if tf.translation.y <= arena.cull_y() {
            commands.entity(e).despawn();
        }
    }
}
